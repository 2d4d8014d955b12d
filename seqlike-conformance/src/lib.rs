//! Conformance checks for `seqlike` backends.
//!
//! A [`Suite`] holds registered backends and runs the same battery of checks,
//! one per [`Operation`](seqlike::Operation), against every one of them.
//! Outcomes are labelled with the backend and the operation, so a single
//! misbehaving backend is easy to spot.
mod backend;
mod battery;
mod cli;
mod compare;
mod error;
mod filter;
mod outcome;
mod renderer;
mod runcontext;
mod suite;
mod testing;

pub use backend::{Backend, Conformance};
pub use battery::{run_check, CheckResult, Failure};
pub use cli::cli;
pub use compare::{compare_ordered, Mismatch};
pub use error::{Error, Result};
pub use filter::{CheckFilter, IncludeAllFilter, NameFilter, PendingFile};
pub use outcome::{
    BackendOutcomes, CheckOutcome, FailureReport, Outcomes, SuiteOutcomes, TestOutcome,
};
pub use renderer::{CharacterRenderer, Renderer, VerboseRenderer};
pub use runcontext::RunContext;
pub use suite::Suite;
pub use testing::{assert_conforms, run_quiet};
