use std::io;

use crate::error::Result;
use crate::filter::IncludeAllFilter;
use crate::outcome::{FailureReport, SuiteOutcomes};
use crate::renderer::CharacterRenderer;
use crate::runcontext::RunContext;
use crate::suite::Suite;

/// Run the suite quietly, honoring pending marks.
pub fn run_quiet(suite: &Suite) -> Result<SuiteOutcomes> {
    suite.run(
        &RunContext::default(),
        &IncludeAllFilter::new(),
        &mut io::sink(),
        &CharacterRenderer::new(),
    )
}

/// Panic with a report of every failed check unless the whole suite passes.
///
/// Meant for use inside `#[test]` functions.
pub fn assert_conforms(suite: &Suite) {
    let outcomes = match run_quiet(suite) {
        Ok(outcomes) => outcomes,
        Err(e) => panic!("{}", e),
    };
    let report = FailureReport::from_outcomes(&outcomes);
    if !report.is_empty() {
        panic!("{}", report);
    }
}
