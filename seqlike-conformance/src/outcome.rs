use std::fmt::{self, Write};

use crossterm::style::Stylize;
use seqlike::Operation;

use crate::battery::Failure;

#[derive(Debug, Clone, PartialEq)]
pub enum TestOutcome {
    Passed,
    Failed(Failure),
    /// Skipped because the operation is marked pending for the backend.
    Pending(Option<String>),
    Panic(String),
}

impl TestOutcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, Self::Passed)
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(..) | Self::Panic(..))
    }
}

impl fmt::Display for TestOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestOutcome::Passed => write!(f, "{}", "PASS".green()),
            TestOutcome::Failed(failure) => write!(f, "{} {}", "FAIL".red(), failure),
            TestOutcome::Pending(reason) => match reason {
                Some(reason) => write!(f, "{} {}", "PENDING".yellow(), reason),
                None => write!(f, "{}", "PENDING".yellow()),
            },
            TestOutcome::Panic(message) => write!(f, "{} {}", "PANIC".red(), message),
        }
    }
}

/// Counting over a collection of check outcomes.
pub trait Outcomes {
    fn outcomes(&self) -> Vec<&CheckOutcome>;
    fn filtered(&self) -> usize;

    fn total(&self) -> usize {
        self.outcomes().len()
    }

    fn count<F>(&self, f: F) -> usize
    where
        F: Fn(&CheckOutcome) -> bool,
    {
        self.outcomes().iter().filter(|outcome| f(outcome)).count()
    }

    fn passed(&self) -> usize {
        self.count(|outcome| matches!(outcome.outcome, TestOutcome::Passed))
    }
    fn failed(&self) -> usize {
        self.count(|outcome| matches!(outcome.outcome, TestOutcome::Failed(..)))
    }
    fn panicked(&self) -> usize {
        self.count(|outcome| matches!(outcome.outcome, TestOutcome::Panic(..)))
    }
    fn pending(&self) -> usize {
        self.count(|outcome| matches!(outcome.outcome, TestOutcome::Pending(..)))
    }

    fn has_failures(&self) -> bool {
        self.failed() > 0 || self.panicked() > 0
    }

    fn display(&self) -> String {
        let mut s = String::new();
        // writing into a String cannot fail
        let _ = write!(s, "Total: {}", self.total());
        let _ = write!(s, " Passed: {}", self.passed());
        let _ = write!(s, " Failed: {}", self.failed());
        let _ = write!(s, " Panicked: {}", self.panicked());
        let _ = write!(s, " Pending: {}", self.pending());
        let _ = write!(s, " Filtered: {}", self.filtered());
        s
    }
}

#[derive(Debug)]
pub struct CheckOutcome {
    pub operation: Operation,
    pub outcome: TestOutcome,
}

/// The outcomes of the battery for one backend.
#[derive(Debug)]
pub struct BackendOutcomes {
    pub backend: String,
    pub outcomes: Vec<CheckOutcome>,
    pub filtered: usize,
}

impl BackendOutcomes {
    pub fn new(backend: &str) -> Self {
        Self {
            backend: backend.to_string(),
            outcomes: Vec::new(),
            filtered: 0,
        }
    }

    pub fn add_outcome(&mut self, operation: Operation, outcome: TestOutcome) {
        self.outcomes.push(CheckOutcome { operation, outcome });
    }

    pub fn add_filtered(&mut self) {
        self.filtered += 1;
    }

    /// Operations whose check did not pass, pending ones included.
    pub fn not_passing(&self) -> Vec<Operation> {
        self.outcomes
            .iter()
            .filter(|outcome| !outcome.outcome.is_passed())
            .map(|outcome| outcome.operation)
            .collect()
    }

    pub fn get(&self, operation: Operation) -> Option<&TestOutcome> {
        self.outcomes
            .iter()
            .find(|outcome| outcome.operation == operation)
            .map(|outcome| &outcome.outcome)
    }
}

impl Outcomes for BackendOutcomes {
    fn outcomes(&self) -> Vec<&CheckOutcome> {
        self.outcomes.iter().collect()
    }
    fn filtered(&self) -> usize {
        self.filtered
    }
}

/// The outcomes of a whole suite run, per backend in registration order.
#[derive(Debug, Default)]
pub struct SuiteOutcomes {
    pub outcomes: Vec<BackendOutcomes>,
}

impl SuiteOutcomes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_outcomes(&mut self, backend_outcomes: BackendOutcomes) {
        self.outcomes.push(backend_outcomes);
    }

    pub fn backend(&self, label: &str) -> Option<&BackendOutcomes> {
        self.outcomes
            .iter()
            .find(|outcomes| outcomes.backend == label)
    }

    /// Every failed or panicked check, labelled by backend.
    pub fn failures(&self) -> Vec<(&str, &CheckOutcome)> {
        self.outcomes
            .iter()
            .flat_map(|backend_outcomes| {
                backend_outcomes
                    .outcomes
                    .iter()
                    .filter(|outcome| outcome.outcome.is_failure())
                    .map(move |outcome| (backend_outcomes.backend.as_str(), outcome))
            })
            .collect()
    }
}

impl Outcomes for SuiteOutcomes {
    fn outcomes(&self) -> Vec<&CheckOutcome> {
        self.outcomes
            .iter()
            .flat_map(|backend_outcomes| backend_outcomes.outcomes())
            .collect()
    }

    fn filtered(&self) -> usize {
        self.outcomes
            .iter()
            .map(|backend_outcomes| backend_outcomes.filtered())
            .sum()
    }
}

/// A list of failures, one line per backend and operation.
#[derive(Debug)]
pub struct FailureReport(pub Vec<(String, Operation, TestOutcome)>);

impl FailureReport {
    pub fn from_outcomes(outcomes: &SuiteOutcomes) -> Self {
        Self(
            outcomes
                .failures()
                .into_iter()
                .map(|(backend, outcome)| {
                    (
                        backend.to_string(),
                        outcome.operation,
                        outcome.outcome.clone(),
                    )
                })
                .collect(),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for FailureReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for (backend, operation, outcome) in self.0.iter() {
            writeln!(f, "{} {} ... {}", backend, operation, outcome)?;
        }
        Ok(())
    }
}
