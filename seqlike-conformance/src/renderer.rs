use std::io::{self, Write};

use crossterm::{execute, style, style::Stylize};
use seqlike::Operation;

use crate::outcome::{BackendOutcomes, TestOutcome};

/// Renders a suite run to a terminal, one backend at a time.
pub trait Renderer {
    fn render_backend(&self, out: &mut dyn Write, label: &str) -> io::Result<()>;
    fn render_check(&self, out: &mut dyn Write, operation: Operation) -> io::Result<()>;
    fn render_outcome(&self, out: &mut dyn Write, outcome: &TestOutcome) -> io::Result<()>;
    fn render_backend_summary(
        &self,
        out: &mut dyn Write,
        outcomes: &BackendOutcomes,
    ) -> io::Result<()>;
}

/// One character per check, failures listed after each backend.
pub struct CharacterRenderer {}

impl CharacterRenderer {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for CharacterRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for CharacterRenderer {
    fn render_backend(&self, out: &mut dyn Write, label: &str) -> io::Result<()> {
        write!(out, "{} ", label)
    }

    fn render_check(&self, _out: &mut dyn Write, _operation: Operation) -> io::Result<()> {
        Ok(())
    }

    fn render_outcome(&self, mut out: &mut dyn Write, outcome: &TestOutcome) -> io::Result<()> {
        match outcome {
            TestOutcome::Passed => execute!(&mut out, style::PrintStyledContent(".".green())),
            TestOutcome::Failed(_) => execute!(&mut out, style::PrintStyledContent("F".red())),
            TestOutcome::Pending(_) => execute!(&mut out, style::PrintStyledContent("P".yellow())),
            TestOutcome::Panic(_) => execute!(&mut out, style::PrintStyledContent("E".red())),
        }
    }

    fn render_backend_summary(
        &self,
        out: &mut dyn Write,
        outcomes: &BackendOutcomes,
    ) -> io::Result<()> {
        writeln!(out)?;
        for check in outcomes.outcomes.iter() {
            if check.outcome.is_failure() {
                writeln!(out, "  {} ... {}", check.operation, check.outcome)?;
            }
        }
        Ok(())
    }
}

/// One line per check.
pub struct VerboseRenderer {}

impl VerboseRenderer {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for VerboseRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for VerboseRenderer {
    fn render_backend(&self, out: &mut dyn Write, label: &str) -> io::Result<()> {
        writeln!(out, "{}", label)
    }

    fn render_check(&self, out: &mut dyn Write, operation: Operation) -> io::Result<()> {
        write!(out, "  {} ... ", operation)
    }

    fn render_outcome(&self, out: &mut dyn Write, outcome: &TestOutcome) -> io::Result<()> {
        writeln!(out, "{}", outcome)
    }

    fn render_backend_summary(
        &self,
        _out: &mut dyn Write,
        _outcomes: &BackendOutcomes,
    ) -> io::Result<()> {
        Ok(())
    }
}
