use clap::{Parser, Subcommand};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::filter::{CheckFilter, IncludeAllFilter, NameFilter, PendingFile};
use crate::outcome::{Outcomes, SuiteOutcomes};
use crate::runcontext::RunContext;
use crate::suite::Suite;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose mode
    #[clap(short, long)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a pending file.
    ///
    /// Runs every check on every backend, ignoring pending marks, and writes
    /// each check that does not pass to the pending file.
    Initialize {
        /// The pending file to write
        path: PathBuf,
    },
    /// Check with pending marks engaged.
    ///
    /// Checks marked pending in code or in the pending file are skipped and
    /// reported as pending. Any failing check makes the command fail.
    Check {
        /// A pending file to apply on top of the marks in code
        #[clap(long)]
        pending: Option<PathBuf>,
    },
    /// Run all checks.
    ///
    /// Pending marks are ignored, so every check runs.
    All {
        /// Name filter, only operations whose name contains this are run.
        name_filter: Option<String>,
    },
}

pub fn cli() -> Result<()> {
    let cli = Cli::parse();
    let mut suite = Suite::with_default_backends();

    match cli.command {
        Commands::Initialize { path } => initialize(&suite, &path, cli.verbose),
        Commands::Check { pending } => {
            if let Some(path) = pending {
                PendingFile::load_from_file(&path)?.apply(&mut suite)?;
            }
            let run_context = RunContext::new(cli.verbose, true);
            let outcomes = run(&suite, &run_context, &IncludeAllFilter::new())?;
            fail_on_failures(&outcomes)
        }
        Commands::All { name_filter } => {
            let run_context = RunContext::new(cli.verbose, false);
            let outcomes = run(&suite, &run_context, &NameFilter::new(name_filter))?;
            fail_on_failures(&outcomes)
        }
    }
}

fn run(suite: &Suite, run_context: &RunContext, filter: &dyn CheckFilter) -> Result<SuiteOutcomes> {
    let mut out = io::stdout();
    let renderer = run_context.renderer();
    let outcomes = suite.run(run_context, filter, &mut out, renderer.as_ref())?;
    println!("{}", outcomes.display());
    Ok(outcomes)
}

fn initialize(suite: &Suite, path: &Path, verbose: bool) -> Result<()> {
    let run_context = RunContext::new(verbose, false);
    let outcomes = run(suite, &run_context, &IncludeAllFilter::new())?;
    if !write_new_pending_file(path, &PendingFile::from_outcomes(&outcomes))? {
        println!("Pending file {} already exists", path.display());
    }
    Ok(())
}

/// Write `pending` to `path` unless a file is already there.
///
/// Returns whether the file was written.
fn write_new_pending_file(path: &Path, pending: &PendingFile) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    fs::write(path, pending.to_string())?;
    Ok(true)
}

fn fail_on_failures(outcomes: &SuiteOutcomes) -> Result<()> {
    let failures = outcomes.failed() + outcomes.panicked();
    if failures > 0 {
        Err(Error::ConformanceFailures(failures))
    } else {
        Ok(())
    }
}
