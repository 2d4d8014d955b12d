use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use ahash::{HashMap, HashMapExt, HashSet};
use seqlike::Operation;

use crate::error::{Error, Result};
use crate::outcome::SuiteOutcomes;
use crate::suite::Suite;

/// Decides which checks a run includes at all.
///
/// Excluded checks are not run and only counted as filtered.
pub trait CheckFilter {
    fn is_included(&self, backend: &str, operation: Operation) -> bool;
}

pub struct IncludeAllFilter {}

impl IncludeAllFilter {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for IncludeAllFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckFilter for IncludeAllFilter {
    fn is_included(&self, _backend: &str, _operation: Operation) -> bool {
        true
    }
}

pub struct NameFilter {
    name_filter: Option<String>,
}

impl NameFilter {
    pub fn new(name_filter: Option<String>) -> Self {
        Self { name_filter }
    }
}

impl CheckFilter for NameFilter {
    fn is_included(&self, _backend: &str, operation: Operation) -> bool {
        if let Some(name_filter) = &self.name_filter {
            operation.name().contains(name_filter.as_str())
        } else {
            true
        }
    }
}

/// Operations marked pending per backend, as kept in a pending file.
///
/// The format is
///
/// ```text
/// = Chunk
/// prepend-all
/// concat # with a comment
/// ```
#[derive(Debug, Default, PartialEq)]
pub struct PendingFile {
    names: HashMap<String, HashSet<Operation>>,
    comments: HashMap<String, HashMap<Operation, String>>,
}

impl PendingFile {
    pub fn new() -> Self {
        Self {
            names: HashMap::new(),
            comments: HashMap::new(),
        }
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        if path.exists() {
            let data = fs::read_to_string(path)?;
            data.parse()
        } else {
            // no pending file means nothing is pending
            Ok(Self::new())
        }
    }

    /// Everything that did not pass in `outcomes` becomes pending.
    pub fn from_outcomes(outcomes: &SuiteOutcomes) -> Self {
        let mut pending = Self::new();
        for backend_outcomes in outcomes.outcomes.iter() {
            let not_passing = backend_outcomes.not_passing();
            if not_passing.is_empty() {
                continue;
            }
            pending.names.insert(
                backend_outcomes.backend.clone(),
                not_passing.into_iter().collect(),
            );
        }
        pending
    }

    pub fn is_pending(&self, backend: &str, operation: Operation) -> bool {
        self.names
            .get(backend)
            .is_some_and(|operations| operations.contains(&operation))
    }

    pub fn comment(&self, backend: &str, operation: Operation) -> Option<&str> {
        self.comments
            .get(backend)
            .and_then(|comments| comments.get(&operation))
            .map(|comment| comment.as_str())
    }

    /// Mark every listed operation pending on the suite's backends.
    ///
    /// A backend label the suite does not know is an error, so that a typo
    /// in the file cannot silently drop a mark.
    pub fn apply(&self, suite: &mut Suite) -> Result<()> {
        for (backend, operations) in self.names.iter() {
            let conformance = suite
                .backend_mut(backend)
                .ok_or_else(|| Error::UnknownBackend(backend.clone()))?;
            for operation in operations {
                let comment = self.comment(backend, *operation).map(str::to_string);
                conformance.mark_pending(*operation, comment);
            }
        }
        Ok(())
    }
}

impl FromStr for PendingFile {
    type Err = Error;

    fn from_str(source: &str) -> Result<Self> {
        let mut pending = Self::new();
        let mut backend: Option<String> = None;
        for (index, line) in source.lines().enumerate() {
            let line = line.trim();
            if let Some(name) = line.strip_prefix('=') {
                let name = name.trim().to_string();
                pending.names.entry(name.clone()).or_default();
                backend = Some(name);
            } else if !line.is_empty() {
                let backend = backend
                    .as_ref()
                    .ok_or(Error::PendingWithoutBackend(index + 1))?;
                let (name, comment) = match line.split_once('#') {
                    Some((name, comment)) => (name.trim(), Some(comment.trim())),
                    None => (line, None),
                };
                let operation: Operation = name
                    .parse()
                    .map_err(|_| Error::UnknownOperation(name.to_string()))?;
                pending
                    .names
                    .entry(backend.clone())
                    .or_default()
                    .insert(operation);
                if let Some(comment) = comment.filter(|comment| !comment.is_empty()) {
                    pending
                        .comments
                        .entry(backend.clone())
                        .or_default()
                        .insert(operation, comment.to_string());
                }
            }
        }
        Ok(pending)
    }
}

impl fmt::Display for PendingFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut backends = self.names.keys().collect::<Vec<_>>();
        backends.sort();
        for backend in backends {
            writeln!(f, "= {}", backend)?;
            let mut operations = self.names[backend].iter().collect::<Vec<_>>();
            operations.sort();
            for operation in operations {
                match self.comment(backend, *operation) {
                    Some(comment) => writeln!(f, "{} # {}", operation, comment)?,
                    None => writeln!(f, "{}", operation)?,
                }
            }
        }
        Ok(())
    }
}
