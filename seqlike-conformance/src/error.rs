use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),
    #[error("Unknown backend: {0}")]
    UnknownBackend(String),
    #[error("Pending file line {0}: operation listed before any `= backend` line")]
    PendingWithoutBackend(usize),
    #[error("{0} conformance checks did not pass")]
    ConformanceFailures(usize),
    #[error("IO error")]
    IO(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
