use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("Unrecognized workout type code: {0}")]
    UnknownCode(String),
}

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("{kind} expects {expected} sensor values, got {got}")]
    WrongArity {
        kind: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("{field} must be a non-negative integer, got {value}")]
    InvalidCount { field: &'static str, value: f64 },
}

#[derive(Debug, thiserror::Error)]
pub enum ComputeError {
    #[error("Duration is zero, mean speed is undefined")]
    ZeroDuration,
    #[error("Height is zero, calorie expenditure is undefined")]
    ZeroHeight,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
    #[error(transparent)]
    Build(#[from] BuildError),
    #[error(transparent)]
    Compute(#[from] ComputeError),
    #[error("Failed to read {path}: {source}")]
    ReadingsFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid readings file {path}: {source}")]
    ReadingsFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
