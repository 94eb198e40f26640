use std::path::PathBuf;

use thiserror::Error;

/// Every failure the library can report.
///
/// The numeric core only ever produces `LabelOutOfRange`; everything else
/// comes from loading, validating or configuring a run.
#[derive(Debug, Error)]
pub enum NetError {
    #[error("label {label} is out of range for {classes} classes")]
    LabelOutOfRange { label: usize, classes: usize },

    #[error("sample {index}: expected {expected} features, got {actual}")]
    DimensionMismatch {
        index: usize,
        expected: usize,
        actual: usize,
    },

    #[error("{}:{line}: sample {index} has {actual} features, expected {expected}", path.display())]
    RowLength {
        path: PathBuf,
        line: usize,
        index: usize,
        expected: usize,
        actual: usize,
    },

    #[error("data source not found: {}", path.display())]
    SourceNotFound { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}:{line}: {message}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("{}: requested {requested} samples but only {found} are present", path.display())]
    Truncated {
        path: PathBuf,
        requested: usize,
        found: usize,
    },

    #[error("{role} set is empty")]
    EmptyDataset { role: &'static str },

    #[error("{features} feature vectors but {labels} labels")]
    LengthMismatch { features: usize, labels: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("malformed configuration file: {0}")]
    ConfigFormat(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NetError>;
