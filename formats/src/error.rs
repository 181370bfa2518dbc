use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("Missing column {0}")]
    MissingColumn(String),
    #[error("Bad value {value:?} for {column} at line {line}")]
    BadValue {
        column: String,
        line: u64,
        value: String,
    },
    #[error("Unknown alert level {0}")]
    UnknownAlertLevel(i64),
    #[error("Can not open {0:?}: {1}")]
    Open(PathBuf, std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
