use thiserror::Error;

#[derive(Debug, Error)]
pub enum Status {
    #[error("Bad file version {0}, expected {1}")]
    BadFileVersion(usize, usize),
    #[error("Can not get a test case name from {0}")]
    BadCaseName(String),
    #[error("All {0} files failed")]
    AllFailed(usize),
    #[error("{0}: no parent directory")]
    NoParent(String),
}
