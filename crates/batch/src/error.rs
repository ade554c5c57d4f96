use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BatchError {
    #[error("max batch size must be positive, got {0}")]
    InvalidBatchSize(usize),

    #[error("{field} length {actual} does not match ids length {expected}")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
}
