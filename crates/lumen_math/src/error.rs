use thiserror::Error;

/// Errors raised by checked vector operations.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum MathError {
    #[error("Cannot normalize a zero-length or non-finite vector")]
    DegenerateVector,
}

/// Result type for checked math operations.
pub type MathResult<T> = Result<T, MathError>;
