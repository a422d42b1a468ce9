use thiserror::Error;

/// Library errors.
///
/// Only a wrong `Value` variant is an error; every in-domain invalid input
/// (out-of-range position, negative count, unknown year) returns a sentinel
/// value from the operation itself.
#[derive(Debug, Clone, Error)]
pub enum WenError {
    #[error("Type error: {0}")]
    Type(String),
}

pub type Result<T> = std::result::Result<T, WenError>;
