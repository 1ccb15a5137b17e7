use thiserror::Error;

/// Errors from fallible expression construction.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ExpressionError {
    #[error("constant must be finite, got {0}")]
    NonFiniteConstant(String),
}
