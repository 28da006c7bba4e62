//! Error types for prefix network classification

use thiserror::Error;

/// Result type for classifier operations
pub type Result<T> = std::result::Result<T, PrefixError>;

/// Errors that can occur while building a prefix network
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrefixError {
    /// Operand width is not a positive integer
    #[error("Invalid operand width '{0}': expected a positive integer")]
    InvalidInput(String),

    /// Overlap policy name not recognised
    #[error("Unknown overlap policy '{0}': expected 'all' or 'priority'")]
    UnknownPolicy(String),
}
