use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FlowError {
    #[error("invalid input: {0}")]
    /// The container width, spacing, or an item size is out of range. Raised
    /// before any layout work is done.
    InvalidInput(String),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, FlowError>;
