//! Error types for snskit core.

/// Core error type for identifiers and configuration.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Invalid AWS account ID format.
    #[error("invalid AWS account ID: {0} (must be 12-digit numeric string)")]
    InvalidAccountId(String),

    /// A string that does not parse as an SNS ARN.
    #[error("invalid SNS ARN {arn:?}: {reason}")]
    InvalidArn {
        /// The rejected input.
        arn: String,
        /// What was wrong with it.
        reason: &'static str,
    },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Convenience result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
