use thiserror::Error;

/// Crate specific Errors implementation.
///
/// Any error means the provided expression was rejected as user input.
#[derive(Debug, Error, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CronError {
    /// Expression (or one of its fields) is malformed, out of bounds or uses unsupported syntax.
    #[error("invalid cron expression: {0}")]
    InvalidExpression(String),
}

impl CronError {
    /// Returns human-readable message without the common prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidExpression(message) => message,
        }
    }
}
