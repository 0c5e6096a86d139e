//! Error types for cliff-context.

use thiserror::Error;

/// Main error type for cliff-context operations.
#[derive(Error, Debug)]
pub enum ContextError {
    // Input errors
    #[error("{0}")]
    Decode(#[from] serde_json::Error),

    #[error("failed to read standard input: {0}")]
    Read(std::io::Error),

    // Release context shape errors
    #[error("'commits' must be a list, found {found}")]
    InvalidCommits { found: &'static str },

    #[error("commit at index {index} must be an object, found {found}")]
    InvalidCommit { index: usize, found: &'static str },

    // Output errors
    #[error("failed to serialize JSON: {0}")]
    Serialize(serde_json::Error),

    #[error("failed to write standard output: {0}")]
    Write(std::io::Error),

    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] log::SetLoggerError),

    // Generic wrapper for other errors
    #[error(transparent)]
    Other(#[from] color_eyre::Report),
}

/// Result type alias using ContextError
pub type Result<T> = std::result::Result<T, ContextError>;

impl ContextError {
    /// Create an invalid commits error for the given value
    pub fn invalid_commits(value: &serde_json::Value) -> Self {
        Self::InvalidCommits {
            found: kind_of(value),
        }
    }

    /// Create an invalid commit error for the entry at `index`
    pub fn invalid_commit(index: usize, value: &serde_json::Value) -> Self {
        Self::InvalidCommit {
            index,
            found: kind_of(value),
        }
    }

    /// Whether this error means standard input did not hold valid JSON.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }

    /// The single line reported on standard error before exiting.
    pub fn report_line(&self) -> String {
        if self.is_decode() {
            format!("Error decoding JSON: {self}")
        } else {
            format!("An error occurred: {self}")
        }
    }
}

/// Human readable name of a JSON value's type.
pub fn kind_of(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "list",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_decode_report_line() {
        let err: ContextError = serde_json::from_str::<serde_json::Value>(
            r#"{"commits":"#,
        )
        .unwrap_err()
        .into();

        assert!(err.is_decode());
        assert!(err.report_line().starts_with("Error decoding JSON: "));
    }

    #[test]
    fn test_generic_report_line() {
        let err = ContextError::invalid_commit(2, &json!(null));
        assert!(!err.is_decode());
        assert_eq!(
            err.report_line(),
            "An error occurred: commit at index 2 must be an object, found null"
        );

        let err = ContextError::invalid_commits(&json!("abc"));
        assert_eq!(
            err.report_line(),
            "An error occurred: 'commits' must be a list, found string"
        );
    }

    #[test]
    fn test_report_lines_are_single_line() {
        let err = ContextError::Write(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "pipe closed",
        ));
        let line = err.report_line();
        assert!(line.starts_with("An error occurred: "));
        assert!(!line.contains('\n'));
    }
}
