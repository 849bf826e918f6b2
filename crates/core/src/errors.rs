use std::path::PathBuf;

/// Result type alias for commonkit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for commonkit operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File system operations
    #[error("file system {operation} operation failed for '{}': {source}", path.display())]
    FileSystem {
        path: PathBuf,
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Gzip stream errors
    #[error("gzip {operation} failed: {source}")]
    Compression {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// A null element in a value sequence
    #[error("value at index {index} is null")]
    NullValue { index: usize },

    /// Reading a time span before it was fully measured
    #[error("time span error: {message}")]
    Timing { message: String },
}

// Conversion implementations
impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::Json {
            message: error.to_string(),
            source: error,
        }
    }
}

// Helper methods for creating errors with context
impl Error {
    /// Create a file system error with the path and failed operation
    #[must_use]
    pub fn file_system(
        path: impl Into<PathBuf>,
        operation: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        Error::FileSystem {
            path: path.into(),
            operation: operation.into(),
            source,
        }
    }

    /// Create a compression error for the given stream operation
    #[must_use]
    pub fn compression(operation: impl Into<String>, source: std::io::Error) -> Self {
        Error::Compression {
            operation: operation.into(),
            source,
        }
    }

    /// Create a null-value error reporting the offending index
    #[must_use]
    pub fn null_value(index: usize) -> Self {
        Error::NullValue { index }
    }

    /// Create a timing error
    #[must_use]
    pub fn timing(message: impl Into<String>) -> Self {
        Error::Timing {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_system_error_display() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory");
        let error = Error::file_system("/tmp/missing", "read directory", source);
        assert_eq!(
            error.to_string(),
            "file system read directory operation failed for '/tmp/missing': no such directory"
        );
    }

    #[test]
    fn test_null_value_error_reports_index() {
        let error = Error::null_value(3);
        assert_eq!(error.to_string(), "value at index 3 is null");
    }

    #[test]
    fn test_json_error_carries_source() {
        let parse_error = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let error = Error::from(parse_error);
        assert!(matches!(error, Error::Json { .. }));
        assert!(std::error::Error::source(&error).is_some());
    }
}
