//! Error types for the formatter crate

pub type Result<T> = std::result::Result<T, FormatterError>;

#[derive(Debug, thiserror::Error)]
pub enum FormatterError {
    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid template rejected at construction
    #[error("Template error: {message}")]
    Template { message: String },
}

impl FormatterError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        FormatterError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a template error
    pub fn template(message: impl Into<String>) -> Self {
        FormatterError::Template {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FormatterError::template("unclosed value block");
        assert_eq!(err.to_string(), "Template error: unclosed value block");

        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = FormatterError::io_operation("writing log sink", "cannot write", io_err);
        assert!(err.to_string().contains("writing log sink"));
        assert!(err.to_string().contains("cannot write"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: FormatterError = io_err.into();
        assert!(matches!(err, FormatterError::Io(_)));
    }
}
