use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Settings error: {0}")]
    Settings(String),

    /// The user dismissed a prompt. Aborts the pending action without a notice.
    #[error("Cancelled by user")]
    Cancelled,
}

impl AppError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, AppError::Cancelled)
    }
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
        assert!(app_err.to_string().contains("file not found"));
        assert!(!app_err.is_cancelled());
    }

    #[test]
    fn test_error_display() {
        let err = AppError::Settings("geometry blob has 3 bytes".to_string());
        assert_eq!(err.to_string(), "Settings error: geometry blob has 3 bytes");

        let err = AppError::Cancelled;
        assert_eq!(err.to_string(), "Cancelled by user");
        assert!(err.is_cancelled());
    }
}
