use std::io;
use thiserror::Error;

/// Crate-wide error type.
///
/// The classifier itself is total and never produces one of these; they come
/// from the edges (settings, the news screener, CLI input and output).
#[derive(Debug, Error)]
pub enum AppError {
    /// Input that a caller-facing operation refuses to process (e.g. blank text).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Malformed or out-of-range settings read from the environment.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Standard input/output errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Serialization failures when rendering reports.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        match self {
            AppError::Validation(s) => AppError::Validation(s.clone()),
            AppError::Config(s) => AppError::Config(s.clone()),
            AppError::Io(e) => AppError::Io(io::Error::new(e.kind(), e.to_string())),
            AppError::Json(e) => {
                AppError::Json(<serde_json::Error as serde::de::Error>::custom(e.to_string()))
            }
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(format!("Validation errors: {}", err))
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = AppError::Validation("text is empty".to_string());
        assert_eq!(err.to_string(), "Validation error: text is empty");

        let err = AppError::Config("KRIVYA_SEED".to_string());
        assert_eq!(err.to_string(), "Configuration error: KRIVYA_SEED");
    }

    #[test]
    fn test_io_conversion_and_clone() {
        let err: AppError = io::Error::new(io::ErrorKind::NotFound, "stdin closed").into();
        let cloned = err.clone();
        match cloned {
            AppError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::NotFound),
            other => panic!("unexpected variant: {other:?}"),
        }
    }
}
