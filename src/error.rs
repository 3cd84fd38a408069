//! Client error types.

use thiserror::Error;

/// Errors returned by the HugeGraph client.
#[derive(Error, Debug)]
pub enum AppError {
    // Transport errors
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    Url(String),

    /// Non-2xx response. Fields come from the server's JSON error body.
    #[error("Server error {status}: {message}")]
    Server {
        status: u16,
        exception: Option<String>,
        message: String,
        cause: Option<String>,
    },

    // Local validation errors
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("JSON error: {0}")]
    Serialization(#[from] serde_json::Error),

    // Config errors
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns true when the server answered 404.
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::Server { status: 404, .. })
    }

    /// Returns true for errors raised locally before any request was sent.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, AppError::InvalidArgument(_))
    }
}

/// Fails with [`AppError::InvalidArgument`] unless `condition` holds.
pub(crate) fn check_argument(
    condition: bool,
    message: impl FnOnce() -> String,
) -> Result<(), AppError> {
    if condition {
        Ok(())
    } else {
        Err(AppError::InvalidArgument(message()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_not_found() {
        let err = AppError::Server {
            status: 404,
            exception: Some("class org.apache.hugegraph.exception.NotFoundException".into()),
            message: "Undefined property key with name 'x'".into(),
            cause: None,
        };
        assert!(err.is_not_found());
        assert!(!err.is_invalid_argument());
        assert_eq!(
            err.to_string(),
            "Server error 404: Undefined property key with name 'x'"
        );
    }

    #[test]
    fn test_check_argument() {
        assert!(check_argument(true, || "unused".into()).is_ok());
        let err = check_argument(false, || "alpha out of range".into()).unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(err.to_string(), "Invalid argument: alpha out of range");
    }
}
