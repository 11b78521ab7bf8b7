//! Error types for the surveillance pipeline.
//!
//! Only unrecoverable failures surface here: an input source that cannot be
//! opened or read, or an invalid configuration. Malformed input lines are a
//! recoverable, per-line condition handled by the parser's
//! [`RejectReason`](crate::parser::RejectReason) and never abort a pass.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MonitorError>;

/// Fatal errors for a surveillance pass.
#[derive(Debug, Error)]
pub enum MonitorError {
    /// The input source could not be opened or read. The whole pass fails;
    /// there is no retry.
    #[error("input source failure: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration rejected by validation.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Configuration file could not be serialized or deserialized.
    #[error("config serialization failure: {0}")]
    ConfigFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: MonitorError = io.into();
        assert!(matches!(err, MonitorError::Io(_)));
        assert!(err.to_string().contains("input source failure"));
    }

    #[test]
    fn test_config_error_display() {
        let err = MonitorError::Config("window_ms must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "invalid configuration: window_ms must be > 0"
        );
    }
}
