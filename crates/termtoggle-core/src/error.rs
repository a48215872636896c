//! Error types for termtoggle.

use thiserror::Error;

/// Main error type for termtoggle operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Session number must be a positive integer
    #[error("Invalid session number: {0}")]
    InvalidSessionNumber(u32),

    /// Command string was empty or blank
    #[error("Command must be a non-empty string")]
    EmptyCommand,

    /// Close requested for a session with no live window
    #[error("No open window for terminal session {0}")]
    WindowNotOpen(u32),

    /// Buffer name does not follow the session naming convention
    #[error("Buffer name does not encode a session number: {0:?}")]
    NameFormat(String),

    /// Window manager capability failed
    #[error("Window manager error: {0}")]
    WindowManager(String),

    /// Shell process spawn failed
    #[error("Spawn error: {0}")]
    Spawn(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_session_number_error() {
        let err = Error::InvalidSessionNumber(0);
        assert_eq!(err.to_string(), "Invalid session number: 0");
    }

    #[test]
    fn test_empty_command_error() {
        let err = Error::EmptyCommand;
        assert_eq!(err.to_string(), "Command must be a non-empty string");
    }

    #[test]
    fn test_window_not_open_error() {
        let err = Error::WindowNotOpen(99);
        assert_eq!(err.to_string(), "No open window for terminal session 99");
    }

    #[test]
    fn test_name_format_error() {
        let err = Error::NameFormat("scratch".to_string());
        assert!(err.to_string().contains("scratch"));
    }

    #[test]
    fn test_window_manager_error() {
        let err = Error::WindowManager("split failed".to_string());
        assert_eq!(err.to_string(), "Window manager error: split failed");
    }

    #[test]
    fn test_spawn_error() {
        let err = Error::Spawn("shell not found".to_string());
        assert_eq!(err.to_string(), "Spawn error: shell not found");
    }

    #[test]
    fn test_config_error() {
        let err = Error::Config("terminal.size must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: terminal.size must be > 0"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_serialization_error_conversion() {
        let json_err = serde_json::from_str::<i32>("invalid json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Serialization(_)));
    }

    #[test]
    fn test_result_type() {
        let success: Result<i32> = Ok(42);
        assert!(success.is_ok());

        let failure: Result<i32> = Err(Error::EmptyCommand);
        assert!(failure.is_err());
    }
}
