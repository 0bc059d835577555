//! Application error types with rich context

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    #[error("Failed to initialize terminal: {0}")]
    TerminalInit(String),

    // ─────────────────────────────────────────────────────────────
    // Launch Source Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Launch API returned HTTP status {status}")]
    Http { status: u16 },

    #[error("Launch API request failed: {message}")]
    Transport { message: String },

    #[error("Invalid launch endpoint: {message}")]
    Endpoint { message: String },

    #[error("Launch record {index} failed validation: {message}")]
    Validation { index: usize, message: String },

    #[error("Duplicate flight number in response: {flight_number}")]
    DuplicateFlight { flight_number: u32 },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn endpoint(message: impl Into<String>) -> Self {
        Self::Endpoint {
            message: message.into(),
        }
    }

    pub fn validation(index: usize, message: impl Into<String>) -> Self {
        Self::Validation {
            index,
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::Http { status: 503 };
        assert_eq!(err.to_string(), "Launch API returned HTTP status 503");

        let err = Error::validation(2, "missing field `mission_name`");
        assert!(err.to_string().contains("record 2"));
        assert!(err.to_string().contains("mission_name"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<Vec<u32>>("not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_config_error_display() {
        let err = Error::config("invalid type: string \"three\", expected u16");
        assert!(err.to_string().starts_with("Configuration error:"));
        assert!(err.to_string().contains("expected u16"));
    }
}
