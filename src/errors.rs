use std::fmt;

/// Application-specific error types.
#[derive(Debug, Clone)]
pub enum AppError {
    /// Required configuration is missing or blank. Fatal.
    Config(String),
    /// The request never produced a response (connection, TLS, DNS...).
    Http(String),
    /// The server answered with something other than 200.
    UnexpectedStatus {
        /// Numeric HTTP status code.
        status: u16,
        /// Raw response body, if it could be read.
        body: String,
    },
    /// The response body did not match the expected records.
    Parse(String),
}

impl fmt::Display for AppError {
    /// Formats the error for display.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(msg) => write!(f, "Configuration error: {}", msg),
            AppError::Http(msg) => write!(f, "HTTP error: {}", msg),
            AppError::UnexpectedStatus { status, body } => {
                write!(f, "Unexpected status {}: {}", status, body)
            }
            AppError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<reqwest::Error> for AppError {
    /// Converts a `reqwest::Error` into an `AppError`.
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::Parse(err.to_string())
        } else {
            AppError::Http(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Parse(err.to_string())
    }
}
