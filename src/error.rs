use std::fmt;
use std::path::PathBuf;

/// Custom error type for Foreman operations
#[derive(Debug)]
pub enum ForemanError {
    /// Network unreachable, refused or reset
    Connection(String),
    /// Request exceeded the fixed timeout
    Timeout(String),
    /// API returned a non-success status code
    HttpStatus { status: u16, context: String },
    /// Any other transport-level failure
    Request(String),
    /// Response body was not the expected JSON shape
    MalformedResponse(String),
    /// Failed to create or write the inventory file
    FileWrite { path: PathBuf, message: String },
    /// Settings file missing, unreadable or incomplete
    Settings(String),
}

impl fmt::Display for ForemanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ForemanError::Connection(msg) => write!(f, "Connection error: {}", msg),
            ForemanError::Timeout(msg) => write!(f, "Timeout error: {}", msg),
            ForemanError::HttpStatus { status, context } => {
                write!(f, "HTTP error (status {}): {}", status, context)
            }
            ForemanError::Request(msg) => write!(f, "Request error: {}", msg),
            ForemanError::MalformedResponse(msg) => {
                write!(f, "Malformed API response: {}", msg)
            }
            ForemanError::FileWrite { path, message } => {
                write!(
                    f,
                    "Error opening the target file: {}, please check ({})",
                    path.display(),
                    message
                )
            }
            ForemanError::Settings(msg) => write!(f, "Settings error: {}", msg),
        }
    }
}

impl std::error::Error for ForemanError {}

impl From<reqwest::Error> for ForemanError {
    /// Classify a transport error: timeouts and connection failures get
    /// their own variants, everything else is a generic request error.
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ForemanError::Timeout(err.to_string())
        } else if err.is_connect() {
            ForemanError::Connection(err.to_string())
        } else {
            ForemanError::Request(err.to_string())
        }
    }
}

/// Result type alias for Foreman operations
pub type Result<T> = std::result::Result<T, ForemanError>;
