/// Error types for the formrelay system
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Malformed request body: {0}")]
    Malformed(String),

    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Email dispatch failed{}: {detail}", .status.map(|s| format!(" (status {s})")).unwrap_or_default())]
    Dispatch { status: Option<u16>, detail: String },

    #[error("Email provider did not respond within {0} seconds")]
    Timeout(u64),
}

impl RelayError {
    /// Determines if the error was caused by the submitted data rather than the server
    pub fn is_client_error(&self) -> bool {
        match self {
            Self::Malformed(_) => true,
            Self::MissingFields(_) => true,
            Self::InvalidEmail => true,
            Self::Config(_) => false,
            Self::Dispatch { .. } => false,
            Self::Timeout(_) => false,
        }
    }
}

impl From<serde_json::Error> for RelayError {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed(err.to_string())
    }
}
