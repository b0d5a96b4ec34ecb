/// API Error types
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use formrelay_core::RelayError;
use serde_json::{Value, json};

/// API Error
///
/// Every variant renders as `{ "error": <summary>, ... }`. Diagnostic detail
/// for operators belongs in logs; only provider detail is echoed back.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Invalid request body: {0}")]
    MalformedBody(String),

    #[error("Request body too large")]
    PayloadTooLarge,

    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Invalid email")]
    InvalidEmail,

    #[error("Server configuration error")]
    Configuration,

    #[error("Failed to send email: {details}")]
    Dispatch { details: String },

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::MissingFields(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidEmail => StatusCode::BAD_REQUEST,
            ApiError::Configuration => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Dispatch { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn body(&self) -> Value {
        match self {
            ApiError::MethodNotAllowed => json!({ "error": "Method not allowed" }),
            ApiError::MalformedBody(details) => json!({
                "error": "Invalid request body",
                "details": details,
            }),
            ApiError::PayloadTooLarge => json!({ "error": "Request body too large" }),
            ApiError::MissingFields(fields) => json!({
                "error": "Missing required fields",
                "fields": fields,
            }),
            ApiError::InvalidEmail => json!({ "error": "Invalid email" }),
            ApiError::Configuration => json!({ "error": "Server configuration error" }),
            ApiError::Dispatch { details } => json!({
                "error": "Failed to send email",
                "details": details,
            }),
            ApiError::Internal(details) => json!({
                "error": "Internal server error",
                "details": details,
            }),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}

/// Convert formrelay-core errors to API errors
impl From<RelayError> for ApiError {
    fn from(err: RelayError) -> Self {
        match err {
            RelayError::Malformed(msg) => ApiError::MalformedBody(msg),
            RelayError::MissingFields(fields) => ApiError::MissingFields(fields),
            RelayError::InvalidEmail => ApiError::InvalidEmail,
            RelayError::Config(msg) => {
                tracing::error!("Relay configuration error: {}", msg);
                ApiError::Configuration
            }
            err @ RelayError::Dispatch { .. } => ApiError::Dispatch {
                details: err.to_string(),
            },
            RelayError::Timeout(_) => ApiError::Dispatch {
                details: "email provider timed out".to_string(),
            },
        }
    }
}
