/// Contact form submission endpoint
use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    http::{StatusCode, header},
    response::IntoResponse,
};
use formrelay_core::models::ContactSubmission;
use formrelay_core::utils::logging::redact_email;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

use crate::{context::ApiContext, error::ApiError};

#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub success: bool,
    pub message: String,
    #[serde(rename = "emailId", skip_serializing_if = "Option::is_none")]
    pub email_id: Option<String>,
}

/// Relay a contact form submission to the configured mailbox
///
/// The body is taken as raw bytes so that parse failures use the same error
/// envelope as every other failure.
pub async fn submit(
    State(ctx): State<Arc<ApiContext>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<SubmitResponse>, ApiError> {
    let body = body.map_err(|rejection| {
        warn!("Rejecting unreadable body: {}", rejection);
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge
        } else {
            ApiError::MalformedBody(rejection.body_text())
        }
    })?;

    let submission = ContactSubmission::from_json(&body).inspect_err(|e| {
        warn!("Rejecting malformed submission: {}", e);
    })?;

    let submission = submission.validate().inspect_err(|e| {
        warn!("Rejecting invalid submission: {}", e);
    })?;

    let relay = ctx.relay()?;

    let receipt = relay.dispatch(&submission).await.inspect_err(|e| {
        warn!("Contact submission was not delivered: {}", e);
    })?;

    info!(
        reply_to = %redact_email(&submission.email),
        email_id = ?receipt.id,
        "Contact submission relayed"
    );

    Ok(Json(SubmitResponse {
        success: true,
        message: "Email sent successfully".to_string(),
        email_id: receipt.id,
    }))
}

/// Answer a CORS pre-flight request; the permission headers are added by the router
pub async fn preflight() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        "ok",
    )
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
