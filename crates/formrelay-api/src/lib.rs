/// Formrelay API - Contact form relay Lambda
///
/// This module contains the HTTP surface of the relay: routing, the JSON
/// response envelope and the cross-origin headers sent on every response.
pub mod api;
pub mod context;
pub mod error;
pub mod middleware;

pub use context::ApiContext;
pub use error::ApiError;

use axum::{
    Router,
    body::Body as AxumBody,
    extract::DefaultBodyLimit,
    http::{
        HeaderValue,
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN,
        },
    },
    middleware as axum_middleware,
    response::{IntoResponse, Response as AxumResponse},
    routing::post,
};
use formrelay_core::constants::MAX_REQUEST_BODY_BYTES;
use lambda_http::{Body, Error as LambdaError, Request, Response};
use std::any::Any;
use std::sync::Arc;
use tower::ServiceExt;
use tower_http::{catch_panic::CatchPanicLayer, set_header::SetResponseHeaderLayer};
use tracing::{error, info};

/// Headers the website's client library sends with its requests
pub const ALLOWED_HEADERS: &str = "authorization, x-client-info, apikey, content-type";
pub const ALLOWED_METHODS: &str = "POST, OPTIONS";

/// Build the relay router
///
/// The submission pipeline is mounted on every path, since the path a
/// function URL or gateway forwards is deployment specific.
pub fn router(ctx: Arc<ApiContext>) -> Router {
    let contact = post(api::contact::submit)
        .options(api::contact::preflight)
        .fallback(api::contact::method_not_allowed);

    Router::new()
        .route("/", contact.clone())
        .route("/{*path}", contact)
        .route_layer(axum_middleware::from_fn(middleware::logging_middleware))
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY_BYTES))
        // Turn panics into the JSON error envelope
        .layer(CatchPanicLayer::custom(handle_panic))
        // Cross-origin headers on every response, errors and panics included
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOWED_HEADERS),
        ))
        .with_state(ctx)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> AxumResponse {
    let details = if let Some(msg) = err.downcast_ref::<String>() {
        msg.clone()
    } else if let Some(msg) = err.downcast_ref::<&str>() {
        msg.to_string()
    } else {
        "unknown panic".to_string()
    };

    error!("Request handler panicked: {}", details);
    ApiError::Internal(details).into_response()
}

/// Main API handler - converts Lambda HTTP request to Axum router
pub async fn handler(ctx: Arc<ApiContext>, event: Request) -> Result<Response<Body>, LambdaError> {
    info!("Processing API request: {} {}", event.method(), event.uri().path());

    let app = router(ctx);

    // Convert Lambda HTTP request to Axum request
    let (parts, body) = event.into_parts();
    let body_bytes = body.to_vec();

    let axum_request = http::Request::from_parts(parts, AxumBody::from(body_bytes));

    // Process request with Axum; the router itself never fails
    let response = app
        .oneshot(axum_request)
        .await
        .unwrap_or_else(|never| match never {});
    let (parts, body) = response.into_parts();

    // Convert Axum response body to Lambda response body
    let body_bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .unwrap_or_default();

    Ok(Response::from_parts(parts, Body::from(body_bytes.to_vec())))
}
