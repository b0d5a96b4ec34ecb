//! Common test utilities and helpers for integration tests
#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use formrelay_core::RelayError;
use formrelay_core::models::{OutboundEmail, ProviderConfig, RelayConfig, Secret, SendReceipt};
use formrelay_core::services::EmailSender;
use http_body_util::BodyExt;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const TEST_API_KEY: &str = "re_test_secret_key";

/// What the stub sender answers with
#[derive(Clone)]
pub enum StubOutcome {
    Accept(Option<String>),
    Reject(String),
    Panic,
}

/// Email sender that records every call instead of delivering
#[derive(Clone)]
pub struct StubSender {
    outcome: StubOutcome,
    pub sent: Arc<Mutex<Vec<OutboundEmail>>>,
}

impl StubSender {
    pub fn new(outcome: StubOutcome) -> Self {
        Self {
            outcome,
            sent: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn accepting(id: &str) -> Self {
        Self::new(StubOutcome::Accept(Some(id.to_string())))
    }

    pub fn calls(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    pub fn last_email(&self) -> Option<OutboundEmail> {
        self.sent.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl EmailSender for StubSender {
    async fn send(&self, email: &OutboundEmail) -> Result<SendReceipt, RelayError> {
        self.sent.lock().unwrap().push(email.clone());
        match &self.outcome {
            StubOutcome::Accept(id) => Ok(SendReceipt { id: id.clone() }),
            StubOutcome::Reject(detail) => Err(RelayError::Dispatch {
                status: Some(403),
                detail: detail.clone(),
            }),
            StubOutcome::Panic => panic!("stub sender exploded"),
        }
    }
}

pub fn test_config() -> RelayConfig {
    RelayConfig {
        sender: "Contact Form <noreply@acme.com>".to_string(),
        recipient: "sales@acme.com".to_string(),
        provider: ProviderConfig::Resend {
            api_key: Secret::new(TEST_API_KEY),
            api_url: "https://api.resend.com/emails".parse().unwrap(),
        },
        dispatch_timeout: Duration::from_secs(5),
    }
}

/// The minimal valid submission used throughout the tests
pub fn valid_submission() -> serde_json::Value {
    serde_json::json!({
        "firstName": "Ann",
        "lastName": "Lee",
        "email": "ann@x.com",
        "service": "Ocean Freight",
        "message": "Hi"
    })
}

pub fn post_json(path: &str, body: &serde_json::Value) -> Request<Body> {
    post_raw(path, body.to_string())
}

pub fn post_raw(path: &str, body: impl Into<String>) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(path)
        .header("content-type", "application/json")
        .body(Body::from(body.into()))
        .unwrap()
}

pub fn request(method: Method, path: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(path)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_str(&body_text(response).await).unwrap()
}

/// Asserts the cross-origin headers every response must carry
pub fn assert_cors_headers<B>(response: &Response<B>) {
    let headers = response.headers();
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert_eq!(headers["access-control-allow-methods"], "POST, OPTIONS");
    assert_eq!(
        headers["access-control-allow-headers"],
        "authorization, x-client-info, apikey, content-type"
    );
}
