/// Resend HTTP API email sender
use crate::error::RelayError;
use crate::models::{OutboundEmail, Secret, SendReceipt};
use crate::services::EmailSender;
use async_trait::async_trait;
use serde::Serialize;
use url::Url;

/// Request body accepted by `POST /emails`
#[derive(Debug, Serialize)]
struct ResendRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    html: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<&'a str>,
}

impl<'a> From<&'a OutboundEmail> for ResendRequest<'a> {
    fn from(email: &'a OutboundEmail) -> Self {
        Self {
            from: &email.from,
            to: [email.to.as_str()],
            subject: &email.subject,
            text: &email.text,
            html: email.html.as_deref(),
            reply_to: email.reply_to.as_deref(),
        }
    }
}

pub struct ResendEmailSender {
    client: reqwest::Client,
    api_key: Secret,
    api_url: Url,
}

impl ResendEmailSender {
    pub fn new(api_key: Secret, api_url: Url) -> Result<Self, RelayError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("formrelay/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| RelayError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key,
            api_url,
        })
    }
}

#[async_trait]
impl EmailSender for ResendEmailSender {
    async fn send(&self, email: &OutboundEmail) -> Result<SendReceipt, RelayError> {
        let response = self
            .client
            .post(self.api_url.clone())
            .bearer_auth(self.api_key.expose())
            .json(&ResendRequest::from(email))
            .send()
            .await
            .map_err(|e| RelayError::Dispatch {
                status: None,
                detail: format!("Resend request failed: {}", e),
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| RelayError::Dispatch {
            status: Some(status.as_u16()),
            detail: format!("Failed to read Resend response: {}", e),
        })?;

        if !status.is_success() {
            tracing::error!(status = status.as_u16(), "Resend rejected email");
            return Err(RelayError::Dispatch {
                status: Some(status.as_u16()),
                detail: body,
            });
        }

        // An accepted email without a parsable id is still a success
        let receipt = serde_json::from_str::<SendReceipt>(&body).unwrap_or_else(|e| {
            tracing::warn!("Unexpected Resend response body: {}", e);
            SendReceipt::default()
        });

        tracing::info!(email_id = ?receipt.id, "Sent email via Resend");
        Ok(receipt)
    }
}
