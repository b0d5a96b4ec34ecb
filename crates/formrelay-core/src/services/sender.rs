/// Email sender capability
use crate::error::RelayError;
use crate::models::{OutboundEmail, ProviderConfig, SendReceipt};
use crate::services::{ResendEmailSender, SmtpEmailSender};
use async_trait::async_trait;
use std::sync::Arc;

/// Hands one composed email to a delivery provider
///
/// Implementations make a single attempt and never retry.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, email: &OutboundEmail) -> Result<SendReceipt, RelayError>;
}

/// Creates the sender for the configured provider
pub fn build_sender(provider: &ProviderConfig) -> Result<Arc<dyn EmailSender>, RelayError> {
    let sender: Arc<dyn EmailSender> = match provider {
        ProviderConfig::Resend { api_key, api_url } => {
            Arc::new(ResendEmailSender::new(api_key.clone(), api_url.clone())?)
        }
        ProviderConfig::Smtp {
            host,
            port,
            username,
            password,
        } => Arc::new(SmtpEmailSender::new(host, *port, username, password)?),
    };

    tracing::info!(provider = provider.name(), "Email sender initialized");
    Ok(sender)
}
