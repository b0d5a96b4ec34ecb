/// Contact relay service - composes and dispatches one email per submission
use crate::email::compose;
use crate::error::RelayError;
use crate::models::{RelayConfig, SendReceipt, ValidSubmission};
use crate::services::EmailSender;
use crate::utils::logging::safe_submission_context;
use std::sync::Arc;

#[derive(Clone)]
pub struct ContactRelay {
    config: Arc<RelayConfig>,
    sender: Arc<dyn EmailSender>,
}

impl ContactRelay {
    pub fn new(config: RelayConfig, sender: Arc<dyn EmailSender>) -> Self {
        Self {
            config: Arc::new(config),
            sender,
        }
    }

    pub fn config(&self) -> &RelayConfig {
        &self.config
    }

    /// Sends the submission to the configured recipient
    ///
    /// Exactly one send attempt is made, bounded by the configured dispatch
    /// timeout. Error details are scrubbed of the provider credential.
    pub async fn dispatch(&self, submission: &ValidSubmission) -> Result<SendReceipt, RelayError> {
        let email = compose(submission, &self.config);
        let timeout = self.config.dispatch_timeout;

        tracing::info!(
            context = %safe_submission_context(&submission.email, &submission.service, &submission.message),
            provider = self.config.provider.name(),
            "Dispatching contact submission"
        );

        let result = match tokio::time::timeout(timeout, self.sender.send(&email)).await {
            Ok(result) => result,
            Err(_) => {
                tracing::error!(timeout_secs = timeout.as_secs(), "Email dispatch timed out");
                Err(RelayError::Timeout(timeout.as_secs()))
            }
        };

        result.map_err(|err| self.scrub(err))
    }

    fn scrub(&self, err: RelayError) -> RelayError {
        let secret = self.config.provider.secret();
        match err {
            RelayError::Dispatch { status, detail } => RelayError::Dispatch {
                status,
                detail: secret.scrub(&detail),
            },
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{OutboundEmail, ProviderConfig, Secret};
    use crate::services::MockEmailSender;
    use async_trait::async_trait;
    use std::time::Duration;

    fn config(timeout: Duration) -> RelayConfig {
        RelayConfig {
            sender: "Contact Form <noreply@acme.com>".to_string(),
            recipient: "sales@acme.com".to_string(),
            provider: ProviderConfig::Resend {
                api_key: Secret::new("re_secret_key"),
                api_url: "https://api.resend.com/emails".parse().unwrap(),
            },
            dispatch_timeout: timeout,
        }
    }

    fn submission() -> ValidSubmission {
        ValidSubmission {
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            email: "ann@x.com".to_string(),
            phone: None,
            company: None,
            service: "Ocean Freight".to_string(),
            origin: None,
            destination: None,
            cargo_details: None,
            message: "<script>alert(1)</script>".to_string(),
        }
    }

    #[tokio::test]
    async fn test_dispatch_sends_exactly_once() {
        let mut sender = MockEmailSender::new();
        sender
            .expect_send()
            .withf(|email| {
                email.to == "sales@acme.com"
                    && email.reply_to.as_deref() == Some("ann@x.com")
                    && email
                        .html
                        .as_deref()
                        .is_some_and(|html| html.contains("&lt;script&gt;") && !html.contains("<script>"))
            })
            .times(1)
            .returning(|_| Ok(SendReceipt::new("abc123")));

        let relay = ContactRelay::new(config(Duration::from_secs(5)), Arc::new(sender));
        let receipt = relay.dispatch(&submission()).await.unwrap();
        assert_eq!(receipt.id.as_deref(), Some("abc123"));
    }

    #[tokio::test]
    async fn test_dispatch_failure_is_scrubbed() {
        let mut sender = MockEmailSender::new();
        sender.expect_send().times(1).returning(|_| {
            Err(RelayError::Dispatch {
                status: Some(401),
                detail: "API key re_secret_key is invalid".to_string(),
            })
        });

        let relay = ContactRelay::new(config(Duration::from_secs(5)), Arc::new(sender));
        let err = relay.dispatch(&submission()).await.unwrap_err();

        assert!(!err.to_string().contains("re_secret_key"));
        assert!(matches!(err, RelayError::Dispatch { status: Some(401), .. }));
    }

    struct SlowSender;

    #[async_trait]
    impl EmailSender for SlowSender {
        async fn send(&self, _email: &OutboundEmail) -> Result<SendReceipt, RelayError> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok(SendReceipt::default())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_dispatch_timeout() {
        let relay = ContactRelay::new(config(Duration::from_secs(2)), Arc::new(SlowSender));
        let err = relay.dispatch(&submission()).await.unwrap_err();
        assert!(matches!(err, RelayError::Timeout(2)));
    }
}
