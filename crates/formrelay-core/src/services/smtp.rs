/// SMTP relay email sender using lettre
use crate::error::RelayError;
use crate::models::{OutboundEmail, Secret, SendReceipt};
use crate::services::EmailSender;
use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::{Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

pub struct SmtpEmailSender {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpEmailSender {
    /// Creates a STARTTLS transport; no connection is made until the first send
    pub fn new(
        host: &str,
        port: u16,
        username: &str,
        password: &Secret,
    ) -> Result<Self, RelayError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)
            .map_err(|e| RelayError::Config(format!("Invalid SMTP relay {}: {}", host, e)))?
            .port(port)
            .credentials(Credentials::new(
                username.to_string(),
                password.expose().to_string(),
            ))
            .build();

        Ok(Self { transport })
    }

    fn to_mailbox(address: &str) -> Result<Mailbox, RelayError> {
        address.parse().map_err(|e| RelayError::Dispatch {
            status: None,
            detail: format!("Invalid email address: {}", e),
        })
    }

    /// Builds the MIME message: multipart/alternative when an HTML body exists
    pub fn build_message(email: &OutboundEmail) -> Result<Message, RelayError> {
        let mut builder = Message::builder()
            .from(Self::to_mailbox(&email.from)?)
            .to(Self::to_mailbox(&email.to)?)
            .subject(&email.subject);

        if let Some(reply_to) = &email.reply_to {
            match reply_to.parse::<Mailbox>() {
                Ok(mailbox) => builder = builder.reply_to(mailbox),
                Err(e) => tracing::warn!("Dropping unparseable reply-to address: {}", e),
            }
        }

        let message = match &email.html {
            Some(html) => builder.multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_PLAIN)
                            .body(email.text.clone()),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_HTML)
                            .body(html.clone()),
                    ),
            ),
            None => builder
                .header(ContentType::TEXT_PLAIN)
                .body(email.text.clone()),
        };

        message.map_err(|e| RelayError::Dispatch {
            status: None,
            detail: format!("Failed to build email: {}", e),
        })
    }
}

#[async_trait]
impl EmailSender for SmtpEmailSender {
    async fn send(&self, email: &OutboundEmail) -> Result<SendReceipt, RelayError> {
        let message = Self::build_message(email)?;

        let response = self
            .transport
            .send(message)
            .await
            .map_err(|e| RelayError::Dispatch {
                status: None,
                detail: format!("SMTP send failed: {}", e),
            })?;

        let reply = response.message().collect::<Vec<_>>().join(" ");
        tracing::info!(code = %response.code(), "Sent email via SMTP");

        Ok(if reply.is_empty() {
            SendReceipt::default()
        } else {
            SendReceipt::new(reply)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email() -> OutboundEmail {
        OutboundEmail::builder()
            .from("Contact Form <noreply@acme.com>")
            .to("sales@acme.com")
            .reply_to("ann@x.com")
            .subject("New Contact Form Submission from Ann Lee")
            .text("Hi")
            .html("<p>Hi</p>")
            .build()
    }

    #[test]
    fn test_build_multipart_message() {
        let message = SmtpEmailSender::build_message(&email()).unwrap();
        let raw = String::from_utf8_lossy(&message.formatted()).to_string();

        assert!(raw.contains("Reply-To: ann@x.com"));
        assert!(raw.contains("To: sales@acme.com"));
        assert!(raw.contains("multipart/alternative"));
        assert!(raw.contains("text/html"));
    }

    #[test]
    fn test_build_text_only_message() {
        let mut email = email();
        email.html = None;
        email.reply_to = None;

        let message = SmtpEmailSender::build_message(&email).unwrap();
        let raw = String::from_utf8_lossy(&message.formatted()).to_string();

        assert!(!raw.contains("Reply-To:"));
        assert!(!raw.contains("multipart/alternative"));
        assert!(raw.contains("text/plain"));
    }

    #[test]
    fn test_build_skips_unparseable_reply_to() {
        let mut email = email();
        email.reply_to = Some("a(b@x.com".to_string());

        let message = SmtpEmailSender::build_message(&email).unwrap();
        let raw = String::from_utf8_lossy(&message.formatted()).to_string();

        assert!(!raw.contains("Reply-To:"));
        assert!(raw.contains("To: sales@acme.com"));
    }

    #[test]
    fn test_build_rejects_bad_address() {
        let mut email = email();
        email.to = "not an address".to_string();

        assert!(matches!(
            SmtpEmailSender::build_message(&email),
            Err(RelayError::Dispatch { .. })
        ));
    }
}
