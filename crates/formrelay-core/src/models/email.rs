/// Outbound email models
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// Email composed from one submission, handed to an [`EmailSender`](crate::services::EmailSender)
#[derive(Debug, Clone, PartialEq, Eq, TypedBuilder)]
pub struct OutboundEmail {
    #[builder(setter(into))]
    pub from: String,
    #[builder(setter(into))]
    pub to: String,
    #[builder(default, setter(strip_option, into))]
    pub reply_to: Option<String>,
    #[builder(setter(into))]
    pub subject: String,
    #[builder(setter(into))]
    pub text: String,
    #[builder(default, setter(strip_option, into))]
    pub html: Option<String>,
}

/// Provider acknowledgement of an accepted email
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendReceipt {
    #[serde(default)]
    pub id: Option<String>,
}

impl SendReceipt {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_optional_fields() {
        let email = OutboundEmail::builder()
            .from("Contact Form <noreply@acme.com>")
            .to("sales@acme.com")
            .subject("Hello")
            .text("Body")
            .build();

        assert!(email.reply_to.is_none());
        assert!(email.html.is_none());
        assert_eq!(email.to, "sales@acme.com");
    }

    #[test]
    fn test_receipt_deserialization() {
        let receipt: SendReceipt = serde_json::from_str(r#"{"id":"abc123"}"#).unwrap();
        assert_eq!(receipt, SendReceipt::new("abc123"));

        let receipt: SendReceipt = serde_json::from_str("{}").unwrap();
        assert!(receipt.id.is_none());
    }
}
