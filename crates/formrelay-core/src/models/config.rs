/// Configuration models
use std::fmt;
use std::time::Duration;
use url::Url;

/// Relay configuration, resolved once per cold start
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Fixed sender identity, e.g. `Contact Form <noreply@example.com>`
    pub sender: String,
    /// Mailbox that receives every submission
    pub recipient: String,
    pub provider: ProviderConfig,
    pub dispatch_timeout: Duration,
}

#[derive(Debug, Clone)]
pub enum ProviderConfig {
    Resend {
        api_key: Secret,
        api_url: Url,
    },
    Smtp {
        host: String,
        port: u16,
        username: String,
        password: Secret,
    },
}

impl ProviderConfig {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Resend { .. } => "resend",
            Self::Smtp { .. } => "smtp",
        }
    }

    /// The credential that must never appear in responses or logs
    pub fn secret(&self) -> &Secret {
        match self {
            Self::Resend { api_key, .. } => api_key,
            Self::Smtp { password, .. } => password,
        }
    }
}

/// Credential string whose `Debug` and `Display` never reveal the value
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Replaces every occurrence of the secret in `text`
    pub fn scrub(&self, text: &str) -> String {
        if self.0.is_empty() {
            text.to_string()
        } else {
            text.replace(&self.0, "[REDACTED]")
        }
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret([REDACTED])")
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}
