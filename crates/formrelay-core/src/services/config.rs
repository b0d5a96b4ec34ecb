/// Configuration service - loads config from environment variables
use crate::constants::*;
use crate::error::RelayError;
use crate::models::{ProviderConfig, RelayConfig, Secret};
use crate::utils::validation::is_valid_email;
use lettre::message::Mailbox;
use std::time::Duration;
use url::Url;

/// Loads the relay configuration from process environment variables
pub fn load_config_from_env() -> Result<RelayConfig, RelayError> {
    load_config(|name| std::env::var(name).ok())
}

/// Loads the relay configuration through `lookup`
///
/// Blank values count as unset. Errors name the offending variable, never its value.
pub fn load_config<F>(lookup: F) -> Result<RelayConfig, RelayError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |name: &str| {
        lookup(name)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };
    let require = |name: &str| {
        get(name).ok_or_else(|| RelayError::Config(format!("Missing {} env var", name)))
    };

    let provider = match get(ENV_EMAIL_PROVIDER)
        .unwrap_or_else(|| "resend".to_string())
        .to_ascii_lowercase()
        .as_str()
    {
        "resend" => {
            let api_key = Secret::new(require(ENV_RESEND_API_KEY)?);
            let api_url = get(ENV_RESEND_API_URL)
                .unwrap_or_else(|| DEFAULT_RESEND_API_URL.to_string());
            let api_url = Url::parse(&api_url).map_err(|e| {
                RelayError::Config(format!("Invalid {}: {}", ENV_RESEND_API_URL, e))
            })?;
            ProviderConfig::Resend { api_key, api_url }
        }
        "smtp" => {
            let port = match get(ENV_SMTP_PORT) {
                Some(port) => port.parse().map_err(|_| {
                    RelayError::Config(format!("Invalid {}: not a port number", ENV_SMTP_PORT))
                })?,
                None => DEFAULT_SMTP_PORT,
            };
            ProviderConfig::Smtp {
                host: require(ENV_SMTP_HOST)?,
                port,
                username: require(ENV_SMTP_USERNAME)?,
                password: Secret::new(require(ENV_SMTP_PASSWORD)?),
            }
        }
        other => {
            return Err(RelayError::Config(format!(
                "Unsupported {} '{}' (expected resend or smtp)",
                ENV_EMAIL_PROVIDER, other
            )));
        }
    };

    let recipient = require(ENV_RECIPIENT_EMAIL)?;
    if !is_valid_email(&recipient) {
        return Err(RelayError::Config(format!(
            "{} is not a valid email address",
            ENV_RECIPIENT_EMAIL
        )));
    }

    let sender = get(ENV_SENDER_EMAIL).unwrap_or_else(|| DEFAULT_SENDER.to_string());
    sender.parse::<Mailbox>().map_err(|e| {
        RelayError::Config(format!("Invalid {}: {}", ENV_SENDER_EMAIL, e))
    })?;

    let dispatch_timeout = match get(ENV_DISPATCH_TIMEOUT_SECS) {
        Some(secs) => match secs.parse::<u64>() {
            Ok(secs) if secs > 0 => Duration::from_secs(secs),
            _ => {
                return Err(RelayError::Config(format!(
                    "Invalid {}: expected a positive number of seconds",
                    ENV_DISPATCH_TIMEOUT_SECS
                )));
            }
        },
        None => Duration::from_secs(DEFAULT_DISPATCH_TIMEOUT_SECS),
    };

    tracing::info!(
        provider = provider.name(),
        timeout_secs = dispatch_timeout.as_secs(),
        "Configuration validated successfully"
    );

    Ok(RelayConfig {
        sender,
        recipient,
        provider,
        dispatch_timeout,
    })
}
