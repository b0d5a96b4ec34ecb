/// API Context - shared state for all API handlers
use crate::error::ApiError;
use formrelay_core::RelayError;
use formrelay_core::models::RelayConfig;
use formrelay_core::services::{ContactRelay, EmailSender, build_sender, load_config_from_env};
use std::sync::Arc;
use tracing::{error, info};

/// API Context holds the relay, if the function was configured correctly
///
/// A configuration problem does not stop the Lambda from starting: the
/// context is created without a relay and each valid submission is answered
/// with a server configuration error instead.
#[derive(Clone)]
pub struct ApiContext {
    relay: Option<ContactRelay>,
}

impl ApiContext {
    /// Create a context from explicit configuration and sender
    pub fn new(config: RelayConfig, sender: Arc<dyn EmailSender>) -> Arc<Self> {
        Arc::new(Self {
            relay: Some(ContactRelay::new(config, sender)),
        })
    }

    /// Create a context that rejects every dispatch with a configuration error
    pub fn unconfigured() -> Arc<Self> {
        Arc::new(Self { relay: None })
    }

    /// Create a context from environment variables
    pub fn from_env() -> Arc<Self> {
        match Self::try_from_env() {
            Ok(ctx) => {
                info!("Contact relay configured");
                ctx
            }
            Err(err) => {
                error!("Contact relay is not configured: {}", err);
                Self::unconfigured()
            }
        }
    }

    fn try_from_env() -> Result<Arc<Self>, RelayError> {
        let config = load_config_from_env()?;
        let sender = build_sender(&config.provider)?;
        Ok(Self::new(config, sender))
    }

    pub fn relay(&self) -> Result<&ContactRelay, ApiError> {
        self.relay.as_ref().ok_or_else(|| {
            error!("Rejecting submission: email provider credentials or recipient missing");
            ApiError::Configuration
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unconfigured_context() {
        let ctx = ApiContext::unconfigured();
        assert!(matches!(ctx.relay(), Err(ApiError::Configuration)));
    }
}
