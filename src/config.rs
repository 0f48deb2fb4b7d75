use crate::error::{GatewayError, Result};

/// Runtime configuration for the gateway, loaded once at startup and
/// injected into the services as `Arc<GatewayConfig>`.
///
/// Keeping every environment read behind this single boundary lets tests
/// substitute a fake configuration without touching process state.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// PayHere merchant identifier, compared against inbound notifications.
    pub merchant_id: String,
    /// PayHere merchant secret. Never logged, never serialized.
    pub merchant_secret: String,
    /// Public base URL of this service, used to build the notify callback
    /// and as the fallback origin for return/cancel URLs.
    pub public_base_url: String,
    /// Whether checkout payloads point clients at the PayHere sandbox.
    pub sandbox: bool,
}

impl GatewayConfig {
    /// Loads the configuration from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::load(|name| std::env::var(name).ok())
    }

    /// Loads the configuration through an arbitrary lookup function.
    pub fn load(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let require = |name: &str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| GatewayError::Misconfigured(name.to_string()))
        };

        Ok(Self {
            merchant_id: require("PAYHERE_MERCHANT_ID")?,
            merchant_secret: require("PAYHERE_MERCHANT_SECRET")?,
            public_base_url: require("PUBLIC_BASE_URL")?,
            sandbox: lookup("PAYHERE_SANDBOX").is_none_or(|v| v == "1" || v == "true"),
        })
    }

    /// URL PayHere calls back with server-to-server notifications.
    pub fn notify_url(&self) -> String {
        format!(
            "{}/payhere/notify",
            self.public_base_url.trim_end_matches('/')
        )
    }
}
