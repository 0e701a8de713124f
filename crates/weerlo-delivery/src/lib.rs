//! Weerlo Form Delivery
//!
//! Concrete transports for submitted forms. The site hands every
//! [`Submission`] to one [`Transport`], chosen by deployment configuration.

pub mod log;
pub mod webhook;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use weerlo_core::Submission;

pub use log::LogTransport;
pub use webhook::WebhookTransport;

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Webhook {url} answered with status {status}")]
    Status { url: String, status: u16 },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type TransportResult<T> = Result<T, TransportError>;

/// Something that can transmit a submitted form
#[async_trait]
pub trait Transport: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    async fn send(&self, submission: &Submission) -> TransportResult<()>;
}

/// Transport shared across request handlers
pub type SharedTransport = Arc<dyn Transport>;

/// Which transport to use
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DeliveryKind {
    /// Record submissions in the server log only
    Log,
    /// POST submissions as JSON
    Webhook { url: String },
}

/// Delivery configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryConfig {
    pub kind: DeliveryKind,
    pub timeout: Duration,
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            kind: DeliveryKind::Log,
            timeout: Duration::from_secs(10),
        }
    }
}

impl DeliveryConfig {
    /// Read `WEERLO_DELIVERY`, `WEERLO_WEBHOOK_URL` and
    /// `WEERLO_WEBHOOK_TIMEOUT_SECS` from the environment
    pub fn from_env() -> TransportResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> TransportResult<Self> {
        let mut config = Self::default();

        if let Some(secs) = lookup("WEERLO_WEBHOOK_TIMEOUT_SECS") {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                TransportError::Config(format!("invalid WEERLO_WEBHOOK_TIMEOUT_SECS: {}", secs))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        let kind = lookup("WEERLO_DELIVERY").unwrap_or_else(|| "log".to_string());
        config.kind = match kind.trim().to_lowercase().as_str() {
            "log" => DeliveryKind::Log,
            "webhook" => {
                let url = lookup("WEERLO_WEBHOOK_URL")
                    .filter(|url| !url.trim().is_empty())
                    .ok_or_else(|| {
                        TransportError::Config(
                            "WEERLO_DELIVERY=webhook requires WEERLO_WEBHOOK_URL".to_string(),
                        )
                    })?;
                DeliveryKind::Webhook { url }
            }
            other => {
                return Err(TransportError::Config(format!(
                    "unknown delivery kind: {}",
                    other
                )))
            }
        };

        Ok(config)
    }
}

/// Build the configured transport
pub fn build_transport(config: &DeliveryConfig) -> TransportResult<SharedTransport> {
    let transport: SharedTransport = match &config.kind {
        DeliveryKind::Log => Arc::new(LogTransport::new()),
        DeliveryKind::Webhook { url } => Arc::new(WebhookTransport::new(url, config.timeout)?),
    };
    tracing::info!("Form delivery transport: {}", transport.name());
    Ok(transport)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_config_logs() {
        let config = DeliveryConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, DeliveryConfig::default());
    }

    #[test]
    fn test_webhook_config() {
        let config = DeliveryConfig::from_lookup(lookup(&[
            ("WEERLO_DELIVERY", "Webhook"),
            ("WEERLO_WEBHOOK_URL", "https://hooks.example.com/enquiries"),
            ("WEERLO_WEBHOOK_TIMEOUT_SECS", "3"),
        ]))
        .unwrap();

        assert_eq!(
            config.kind,
            DeliveryKind::Webhook {
                url: "https://hooks.example.com/enquiries".into()
            }
        );
        assert_eq!(config.timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_webhook_requires_url() {
        let err = DeliveryConfig::from_lookup(lookup(&[("WEERLO_DELIVERY", "webhook")])).unwrap_err();
        assert!(matches!(err, TransportError::Config(_)));

        let err = DeliveryConfig::from_lookup(lookup(&[("WEERLO_DELIVERY", "smtp")])).unwrap_err();
        assert_eq!(err.to_string(), "Configuration error: unknown delivery kind: smtp");
    }

    #[test]
    fn test_build_transport() {
        let transport = build_transport(&DeliveryConfig::default()).unwrap();
        assert_eq!(transport.name(), "log");

        let config = DeliveryConfig {
            kind: DeliveryKind::Webhook {
                url: "not a url".into(),
            },
            ..Default::default()
        };
        assert!(matches!(build_transport(&config), Err(TransportError::Config(_))));
    }
}
