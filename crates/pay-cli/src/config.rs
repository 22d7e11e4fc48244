//! # CLI Configuration
//!
//! Environment-driven settings for the demo driver, plus the TOML batch file
//! format.

use pay_core::{GatewayKind, PaymentError};
use pay_gateways::GatewayConfig;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::Path;

/// Gateway used when neither the CLI nor a batch file names one
pub const DEFAULT_GATEWAY: GatewayKind = GatewayKind::PagSeguro;

/// Driver configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Gateway to run payments through
    pub gateway: GatewayKind,
    /// Settings passed to the gateway factory
    pub gateway_config: GatewayConfig,
}

impl CliConfig {
    /// Load from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let gateway = match std::env::var("PAY_GATEWAY") {
            Ok(name) => name.parse()?,
            Err(_) => DEFAULT_GATEWAY,
        };
        let gateway_config = GatewayConfig::from_env()?;

        Ok(Self {
            gateway,
            gateway_config,
        })
    }

    /// Builder: override the gateway
    pub fn with_gateway(mut self, gateway: GatewayKind) -> Self {
        self.gateway = gateway;
        self
    }
}

/// One payment to run
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PaymentRequest {
    pub amount: Decimal,
    pub card_number: String,
}

/// Contents of a batch file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BatchFile {
    /// Overrides the configured gateway when present
    #[serde(default)]
    pub gateway: Option<GatewayKind>,

    #[serde(default)]
    pub payments: Vec<PaymentRequest>,
}

impl BatchFile {
    /// Parse batch file contents
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Read and parse a batch file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            PaymentError::Configuration(format!("failed to read {}: {}", path.display(), e))
        })?;
        let batch = Self::from_toml(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;
        tracing::info!("Loaded {} payments from {}", batch.payments.len(), path.display());
        Ok(batch)
    }
}
