//! # Gateway Configuration
//!
//! Settings shared by every gateway factory: display currency, whether log
//! lines are colored, and where they are written.

use pay_core::{Currency, PaymentError, PaymentResult, SharedSink, StdoutSink};
use std::env;

/// Configuration handed to a gateway factory
#[derive(Clone)]
pub struct GatewayConfig {
    /// Currency used when rendering amounts in messages
    pub currency: Currency,

    /// Paint log lines for gateways that have a color
    pub colorize: bool,

    /// Destination for transaction log lines
    pub sink: SharedSink,
}

impl GatewayConfig {
    /// Create config writing to the given sink, BRL, colors on
    pub fn new(sink: SharedSink) -> Self {
        Self {
            currency: Currency::default(),
            colorize: true,
            sink,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Optional env vars:
    /// - `PAY_CURRENCY` (`brl`, `usd`, `eur`)
    /// - `PAY_LOG_COLOR` (`true`/`false`)
    /// - `NO_COLOR` (any non-empty value disables color)
    pub fn from_env() -> PaymentResult<Self> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> PaymentResult<Self> {
        let mut config = Self::new(StdoutSink::shared());

        if let Some(currency) = lookup("PAY_CURRENCY") {
            config.currency = currency.parse()?;
        }

        if let Some(flag) = lookup("PAY_LOG_COLOR") {
            config.colorize = parse_flag(&flag).ok_or_else(|| {
                PaymentError::Configuration(format!("PAY_LOG_COLOR must be true or false, got {flag:?}"))
            })?;
        }

        if lookup("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            config.colorize = false;
        }

        Ok(config)
    }

    /// Builder: set currency
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Builder: enable or disable colored log lines
    pub fn with_color(mut self, colorize: bool) -> Self {
        self.colorize = colorize;
        self
    }

    /// Builder: replace the log sink
    pub fn with_sink(mut self, sink: SharedSink) -> Self {
        self.sink = sink;
        self
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self::new(StdoutSink::shared())
    }
}

impl std::fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("currency", &self.currency)
            .field("colorize", &self.colorize)
            .finish_non_exhaustive()
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
