//! # Gateway Capabilities
//!
//! Each payment gateway ships one implementation of every capability trait
//! plus a factory that hands out a matched set.
//!
//! ## Design Pattern
//!
//! Abstract Factory: the orchestrator only sees the traits below, and the
//! factory guarantees the three components it creates belong to the same
//! gateway.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  GatewayFactory (trait)                     │
//! │  ├── create_validator()  -> Box<dyn CardValidator>          │
//! │  ├── create_processor()  -> Box<dyn PaymentProcessor>       │
//! │  └── create_logger()     -> Box<dyn TransactionLogger>      │
//! └─────────────────────────────────────────────────────────────┘
//!                            ▲
//!          ┌─────────────────┼─────────────────┐
//!          │                 │                 │
//!  ┌───────┴───────┐ ┌───────┴───────┐ ┌───────┴───────┐
//!  │   PagSeguro   │ │  MercadoPago  │ │    Stripe     │
//!  │    Factory    │ │    Factory    │ │    Factory    │
//!  └───────────────┘ └───────────────┘ └───────────────┘
//! ```

use crate::error::PaymentError;
use crate::outcome::PaymentOutcome;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The closed set of supported gateways
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GatewayKind {
    PagSeguro,
    MercadoPago,
    Stripe,
}

impl GatewayKind {
    pub const ALL: [GatewayKind; 3] = [
        GatewayKind::PagSeguro,
        GatewayKind::MercadoPago,
        GatewayKind::Stripe,
    ];

    /// Lowercase identifier used in config and references
    pub fn as_str(&self) -> &'static str {
        match self {
            GatewayKind::PagSeguro => "pagseguro",
            GatewayKind::MercadoPago => "mercadopago",
            GatewayKind::Stripe => "stripe",
        }
    }

    /// Tag written in front of every transaction log line
    pub fn tag(&self) -> &'static str {
        match self {
            GatewayKind::PagSeguro => "PagSeguro",
            GatewayKind::MercadoPago => "MercadoPago",
            GatewayKind::Stripe => "Stripe",
        }
    }
}

impl std::fmt::Display for GatewayKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for GatewayKind {
    type Err = PaymentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        GatewayKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| PaymentError::UnknownGateway {
                name: wanted.to_string(),
            })
    }
}

/// Length-based card check.
///
/// Never errors: blank or out-of-range input is simply `false`.
pub trait CardValidator: Send + Sync {
    fn validate(&self, card_number: &str) -> bool;

    /// Absent input fails closed
    fn validate_optional(&self, card_number: Option<&str>) -> bool {
        card_number.map_or(false, |card| self.validate(card))
    }

    fn gateway(&self) -> GatewayKind;
}

/// Computes the outcome of a charge, including the gateway's fees.
///
/// Must be a pure function of its inputs and must re-check the amount and
/// card itself, since it can be called without a validator.
pub trait PaymentProcessor: Send + Sync {
    fn process(&self, amount: Decimal, card_number: &str) -> PaymentOutcome;

    fn gateway(&self) -> GatewayKind;
}

/// Writes one tagged, timestamped line per message. Infallible.
pub trait TransactionLogger: Send + Sync {
    fn log(&self, message: &str);

    fn gateway(&self) -> GatewayKind;
}

/// Creates a matched set of gateway components.
///
/// Every call returns a fresh instance.
pub trait GatewayFactory: Send + Sync {
    fn gateway(&self) -> GatewayKind;

    fn create_validator(&self) -> Box<dyn CardValidator>;

    fn create_processor(&self) -> Box<dyn PaymentProcessor>;

    fn create_logger(&self) -> Box<dyn TransactionLogger>;
}

/// Type alias for a boxed gateway factory (dynamic dispatch)
pub type BoxedGatewayFactory = Box<dyn GatewayFactory>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_gateway_kind() {
        assert_eq!("stripe".parse::<GatewayKind>().unwrap(), GatewayKind::Stripe);
        assert_eq!(
            " MercadoPago ".parse::<GatewayKind>().unwrap(),
            GatewayKind::MercadoPago
        );
        assert_eq!(
            "PAGSEGURO".parse::<GatewayKind>().unwrap(),
            GatewayKind::PagSeguro
        );
    }

    #[test]
    fn test_parse_unknown_gateway() {
        let err = "paypal".parse::<GatewayKind>().unwrap_err();
        assert!(matches!(err, PaymentError::UnknownGateway { name } if name == "paypal"));
    }

    #[test]
    fn test_tags() {
        assert_eq!(GatewayKind::PagSeguro.tag(), "PagSeguro");
        assert_eq!(GatewayKind::MercadoPago.to_string(), "MercadoPago");
        assert_eq!(GatewayKind::Stripe.as_str(), "stripe");
    }

    struct LengthOnly;

    impl CardValidator for LengthOnly {
        fn validate(&self, card_number: &str) -> bool {
            card_number.len() == 4
        }

        fn gateway(&self) -> GatewayKind {
            GatewayKind::Stripe
        }
    }

    #[test]
    fn test_validate_optional_fails_closed() {
        assert!(!LengthOnly.validate_optional(None));
        assert!(LengthOnly.validate_optional(Some("1234")));
    }
}
