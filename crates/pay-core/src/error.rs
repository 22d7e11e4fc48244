//! # Payment Error Types
//!
//! Two families of errors live here:
//!
//! - [`Rejection`] is a *payment* failure. It never propagates; processors and
//!   the orchestrator turn it into a `PaymentOutcome::Rejected` value.
//! - [`PaymentError`] covers everything around the payment path (gateway
//!   selection, configuration, bundle wiring) and is returned as
//!   `Result<T, PaymentError>`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::gateway::GatewayKind;

/// Why a payment was turned down.
///
/// The `Display` text is the rejection message carried by the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rejection {
    /// Amount was zero or negative
    #[error("invalid amount")]
    InvalidAmount,

    /// Card number was blank or outside the gateway's accepted lengths
    #[error("invalid card number")]
    InvalidCard,
}

/// Error type for operations around the payment path
#[derive(Debug, Error)]
pub enum PaymentError {
    /// Gateway name did not match any known gateway
    #[error("Unknown gateway: {name}")]
    UnknownGateway { name: String },

    /// Monetary values cannot be negative
    #[error("Negative amount: {amount}")]
    NegativeAmount { amount: Decimal },

    /// A factory produced a component belonging to another gateway
    #[error("Mismatched bundle: {component} belongs to {found}, expected {expected}")]
    MismatchedBundle {
        component: &'static str,
        expected: GatewayKind,
        found: GatewayKind,
    },

    /// Configuration errors (bad env values, unreadable files)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for operations that can fail with [`PaymentError`]
pub type PaymentResult<T> = Result<T, PaymentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_messages() {
        assert_eq!(Rejection::InvalidAmount.to_string(), "invalid amount");
        assert_eq!(Rejection::InvalidCard.to_string(), "invalid card number");
    }

    #[test]
    fn test_mismatched_bundle_message() {
        let err = PaymentError::MismatchedBundle {
            component: "processor",
            expected: GatewayKind::Stripe,
            found: GatewayKind::MercadoPago,
        };
        assert_eq!(
            err.to_string(),
            "Mismatched bundle: processor belongs to MercadoPago, expected Stripe"
        );
    }

    #[test]
    fn test_rejection_serializes_snake_case() {
        let json = serde_json::to_string(&Rejection::InvalidCard).unwrap();
        assert_eq!(json, "\"invalid_card\"");
    }
}
