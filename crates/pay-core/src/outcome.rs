//! # Payment Outcomes
//!
//! The approved/rejected result of a single processing attempt.

use crate::error::Rejection;
use crate::fees::FeeBreakdown;
use crate::gateway::GatewayKind;
use crate::money::Money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Deterministic reference for an approved charge.
///
/// Derived from the gateway, amount and card number, so processing the same
/// payment twice yields the same reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionReference(String);

impl TransactionReference {
    /// Hex characters kept from the digest
    const DIGEST_CHARS: usize = 16;

    pub fn derive(gateway: GatewayKind, amount: Money, card_number: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(gateway.tag().as_bytes());
        hasher.update(b"|");
        hasher.update(amount.amount().normalize().to_string().as_bytes());
        hasher.update(b"|");
        hasher.update(card_number.as_bytes());
        let digest = hex::encode(hasher.finalize());

        Self(format!(
            "{}_{}",
            gateway.as_str(),
            &digest[..Self::DIGEST_CHARS]
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TransactionReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Result of processing one payment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PaymentOutcome {
    Approved {
        transaction_reference: TransactionReference,
        gateway: GatewayKind,
        amount: Money,
        /// `None` for gateways that charge no fee
        #[serde(default, skip_serializing_if = "Option::is_none")]
        fees: Option<FeeBreakdown>,
        message: String,
    },
    Rejected {
        gateway: GatewayKind,
        /// The amount as requested, which may be zero or negative
        amount: Decimal,
        reason: Rejection,
        message: String,
    },
}

impl PaymentOutcome {
    /// Build a rejection whose message is the reason's text
    pub fn rejected(gateway: GatewayKind, amount: Decimal, reason: Rejection) -> Self {
        PaymentOutcome::Rejected {
            gateway,
            amount,
            reason,
            message: reason.to_string(),
        }
    }

    pub fn is_approved(&self) -> bool {
        matches!(self, PaymentOutcome::Approved { .. })
    }

    pub fn gateway(&self) -> GatewayKind {
        match self {
            PaymentOutcome::Approved { gateway, .. } | PaymentOutcome::Rejected { gateway, .. } => {
                *gateway
            }
        }
    }

    /// The requested amount
    pub fn amount(&self) -> Decimal {
        match self {
            PaymentOutcome::Approved { amount, .. } => amount.amount(),
            PaymentOutcome::Rejected { amount, .. } => *amount,
        }
    }

    /// Human-readable message, as written to the transaction log
    pub fn message(&self) -> &str {
        match self {
            PaymentOutcome::Approved { message, .. } | PaymentOutcome::Rejected { message, .. } => {
                message
            }
        }
    }

    /// Empty for rejections
    pub fn transaction_reference(&self) -> Option<&TransactionReference> {
        match self {
            PaymentOutcome::Approved {
                transaction_reference,
                ..
            } => Some(transaction_reference),
            PaymentOutcome::Rejected { .. } => None,
        }
    }

    pub fn fees(&self) -> Option<&FeeBreakdown> {
        match self {
            PaymentOutcome::Approved { fees, .. } => fees.as_ref(),
            PaymentOutcome::Rejected { .. } => None,
        }
    }

    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            PaymentOutcome::Approved { .. } => None,
            PaymentOutcome::Rejected { reason, .. } => Some(*reason),
        }
    }
}

impl std::fmt::Display for PaymentOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}
