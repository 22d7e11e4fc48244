//! # Fee Schedules
//!
//! Percentage-plus-fixed fee models used by the gateway processors.

use crate::money::Money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A gateway's fee model: `amount * rate + fixed`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeSchedule {
    rate: Decimal,
    fixed: Decimal,
}

impl FeeSchedule {
    /// No fee at all
    pub const FREE: Self = Self {
        rate: Decimal::ZERO,
        fixed: Decimal::ZERO,
    };

    /// For gateway constants known to be non-negative
    pub const fn from_constants(rate: Decimal, fixed: Decimal) -> Self {
        Self { rate, fixed }
    }

    /// Whether this schedule never charges anything
    pub fn is_free(&self) -> bool {
        self.rate.is_zero() && self.fixed.is_zero()
    }

    /// Compute the fee and total for a charge.
    ///
    /// Returns `None` when the fee or the total does not fit in a `Decimal`.
    pub fn apply(&self, amount: Money) -> Option<FeeBreakdown> {
        let percentage = amount.checked_scale(self.rate)?;
        let fixed = Money::from_non_negative(self.fixed.abs());
        let fee = percentage.checked_add(fixed)?;
        let total = amount.checked_add(fee)?;

        Some(FeeBreakdown {
            percentage,
            fixed,
            fee,
            total,
        })
    }
}

/// Fee components of an approved charge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeBreakdown {
    /// Percentage part of the fee
    pub percentage: Money,
    /// Fixed part of the fee
    pub fixed: Money,
    /// `percentage + fixed`
    pub fee: Money,
    /// `amount + fee`
    pub total: Money,
}
