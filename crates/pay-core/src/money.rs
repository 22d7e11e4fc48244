//! # Money Types
//!
//! Exact monetary values for gateway fee arithmetic.
//! Amounts are `rust_decimal::Decimal`, never binary floating point.

use crate::error::{PaymentError, PaymentResult};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Currencies the gateways can render amounts in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    #[default]
    BRL,
    USD,
    EUR,
}

impl Currency {
    /// Returns the lowercase ISO 4217 code
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::BRL => "brl",
            Currency::USD => "usd",
            Currency::EUR => "eur",
        }
    }

    /// Display prefix, including any separating space
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::BRL => "R$ ",
            Currency::USD => "$",
            Currency::EUR => "€",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str().to_uppercase())
    }
}

impl FromStr for Currency {
    type Err = PaymentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "brl" => Ok(Currency::BRL),
            "usd" => Ok(Currency::USD),
            "eur" => Ok(Currency::EUR),
            other => Err(PaymentError::Configuration(format!(
                "unsupported currency: {other}"
            ))),
        }
    }
}

/// A non-negative monetary amount.
///
/// Arithmetic keeps full decimal precision; rounding to two places only
/// happens when the value is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a money value, rejecting negative amounts
    pub fn new(amount: Decimal) -> PaymentResult<Self> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PaymentError::NegativeAmount { amount });
        }
        Ok(Self(amount))
    }

    /// Callers guarantee `amount >= 0`
    pub(crate) const fn from_non_negative(amount: Decimal) -> Self {
        Self(amount)
    }

    /// The exact, unrounded amount
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Amount rounded half away from zero to two places, with scale fixed at 2
    pub fn rounded(&self) -> Decimal {
        let mut value = self.0.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        value.rescale(2);
        value
    }

    /// Sum of two amounts, `None` when it leaves the `Decimal` range
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    /// Scale by a non-negative factor, `None` on overflow
    pub(crate) fn checked_scale(self, factor: Decimal) -> Option<Self> {
        self.0.checked_mul(factor.abs()).map(Self)
    }

    /// Format for display (e.g., "R$ 103.99")
    pub fn display(&self, currency: Currency) -> String {
        format!("{}{}", currency.symbol(), self.rounded())
    }
}

impl TryFrom<Decimal> for Money {
    type Error = PaymentError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self {
        money.0
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.rounded())
    }
}
