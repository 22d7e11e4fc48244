//! Checks and builders shared by the gateway processors.

use chrono::Local;
use pay_core::{
    is_blank, render_log_line, FeeBreakdown, FeeSchedule, GatewayKind, Money, PaymentOutcome,
    Rejection, SharedSink, TermColor, TransactionReference,
};
use rust_decimal::Decimal;
use tracing::warn;

/// Processor preconditions, amount first then card
pub(crate) fn admit(amount: Decimal, card_number: &str) -> Result<Money, Rejection> {
    if amount <= Decimal::ZERO {
        return Err(Rejection::InvalidAmount);
    }
    if is_blank(card_number) {
        return Err(Rejection::InvalidCard);
    }
    Money::new(amount).map_err(|_| Rejection::InvalidAmount)
}

/// [`admit`], then price the charge. A total outside the `Decimal` range is
/// an invalid amount.
pub(crate) fn admit_priced(
    amount: Decimal,
    card_number: &str,
    fees: &FeeSchedule,
) -> Result<(Money, FeeBreakdown), Rejection> {
    let charge = admit(amount, card_number)?;
    let breakdown = fees.apply(charge).ok_or_else(|| {
        warn!("Fee total for {} is out of range", amount);
        Rejection::InvalidAmount
    })?;
    Ok((charge, breakdown))
}

pub(crate) fn approve(
    gateway: GatewayKind,
    amount: Money,
    card_number: &str,
    fees: Option<FeeBreakdown>,
    message: String,
) -> PaymentOutcome {
    PaymentOutcome::Approved {
        transaction_reference: TransactionReference::derive(gateway, amount, card_number),
        gateway,
        amount,
        fees,
        message,
    }
}

/// Write one timestamped line for `gateway` to `sink`
pub(crate) fn write_log_line(
    sink: &SharedSink,
    gateway: GatewayKind,
    color: Option<TermColor>,
    message: &str,
) {
    let line = render_log_line(gateway.tag(), Local::now().time(), message, color);
    sink.write_line(&line);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_amount_checked_before_card() {
        assert_eq!(admit(dec!(0), ""), Err(Rejection::InvalidAmount));
        assert_eq!(admit(dec!(-10), "4242424242424242"), Err(Rejection::InvalidAmount));
        assert_eq!(admit(dec!(10), "   "), Err(Rejection::InvalidCard));
    }

    #[test]
    fn test_admit_accepts_any_non_blank_card() {
        let money = admit(dec!(0.01), "1").unwrap();
        assert_eq!(money.amount(), dec!(0.01));
    }

    #[test]
    fn test_priced_overflow_is_invalid_amount() {
        let fees = FeeSchedule::from_constants(dec!(0.029), dec!(0.30));
        assert_eq!(
            admit_priced(Decimal::MAX, "4242424242424242", &fees),
            Err(Rejection::InvalidAmount)
        );

        let (charge, breakdown) = admit_priced(dec!(10), "4242424242424242", &fees).unwrap();
        assert_eq!(charge.amount(), dec!(10));
        assert_eq!(breakdown.total.amount(), dec!(10.59));
    }

    #[test]
    fn test_priced_keeps_admission_order() {
        let fees = FeeSchedule::FREE;
        assert_eq!(admit_priced(dec!(0), "", &fees), Err(Rejection::InvalidAmount));
        assert_eq!(admit_priced(dec!(5), " ", &fees), Err(Rejection::InvalidCard));
    }
}
