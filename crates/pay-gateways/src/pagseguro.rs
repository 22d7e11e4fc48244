//! # PagSeguro
//!
//! Accepts 16-character cards only, charges no fee and logs uncolored lines.

use crate::charge::{admit_priced, approve, write_log_line};
use crate::config::GatewayConfig;
use pay_core::{
    mask_card, CardLengthPolicy, CardValidator, Currency, FeeSchedule, GatewayFactory,
    GatewayKind, PaymentOutcome, PaymentProcessor, SharedSink, TransactionLogger,
};
use rust_decimal::Decimal;
use tracing::debug;

const GATEWAY: GatewayKind = GatewayKind::PagSeguro;

/// Card validator: exactly 16 characters
#[derive(Debug, Clone)]
pub struct PagSeguroValidator {
    policy: CardLengthPolicy,
}

impl PagSeguroValidator {
    pub const POLICY: CardLengthPolicy = CardLengthPolicy::exactly(16);

    pub fn new() -> Self {
        Self {
            policy: Self::POLICY,
        }
    }
}

impl Default for PagSeguroValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl CardValidator for PagSeguroValidator {
    fn validate(&self, card_number: &str) -> bool {
        debug!("PagSeguro: validating card {}", mask_card(card_number));
        self.policy.accepts(card_number)
    }

    fn gateway(&self) -> GatewayKind {
        GATEWAY
    }
}

/// Fee-free processor
#[derive(Debug, Clone)]
pub struct PagSeguroProcessor {
    currency: Currency,
    fees: FeeSchedule,
}

impl PagSeguroProcessor {
    pub const FEES: FeeSchedule = FeeSchedule::FREE;

    pub fn new(currency: Currency) -> Self {
        Self {
            currency,
            fees: Self::FEES,
        }
    }
}

impl Default for PagSeguroProcessor {
    fn default() -> Self {
        Self::new(Currency::default())
    }
}

impl PaymentProcessor for PagSeguroProcessor {
    fn process(&self, amount: Decimal, card_number: &str) -> PaymentOutcome {
        debug!("PagSeguro: processing payment of {}", amount);

        let (charge, fees) = match admit_priced(amount, card_number, &self.fees) {
            Ok(priced) => priced,
            Err(reason) => return PaymentOutcome::rejected(GATEWAY, amount, reason),
        };

        let message = format!(
            "Payment of {} processed successfully via PagSeguro!",
            charge.display(self.currency)
        );
        let fees = (!self.fees.is_free()).then_some(fees);
        approve(GATEWAY, charge, card_number, fees, message)
    }

    fn gateway(&self) -> GatewayKind {
        GATEWAY
    }
}

/// Plain `[PagSeguro] HH:MM:SS - message` lines
#[derive(Clone)]
pub struct PagSeguroLogger {
    sink: SharedSink,
}

impl PagSeguroLogger {
    pub fn new(sink: SharedSink) -> Self {
        Self { sink }
    }
}

impl TransactionLogger for PagSeguroLogger {
    fn log(&self, message: &str) {
        write_log_line(&self.sink, GATEWAY, None, message);
    }

    fn gateway(&self) -> GatewayKind {
        GATEWAY
    }
}

/// Builds PagSeguro validator/processor/logger sets
#[derive(Debug, Clone, Default)]
pub struct PagSeguroFactory {
    config: GatewayConfig,
}

impl PagSeguroFactory {
    pub fn new(config: GatewayConfig) -> Self {
        Self { config }
    }
}

impl GatewayFactory for PagSeguroFactory {
    fn gateway(&self) -> GatewayKind {
        GATEWAY
    }

    fn create_validator(&self) -> Box<dyn CardValidator> {
        Box::new(PagSeguroValidator::new())
    }

    fn create_processor(&self) -> Box<dyn PaymentProcessor> {
        Box::new(PagSeguroProcessor::new(self.config.currency))
    }

    fn create_logger(&self) -> Box<dyn TransactionLogger> {
        Box::new(PagSeguroLogger::new(self.config.sink.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pay_core::{MemorySink, Rejection};
    use rust_decimal_macros::dec;
    use std::sync::Arc;

    #[test]
    fn test_validator_exactly_sixteen() {
        let validator = PagSeguroValidator::new();
        assert!(validator.validate("1234567890123456"));
        assert!(!validator.validate("123456789012345"));
        assert!(!validator.validate("12345678901234567"));
        assert!(!validator.validate(""));
        assert!(!validator.validate("                "));
    }

    #[test]
    fn test_processor_has_no_fee() {
        let outcome = PagSeguroProcessor::default().process(dec!(150.00), "1234567890123456");

        assert!(outcome.is_approved());
        assert!(outcome.fees().is_none());
        assert_eq!(
            outcome.message(),
            "Payment of R$ 150.00 processed successfully via PagSeguro!"
        );
    }

    #[test]
    fn test_processor_rejections() {
        let processor = PagSeguroProcessor::default();

        let outcome = processor.process(dec!(0), "1234567890123456");
        assert_eq!(outcome.rejection(), Some(Rejection::InvalidAmount));
        assert_eq!(outcome.message(), "invalid amount");

        let outcome = processor.process(dec!(10), "");
        assert_eq!(outcome.rejection(), Some(Rejection::InvalidCard));
        assert_eq!(outcome.message(), "invalid card number");
    }

    #[test]
    fn test_largest_amount_approved_without_fee() {
        let outcome = PagSeguroProcessor::default().process(Decimal::MAX, "1234567890123456");

        assert!(outcome.is_approved());
        assert!(outcome.fees().is_none());
        assert_eq!(outcome.amount(), Decimal::MAX);
    }

    #[test]
    fn test_processor_in_other_currency() {
        let outcome = PagSeguroProcessor::new(Currency::USD).process(dec!(9.5), "1234567890123456");
        assert_eq!(
            outcome.message(),
            "Payment of $9.50 processed successfully via PagSeguro!"
        );
    }

    #[test]
    fn test_logger_is_uncolored() {
        let sink = Arc::new(MemorySink::new());
        PagSeguroLogger::new(sink.clone()).log("Test message");

        let lines = sink.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("[PagSeguro] "));
        assert!(lines[0].ends_with(" - Test message"));
        assert!(!lines[0].contains('\x1b'));
    }

    #[test]
    fn test_factory_components_match() {
        let factory = PagSeguroFactory::default();
        assert_eq!(factory.create_validator().gateway(), GatewayKind::PagSeguro);
        assert_eq!(factory.create_processor().gateway(), GatewayKind::PagSeguro);
        assert_eq!(factory.create_logger().gateway(), GatewayKind::PagSeguro);
    }
}
