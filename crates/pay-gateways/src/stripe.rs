//! # Stripe
//!
//! Accepts 13 to 19 character cards, charges 2.9% + 0.30 and logs in
//! magenta.

use crate::charge::{admit_priced, approve, write_log_line};
use crate::config::GatewayConfig;
use pay_core::{
    mask_card, CardLengthPolicy, CardValidator, Currency, FeeSchedule, GatewayFactory,
    GatewayKind, PaymentOutcome, PaymentProcessor, SharedSink, TermColor, TransactionLogger,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

const GATEWAY: GatewayKind = GatewayKind::Stripe;

/// Card validator: 13 to 19 characters inclusive
#[derive(Debug, Clone)]
pub struct StripeValidator {
    policy: CardLengthPolicy,
}

impl StripeValidator {
    pub const POLICY: CardLengthPolicy = CardLengthPolicy::new(13, 19);

    pub fn new() -> Self {
        Self {
            policy: Self::POLICY,
        }
    }
}

impl Default for StripeValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl CardValidator for StripeValidator {
    fn validate(&self, card_number: &str) -> bool {
        debug!("Stripe: validating card {}", mask_card(card_number));
        self.policy.accepts(card_number)
    }

    fn gateway(&self) -> GatewayKind {
        GATEWAY
    }
}

/// Processor charging a percentage plus a fixed fee
#[derive(Debug, Clone)]
pub struct StripeProcessor {
    currency: Currency,
    fees: FeeSchedule,
}

impl StripeProcessor {
    /// 2.9% of the amount plus 0.30
    pub const FEES: FeeSchedule = FeeSchedule::from_constants(dec!(0.029), dec!(0.30));

    pub fn new(currency: Currency) -> Self {
        Self {
            currency,
            fees: Self::FEES,
        }
    }
}

impl Default for StripeProcessor {
    fn default() -> Self {
        Self::new(Currency::default())
    }
}

impl PaymentProcessor for StripeProcessor {
    fn process(&self, amount: Decimal, card_number: &str) -> PaymentOutcome {
        debug!("Stripe: processing payment of {}", amount);

        let (charge, fees) = match admit_priced(amount, card_number, &self.fees) {
            Ok(priced) => priced,
            Err(reason) => return PaymentOutcome::rejected(GATEWAY, amount, reason),
        };

        let currency = self.currency;
        let message = format!(
            "Payment of {} processed via Stripe! Fee: {} ({} + {}) | Total: {}",
            charge.display(currency),
            fees.fee.display(currency),
            fees.percentage.display(currency),
            fees.fixed.display(currency),
            fees.total.display(currency)
        );
        approve(GATEWAY, charge, card_number, Some(fees), message)
    }

    fn gateway(&self) -> GatewayKind {
        GATEWAY
    }
}

/// Magenta `[Stripe] HH:MM:SS - message` lines
#[derive(Clone)]
pub struct StripeLogger {
    sink: SharedSink,
    colorize: bool,
}

impl StripeLogger {
    pub fn new(sink: SharedSink, colorize: bool) -> Self {
        Self { sink, colorize }
    }
}

impl TransactionLogger for StripeLogger {
    fn log(&self, message: &str) {
        let color = self.colorize.then_some(TermColor::Magenta);
        write_log_line(&self.sink, GATEWAY, color, message);
    }

    fn gateway(&self) -> GatewayKind {
        GATEWAY
    }
}

/// Builds Stripe validator/processor/logger sets
#[derive(Debug, Clone, Default)]
pub struct StripeFactory {
    config: GatewayConfig,
}

impl StripeFactory {
    pub fn new(config: GatewayConfig) -> Self {
        Self { config }
    }
}

impl GatewayFactory for StripeFactory {
    fn gateway(&self) -> GatewayKind {
        GATEWAY
    }

    fn create_validator(&self) -> Box<dyn CardValidator> {
        Box::new(StripeValidator::new())
    }

    fn create_processor(&self) -> Box<dyn PaymentProcessor> {
        Box::new(StripeProcessor::new(self.config.currency))
    }

    fn create_logger(&self) -> Box<dyn TransactionLogger> {
        Box::new(StripeLogger::new(
            self.config.sink.clone(),
            self.config.colorize,
        ))
    }
}
