//! # MercadoPago
//!
//! Accepts 15- or 16-character cards, charges 3.99% and logs in cyan.

use crate::charge::{admit_priced, approve, write_log_line};
use crate::config::GatewayConfig;
use pay_core::{
    mask_card, CardLengthPolicy, CardValidator, Currency, FeeSchedule, GatewayFactory,
    GatewayKind, PaymentOutcome, PaymentProcessor, SharedSink, TermColor, TransactionLogger,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

const GATEWAY: GatewayKind = GatewayKind::MercadoPago;

/// Card validator: 15 or 16 characters
#[derive(Debug, Clone)]
pub struct MercadoPagoValidator {
    policy: CardLengthPolicy,
}

impl MercadoPagoValidator {
    pub const POLICY: CardLengthPolicy = CardLengthPolicy::new(15, 16);

    pub fn new() -> Self {
        Self {
            policy: Self::POLICY,
        }
    }
}

impl Default for MercadoPagoValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl CardValidator for MercadoPagoValidator {
    fn validate(&self, card_number: &str) -> bool {
        debug!("MercadoPago: validating card {}", mask_card(card_number));
        self.policy.accepts(card_number)
    }

    fn gateway(&self) -> GatewayKind {
        GATEWAY
    }
}

/// Processor charging a flat percentage
#[derive(Debug, Clone)]
pub struct MercadoPagoProcessor {
    currency: Currency,
    fees: FeeSchedule,
}

impl MercadoPagoProcessor {
    /// 3.99% of the amount
    pub const FEES: FeeSchedule = FeeSchedule::from_constants(dec!(0.0399), Decimal::ZERO);

    pub fn new(currency: Currency) -> Self {
        Self {
            currency,
            fees: Self::FEES,
        }
    }
}

impl Default for MercadoPagoProcessor {
    fn default() -> Self {
        Self::new(Currency::default())
    }
}

impl PaymentProcessor for MercadoPagoProcessor {
    fn process(&self, amount: Decimal, card_number: &str) -> PaymentOutcome {
        debug!("MercadoPago: processing payment of {}", amount);

        let (charge, fees) = match admit_priced(amount, card_number, &self.fees) {
            Ok(priced) => priced,
            Err(reason) => return PaymentOutcome::rejected(GATEWAY, amount, reason),
        };

        let currency = self.currency;
        let message = format!(
            "Payment of {} processed successfully via MercadoPago! Fee: {} | Total: {}",
            charge.display(currency),
            fees.fee.display(currency),
            fees.total.display(currency)
        );
        approve(GATEWAY, charge, card_number, Some(fees), message)
    }

    fn gateway(&self) -> GatewayKind {
        GATEWAY
    }
}

/// Cyan `[MercadoPago] HH:MM:SS - message` lines
#[derive(Clone)]
pub struct MercadoPagoLogger {
    sink: SharedSink,
    colorize: bool,
}

impl MercadoPagoLogger {
    pub fn new(sink: SharedSink, colorize: bool) -> Self {
        Self { sink, colorize }
    }
}

impl TransactionLogger for MercadoPagoLogger {
    fn log(&self, message: &str) {
        let color = self.colorize.then_some(TermColor::Cyan);
        write_log_line(&self.sink, GATEWAY, color, message);
    }

    fn gateway(&self) -> GatewayKind {
        GATEWAY
    }
}

/// Builds MercadoPago validator/processor/logger sets
#[derive(Debug, Clone, Default)]
pub struct MercadoPagoFactory {
    config: GatewayConfig,
}

impl MercadoPagoFactory {
    pub fn new(config: GatewayConfig) -> Self {
        Self { config }
    }
}

impl GatewayFactory for MercadoPagoFactory {
    fn gateway(&self) -> GatewayKind {
        GATEWAY
    }

    fn create_validator(&self) -> Box<dyn CardValidator> {
        Box::new(MercadoPagoValidator::new())
    }

    fn create_processor(&self) -> Box<dyn PaymentProcessor> {
        Box::new(MercadoPagoProcessor::new(self.config.currency))
    }

    fn create_logger(&self) -> Box<dyn TransactionLogger> {
        Box::new(MercadoPagoLogger::new(
            self.config.sink.clone(),
            self.config.colorize,
        ))
    }
}
