//! # Payment Orchestrator
//!
//! Runs validation → processing → logging against one gateway bundle.

use crate::card::mask_card;
use crate::error::{PaymentError, PaymentResult, Rejection};
use crate::gateway::{CardValidator, GatewayFactory, GatewayKind, PaymentProcessor, TransactionLogger};
use crate::outcome::PaymentOutcome;
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

/// The matched validator/processor/logger set of one gateway.
///
/// Only obtainable from a factory; fields are private so components from
/// different gateways cannot be mixed by hand.
pub struct GatewayBundle {
    gateway: GatewayKind,
    validator: Box<dyn CardValidator>,
    processor: Box<dyn PaymentProcessor>,
    logger: Box<dyn TransactionLogger>,
}

impl GatewayBundle {
    /// Create all three components and check they share the factory's gateway
    pub fn from_factory(factory: &dyn GatewayFactory) -> PaymentResult<Self> {
        let gateway = factory.gateway();
        let validator = factory.create_validator();
        let processor = factory.create_processor();
        let logger = factory.create_logger();

        let found = [
            ("validator", validator.gateway()),
            ("processor", processor.gateway()),
            ("logger", logger.gateway()),
        ];
        if let Some((component, found)) = found.into_iter().find(|(_, kind)| *kind != gateway) {
            return Err(PaymentError::MismatchedBundle {
                component,
                expected: gateway,
                found,
            });
        }

        Ok(Self {
            gateway,
            validator,
            processor,
            logger,
        })
    }

    pub fn gateway(&self) -> GatewayKind {
        self.gateway
    }
}

impl std::fmt::Debug for GatewayBundle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayBundle")
            .field("gateway", &self.gateway)
            .finish_non_exhaustive()
    }
}

/// Gateway-agnostic payment front end.
///
/// Holds one bundle for its whole lifetime; to switch gateway build a new
/// orchestrator.
#[derive(Debug)]
pub struct PaymentOrchestrator {
    bundle: GatewayBundle,
}

impl PaymentOrchestrator {
    pub fn new(factory: &dyn GatewayFactory) -> PaymentResult<Self> {
        let bundle = GatewayBundle::from_factory(factory)?;
        debug!("Payment orchestrator ready: gateway={}", bundle.gateway());
        Ok(Self { bundle })
    }

    pub fn gateway(&self) -> GatewayKind {
        self.bundle.gateway()
    }

    /// Process one payment.
    ///
    /// An invalid card short-circuits before the processor runs; the
    /// rejection is still written to the transaction log.
    pub fn process_payment(&self, amount: Decimal, card_number: &str) -> PaymentOutcome {
        let gateway = self.bundle.gateway;

        if !self.bundle.validator.validate(card_number) {
            warn!(
                "Card rejected: gateway={}, card={}",
                gateway,
                mask_card(card_number)
            );
            let outcome = PaymentOutcome::rejected(gateway, amount, Rejection::InvalidCard);
            self.bundle
                .logger
                .log(&format!("Transaction rejected: {}", outcome.message()));
            return outcome;
        }

        let outcome = self.bundle.processor.process(amount, card_number);
        match &outcome {
            PaymentOutcome::Approved {
                transaction_reference,
                ..
            } => info!(
                "Payment approved: gateway={}, reference={}",
                gateway, transaction_reference
            ),
            PaymentOutcome::Rejected { reason, .. } => {
                warn!("Payment rejected: gateway={}, reason={}", gateway, reason)
            }
        }

        self.bundle
            .logger
            .log(&format!("Transaction processed: {}", outcome.message()));
        outcome
    }
}
