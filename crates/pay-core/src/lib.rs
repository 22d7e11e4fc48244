//! # pay-core
//!
//! Core types and traits for the pluggable payment gateways.
//!
//! This crate provides:
//! - `CardValidator`, `PaymentProcessor`, `TransactionLogger` capability traits
//! - `GatewayFactory` for building a matched set of those components
//! - `PaymentOrchestrator`, the gateway-agnostic front end
//! - `Money` and `FeeSchedule` for exact fee arithmetic
//! - `LogSink` implementations for transaction log output
//!
//! ## Example
//!
//! ```rust,ignore
//! use pay_core::PaymentOrchestrator;
//! use pay_gateways::StripeFactory;
//! use rust_decimal_macros::dec;
//!
//! let factory = StripeFactory::default();
//! let orchestrator = PaymentOrchestrator::new(&factory)?;
//!
//! let outcome = orchestrator.process_payment(dec!(100.00), "4242424242424242");
//! println!("{}", outcome.message());
//! ```

pub mod card;
pub mod error;
pub mod fees;
pub mod gateway;
pub mod money;
pub mod orchestrator;
pub mod outcome;
pub mod sink;

// Re-exports for convenience
pub use card::{is_blank, mask_card, CardLengthPolicy};
pub use error::{PaymentError, PaymentResult, Rejection};
pub use fees::{FeeBreakdown, FeeSchedule};
pub use gateway::{
    BoxedGatewayFactory, CardValidator, GatewayFactory, GatewayKind, PaymentProcessor,
    TransactionLogger,
};
pub use money::{Currency, Money};
pub use orchestrator::{GatewayBundle, PaymentOrchestrator};
pub use outcome::{PaymentOutcome, TransactionReference};
pub use sink::{render_log_line, LogSink, MemorySink, SharedSink, StdoutSink, TermColor, WriterSink};
