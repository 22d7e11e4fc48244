//! # pay-gateways
//!
//! Gateway bundles for the payment orchestrator. Each gateway ships a
//! validator, a processor, a logger and the factory that ties them together:
//!
//! | Gateway | Card lengths | Fee | Log color |
//! |---------|--------------|-----|-----------|
//! | PagSeguro | 16 | none | none |
//! | MercadoPago | 15–16 | 3.99% | cyan |
//! | Stripe | 13–19 | 2.9% + 0.30 | magenta |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pay_core::PaymentOrchestrator;
//! use pay_gateways::{factory_for, GatewayConfig};
//! use pay_core::GatewayKind;
//!
//! let factory = factory_for(GatewayKind::MercadoPago, GatewayConfig::from_env()?);
//! let orchestrator = PaymentOrchestrator::new(factory.as_ref())?;
//!
//! let outcome = orchestrator.process_payment(dec!(100.00), "4242424242424242");
//! assert_eq!(outcome.fees().unwrap().total.amount(), dec!(103.99));
//! ```

mod charge;
pub mod config;
pub mod mercadopago;
pub mod pagseguro;
pub mod selector;
pub mod stripe;

// Re-exports
pub use config::GatewayConfig;
pub use mercadopago::{MercadoPagoFactory, MercadoPagoLogger, MercadoPagoProcessor, MercadoPagoValidator};
pub use pagseguro::{PagSeguroFactory, PagSeguroLogger, PagSeguroProcessor, PagSeguroValidator};
pub use selector::{factory_by_name, factory_for};
pub use stripe::{StripeFactory, StripeLogger, StripeProcessor, StripeValidator};
