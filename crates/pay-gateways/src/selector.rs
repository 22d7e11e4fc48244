//! # Gateway Selection
//!
//! Maps a [`GatewayKind`] to its factory. The set is closed; there is no
//! runtime plugin discovery.

use crate::config::GatewayConfig;
use crate::mercadopago::MercadoPagoFactory;
use crate::pagseguro::PagSeguroFactory;
use crate::stripe::StripeFactory;
use pay_core::{BoxedGatewayFactory, GatewayKind, PaymentResult};

/// Factory for the given gateway
pub fn factory_for(kind: GatewayKind, config: GatewayConfig) -> BoxedGatewayFactory {
    match kind {
        GatewayKind::PagSeguro => Box::new(PagSeguroFactory::new(config)),
        GatewayKind::MercadoPago => Box::new(MercadoPagoFactory::new(config)),
        GatewayKind::Stripe => Box::new(StripeFactory::new(config)),
    }
}

/// Factory for a gateway name such as `"stripe"` (case-insensitive)
pub fn factory_by_name(name: &str, config: GatewayConfig) -> PaymentResult<BoxedGatewayFactory> {
    let kind: GatewayKind = name.parse()?;
    Ok(factory_for(kind, config))
}
