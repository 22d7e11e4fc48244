use pay_core::{BoxedGatewayFactory, GatewayKind, MemorySink};
use pay_gateways::{factory_for, GatewayConfig};
use std::sync::Arc;

/// A valid card for every gateway
pub const CARD_16: &str = "4242424242424242";

pub fn capturing_factory(kind: GatewayKind) -> (BoxedGatewayFactory, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::new());
    let config = GatewayConfig::new(sink.clone()).with_color(false);
    (factory_for(kind, config), sink)
}

/// Data address of a boxed trait object
pub fn addr<T: ?Sized>(boxed: &Box<T>) -> *const u8 {
    boxed.as_ref() as *const T as *const u8
}
