mod common;

use common::{addr, capturing_factory, CARD_16};
use pay_core::GatewayKind;
use rust_decimal_macros::dec;

#[test]
fn test_each_call_returns_a_new_instance() {
    for kind in GatewayKind::ALL {
        let (factory, _sink) = capturing_factory(kind);

        let v1 = factory.create_validator();
        let v2 = factory.create_validator();
        assert_ne!(addr(&v1), addr(&v2), "{kind} validator");

        let p1 = factory.create_processor();
        let p2 = factory.create_processor();
        assert_ne!(addr(&p1), addr(&p2), "{kind} processor");

        let l1 = factory.create_logger();
        let l2 = factory.create_logger();
        assert_ne!(addr(&l1), addr(&l2), "{kind} logger");
    }
}

#[test]
fn test_instances_behave_identically() {
    let cards = ["", "123", "378282246310005", CARD_16, "1234567890123456789"];

    for kind in GatewayKind::ALL {
        let (factory, _sink) = capturing_factory(kind);
        let v1 = factory.create_validator();
        let v2 = factory.create_validator();
        for card in cards {
            assert_eq!(v1.validate(card), v2.validate(card), "{kind} {card:?}");
        }

        let p1 = factory.create_processor();
        let p2 = factory.create_processor();
        assert_eq!(p1.process(dec!(99.99), CARD_16), p2.process(dec!(99.99), CARD_16));
    }
}

#[test]
fn test_created_components_work_together() {
    for kind in GatewayKind::ALL {
        let (factory, sink) = capturing_factory(kind);
        let validator = factory.create_validator();
        let processor = factory.create_processor();
        let logger = factory.create_logger();

        assert!(validator.validate(CARD_16));
        let outcome = processor.process(dec!(100), CARD_16);
        assert!(outcome.message().contains(kind.tag()));
        logger.log("Test");

        assert_eq!(sink.len(), 1);
        assert!(sink.lines()[0].starts_with(&format!("[{}] ", kind.tag())));
    }
}

#[test]
fn test_card_length_boundaries() {
    let (mp, _) = capturing_factory(GatewayKind::MercadoPago);
    let mp = mp.create_validator();
    assert!(mp.validate(&"5".repeat(15)));
    assert!(mp.validate(&"5".repeat(16)));
    assert!(!mp.validate(&"5".repeat(14)));

    let (stripe, _) = capturing_factory(GatewayKind::Stripe);
    let stripe = stripe.create_validator();
    for len in 13..=19 {
        assert!(stripe.validate(&"4".repeat(len)));
    }
    assert!(!stripe.validate(&"4".repeat(12)));
    assert!(!stripe.validate(&"4".repeat(20)));
}

#[test]
fn test_logger_never_panics() {
    let long = "a".repeat(1000);
    let messages = [
        "",
        long.as_str(),
        "Mensagem em português",
        "Message with special chars !@#$%",
        "支付成功 ✓",
    ];

    for kind in GatewayKind::ALL {
        let (factory, sink) = capturing_factory(kind);
        let logger = factory.create_logger();
        for message in messages {
            logger.log(message);
        }
        assert_eq!(sink.len(), messages.len());
    }
}
