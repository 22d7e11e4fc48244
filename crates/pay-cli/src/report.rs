//! # Outcome Reporting
//!
//! Runs payment requests through an orchestrator and prints one summary
//! line per outcome, as text or JSON.

use crate::config::PaymentRequest;
use pay_core::{PaymentOrchestrator, PaymentOutcome, PaymentResult};
use std::io::Write;

/// How outcomes are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Banner shown before the sample payment; JSON output stays machine-readable
pub fn banner(format: OutputFormat) -> Option<String> {
    match format {
        OutputFormat::Json => None,
        OutputFormat::Text => Some(format!(
            "\n  === Payment gateways demo ===\n  Version: {}\n",
            env!("CARGO_PKG_VERSION")
        )),
    }
}

/// Render a single outcome
pub fn render_outcome(outcome: &PaymentOutcome, format: OutputFormat) -> PaymentResult<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(outcome)?),
        OutputFormat::Text => Ok(match outcome {
            PaymentOutcome::Approved {
                transaction_reference,
                message,
                ..
            } => format!("APPROVED {transaction_reference}: {message}"),
            PaymentOutcome::Rejected {
                amount, message, ..
            } => format!("REJECTED {amount}: {message}"),
        }),
    }
}

/// Counts of approved and rejected payments
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub approved: usize,
    pub rejected: usize,
}

/// Process every request in order, writing one line per outcome to `out`
pub fn run_payments<W: Write>(
    orchestrator: &PaymentOrchestrator,
    requests: &[PaymentRequest],
    format: OutputFormat,
    out: &mut W,
) -> anyhow::Result<RunSummary> {
    let mut summary = RunSummary::default();

    for request in requests {
        let outcome = orchestrator.process_payment(request.amount, &request.card_number);
        if outcome.is_approved() {
            summary.approved += 1;
        } else {
            summary.rejected += 1;
        }
        writeln!(out, "{}", render_outcome(&outcome, format)?)?;
    }

    tracing::info!(
        "Processed {} payments via {}: {} approved, {} rejected",
        requests.len(),
        orchestrator.gateway(),
        summary.approved,
        summary.rejected
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pay_core::{GatewayKind, MemorySink};
    use pay_gateways::{factory_for, GatewayConfig};
    use rust_decimal_macros::dec;
    use std::sync::Arc;

    #[test]
    fn test_banner_only_in_text_mode() {
        assert!(banner(OutputFormat::Json).is_none());

        let text = banner(OutputFormat::Text).unwrap();
        assert!(text.contains("=== Payment gateways demo ==="));
        assert!(text.contains(env!("CARGO_PKG_VERSION")));
    }

    fn request(amount: rust_decimal::Decimal, card: &str) -> PaymentRequest {
        PaymentRequest {
            amount,
            card_number: card.to_string(),
        }
    }

    #[test]
    fn test_run_payments_text() {
        let sink = Arc::new(MemorySink::new());
        let factory = factory_for(GatewayKind::Stripe, GatewayConfig::new(sink.clone()));
        let orchestrator = PaymentOrchestrator::new(factory.as_ref()).unwrap();

        let requests = vec![
            request(dec!(100.00), "4242424242424242"),
            request(dec!(0), "4242424242424242"),
            request(dec!(25.50), "123"),
        ];
        let mut out = Vec::new();
        let summary = run_payments(&orchestrator, &requests, OutputFormat::Text, &mut out).unwrap();

        assert_eq!(summary, RunSummary { approved: 1, rejected: 2 });
        assert_eq!(sink.len(), 3);

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with("APPROVED stripe_"));
        assert!(lines[0].ends_with("| Total: R$ 103.20"));
        assert_eq!(lines[1], "REJECTED 0: invalid amount");
        assert_eq!(lines[2], "REJECTED 25.50: invalid card number");
    }

    #[test]
    fn test_run_payments_json() {
        let sink = Arc::new(MemorySink::new());
        let factory = factory_for(GatewayKind::MercadoPago, GatewayConfig::new(sink));
        let orchestrator = PaymentOrchestrator::new(factory.as_ref()).unwrap();

        let mut out = Vec::new();
        run_payments(
            &orchestrator,
            &[request(dec!(100.00), "378282246310005")],
            OutputFormat::Json,
            &mut out,
        )
        .unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["status"], "approved");
        assert_eq!(value["gateway"], "mercadopago");
        let total: rust_decimal::Decimal = value["fees"]["total"].as_str().unwrap().parse().unwrap();
        assert_eq!(total, dec!(103.99));
    }
}
