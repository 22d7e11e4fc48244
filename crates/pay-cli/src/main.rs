//! # pay-demo
//!
//! Runs payments through one of the pluggable gateways.
//!
//! ## Usage
//!
//! ```bash
//! # Sample payment (R$ 150.00, PagSeguro unless PAY_GATEWAY is set)
//! pay-demo
//!
//! # One payment through Stripe
//! pay-demo --gateway stripe pay 100.00 4242424242424242
//!
//! # A batch file, JSON output
//! PAY_LOG_COLOR=false pay-demo --json batch config/payments.toml
//! ```

use clap::{Parser, Subcommand};
use pay_cli::{banner, run_payments, BatchFile, CliConfig, OutputFormat, PaymentRequest};
use pay_core::{GatewayKind, PaymentOrchestrator, WriterSink};
use pay_gateways::factory_for;
use rust_decimal::Decimal;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "pay-demo")]
#[command(author, version, about = "Process payments through a pluggable gateway", long_about = None)]
struct Cli {
    /// Gateway to use (pagseguro, mercadopago, stripe); overrides PAY_GATEWAY
    #[arg(long, short)]
    gateway: Option<GatewayKind>,

    /// Print outcomes as JSON lines; transaction log goes to stderr
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Process a single payment
    Pay {
        /// Amount, e.g. 150.00
        #[arg(allow_negative_numbers = true)]
        amount: Decimal,
        /// Card number
        card_number: String,
    },
    /// Process every payment in a TOML batch file
    Batch {
        /// Path to the batch file
        file: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::WARN.into())
                .from_env_lossy(),
        )
        .init();

    let cli = Cli::parse();
    let mut config = CliConfig::from_env()?;

    let format = if cli.json {
        config.gateway_config.sink = Arc::new(WriterSink::new(std::io::stderr()));
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    let requests = match cli.command {
        Some(Commands::Pay {
            amount,
            card_number,
        }) => vec![PaymentRequest {
            amount,
            card_number,
        }],
        Some(Commands::Batch { file }) => {
            let batch = BatchFile::load(&file)?;
            if let Some(gateway) = batch.gateway {
                config = config.with_gateway(gateway);
            }
            batch.payments
        }
        None => {
            if let Some(banner) = banner(format) {
                println!("{banner}");
            }
            vec![PaymentRequest {
                amount: Decimal::new(15000, 2),
                card_number: "1234567890123456".to_string(),
            }]
        }
    };

    if let Some(gateway) = cli.gateway {
        config = config.with_gateway(gateway);
    }

    info!("Gateway: {}", config.gateway);
    let factory = factory_for(config.gateway, config.gateway_config);
    let orchestrator = PaymentOrchestrator::new(factory.as_ref())?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_payments(&orchestrator, &requests, format, &mut out)?;

    Ok(())
}
