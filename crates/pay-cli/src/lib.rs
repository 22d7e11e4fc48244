//! # pay-cli
//!
//! Command-line driver for the payment gateways.
//!
//! This crate provides:
//! - Environment configuration (`PAY_GATEWAY`, `PAY_CURRENCY`, `PAY_LOG_COLOR`)
//! - TOML batch files of payments
//! - Text and JSON outcome reporting
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `pay-demo` | Run the sample PagSeguro payment |
//! | `pay-demo pay <amount> <card>` | Process one payment |
//! | `pay-demo batch <file>` | Process every payment in a TOML file |

pub mod config;
pub mod report;

pub use config::{BatchFile, CliConfig, PaymentRequest, DEFAULT_GATEWAY};
pub use report::{banner, render_outcome, run_payments, OutputFormat, RunSummary};
