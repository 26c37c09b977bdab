//! Conversion CLI
//!
//! Binary that wires together the components:
//! - Load environment variables and initialize tracing
//! - Build the fee/rate catalogs (built-in tables or JSON overrides)
//! - Run conversions through the engine and print the outcome

mod config;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use conversion_engine::ConversionEngine;
use conversion_types::{ConversionRequest, ToolResponse};

#[derive(Parser)]
#[command(name = "convert")]
#[command(author, version, about = "Currency conversion CLI", long_about = None)]
struct Cli {
    /// JSON file overriding the built-in fee table
    #[arg(long, env = "CONVERSION_FEES_FILE")]
    fees_file: Option<PathBuf>,

    /// JSON file overriding the built-in rate table
    #[arg(long, env = "CONVERSION_RATES_FILE")]
    rates_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an amount between currencies
    Convert {
        /// Amount in major units of the base currency
        amount: f64,
        /// Base currency code
        #[arg(long)]
        from: String,
        /// Target currency code
        #[arg(long)]
        to: String,
        /// Payment method (fee table key)
        #[arg(long, default_value = "cash")]
        method: String,
        /// Emit the tool-call JSON envelope instead of text
        #[arg(long)]
        json: bool,
    },
    /// List the loaded fee table
    Fees,
    /// List the loaded rate table
    Rates,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    init_tracing();

    let cli = Cli::parse();

    let fees = config::load_fee_catalog(cli.fees_file.as_deref())?;
    let rates = config::load_rate_catalog(cli.rates_file.as_deref())?;

    match cli.command {
        Commands::Convert {
            amount,
            from,
            to,
            method,
            json,
        } => {
            let engine = ConversionEngine::new(fees, rates);
            let request = ConversionRequest::new(amount, from, to, method);
            let outcome = engine.convert(&request);

            if json {
                // The envelope carries the status, so the exit code stays 0
                // for a tool-calling layer that parses stdout.
                println!(
                    "{}",
                    serde_json::to_string_pretty(&ToolResponse::from(outcome))?
                );
            } else {
                match outcome {
                    Ok(result) => {
                        println!(
                            "{} {} -> {} via {}",
                            result.amount,
                            result.base_currency,
                            result.target_currency,
                            result.payment_method
                        );
                        println!(
                            "  fee ({}%): {} {}",
                            result.fee_fraction * 100.0,
                            result.fee_amount,
                            result.base_currency
                        );
                        println!(
                            "  after fee: {} {}",
                            result.amount_after_fee, result.base_currency
                        );
                        println!("  rate: {}", result.exchange_rate);
                        println!("✓ {} {}", result.final_amount, result.target_currency);
                    }
                    Err(err) => {
                        eprintln!("✗ {err}");
                        std::process::exit(1);
                    }
                }
            }
        }
        Commands::Fees => {
            let mut entries: Vec<_> = fees.entries().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            for (method, fraction) in entries {
                println!("{method}: {fraction}");
            }
        }
        Commands::Rates => {
            let mut entries: Vec<_> = rates.entries().collect();
            entries.sort_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));
            for (base, target, rate) in entries {
                println!("{base} -> {target}: {rate}");
            }
        }
    }

    Ok(())
}
