//! bid_steps - Main Entry Point
//!
//! Computes the bid price steps for one pricing request and prints the
//! result as JSON.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use bid_steps::config::load_with_dotenv;
use bid_steps::{build_parameters, calculate_bid_steps, Parameters};

/// CLI arguments for the application
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Custom bid settings JSON (overrides the configured settings)
    #[arg(short, long, env = "BID_STEPS_SETTINGS")]
    settings: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Start price override
    #[arg(long)]
    start_price: Option<i64>,

    /// Recommended price override
    #[arg(long)]
    recprice: Option<i64>,

    /// Trip duration override, in seconds
    #[arg(long)]
    duration: Option<i64>,

    /// Driver ETA override, in seconds
    #[arg(long)]
    eta: Option<i64>,

    /// Pretty-print the JSON result
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    let app_config = load_with_dotenv(Some(&args.config)).context("failed to load configuration")?;

    // Initialize logging
    let log_level = args
        .log_level
        .as_deref()
        .unwrap_or(app_config.settings.log_level.as_str());
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("Configuration file: {}", args.config);

    let mut defaults: Parameters = app_config.defaults.into();
    if let Some(start_price) = args.start_price {
        defaults.start_price = start_price;
    }
    if let Some(recprice) = args.recprice {
        defaults.recprice = recprice;
    }
    if let Some(duration) = args.duration {
        defaults.duration = duration;
    }
    if let Some(eta) = args.eta {
        defaults.eta = eta;
    }

    let settings = args.settings.or(app_config.settings.custom_bid_settings);
    let params = match settings.as_deref() {
        Some(json) => match build_parameters(&defaults, json) {
            Ok(params) => params,
            Err(err) => {
                warn!(error = %err, "custom bid settings rejected, using defaults");
                defaults
            }
        },
        None => defaults,
    };

    let result = calculate_bid_steps(&params);
    info!(
        algorithm_name = %result.algorithm_name,
        n_steps = result.bid_steps.len(),
        "bid steps calculated"
    );

    let output = if args.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{output}");

    Ok(())
}
