//! PayoffBuilder - Main Entry Point
//!
//! Builds a futures & options strategy, evaluates its P&L at expiry across a
//! range of underlying prices and prints the breakevens.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use payoff_builder::config::{load_config, LogFormat};
use payoff_builder::payoff::{parse_legs, EvaluationRequest};
use payoff_builder::{PriceSample, StrategyKind, StrategyReport};

/// CLI arguments for the application
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Log level (trace, debug, info, warn, error); overrides the config file
    #[arg(long, env = "PAYOFF_LOG_LEVEL")]
    log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,

    /// Strategy preset (covered-call, straddle, strangle, bull-call-spread, bear-put-spread)
    #[arg(short, long, default_value = "covered-call")]
    strategy: StrategyKind,

    /// JSON file with custom legs; replaces the preset
    #[arg(long)]
    legs: Option<PathBuf>,

    /// Current underlying price; centre of the price range
    #[arg(short, long, default_value_t = 650.0)]
    underlying: f64,

    /// Price range around the underlying, in percent
    #[arg(long)]
    range_pct: Option<f64>,

    /// Number of expiry price samples
    #[arg(long)]
    points: Option<usize>,

    /// Short the whole strategy (flip every leg)
    #[arg(long)]
    inverse: bool,

    /// Print the report as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Write the (price, pnl) curve as CSV to this path
    #[arg(long)]
    curve: Option<PathBuf>,
}

fn init_logging(level: &str, format: LogFormat) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let builder = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    match format {
        LogFormat::Json => tracing::subscriber::set_global_default(builder.json().finish())?,
        LogFormat::Pretty => tracing::subscriber::set_global_default(builder.finish())?,
    }
    Ok(())
}

fn main() -> Result<()> {
    // Load environment variables from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let config = load_config(Some(args.config.as_str())).context("loading configuration")?;

    let level = args
        .log_level
        .clone()
        .unwrap_or_else(|| config.settings.log_level.clone());
    let format = if args.log_json {
        LogFormat::Json
    } else {
        config.settings.log_format
    };
    init_logging(&level, format)?;

    info!("Starting PayoffBuilder");
    info!("Configuration file: {}", args.config);

    let (name, legs) = match &args.legs {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading legs from {}", path.display()))?;
            let legs = parse_legs(&raw)
                .with_context(|| format!("parsing legs from {}", path.display()))?;
            ("Custom".to_string(), legs)
        }
        None => {
            let preset = args.strategy.with_defaults(args.underlying);
            debug!(?preset, "using preset");
            (preset.name().to_string(), preset.legs())
        }
    };

    for leg in &legs {
        debug!(%leg, "leg");
    }

    let range_pct = args.range_pct.unwrap_or(config.sampling.range_pct);
    let points = args.points.unwrap_or(config.sampling.points);
    let prices = PriceSample::around(args.underlying, range_pct, points);
    info!(
        strategy = %name,
        legs = legs.len(),
        points,
        range_pct,
        inverse = args.inverse,
        "evaluating strategy"
    );

    let request = EvaluationRequest::new(legs, prices)
        .inverse(args.inverse)
        .with_spot(args.underlying);
    let result = request.evaluate()?;
    let report = StrategyReport::build(&name, &request, &result);

    if let Some(path) = &args.curve {
        std::fs::write(path, result.curve.to_csv())
            .with_context(|| format!("writing curve to {}", path.display()))?;
        info!("Curve written to {}", path.display());
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{report}");
    }

    Ok(())
}
