use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use market_analytics::{
    breadth::{build_momentum_rows, rank_global_daily_breadth, trailing_window},
    config::{AnalyticsConfig, load_config_path},
    models::{
        breadth::{BreadthInputs, DateValue},
        candle::{Candle, check_ordering},
        settings::PeriodSettings,
    },
    rotation::build_rotation_trail,
};
use serde::de::DeserializeOwned;
use shared_utils::env::env_path;
use tracing::info;
use tracing_subscriber::EnvFilter;

const CONFIG_ENV: &str = "MARKET_ANALYTICS_CONFIG";

#[derive(Parser)]
#[command(version, about = "Market Analytics CLI")]
struct Cli {
    /// Analytics config TOML (falls back to $MARKET_ANALYTICS_CONFIG, then built-in defaults)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Rotation trail of one symbol against a benchmark
    Rrg(RrgCmd),
    /// Composite breadth momentum rows
    Breadth {
        /// JSON document with the breadth series
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
    },
    /// Percentile-ranked global daily breadth
    Gdb {
        /// JSON array of {"dateStr", "value"} readings, oldest first
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Trailing readings to rank against
        #[arg(long)]
        lookback: Option<usize>,
    },
}

#[derive(Args)]
struct RrgCmd {
    /// JSON array of symbol candles, oldest first
    #[arg(long, value_name = "FILE")]
    symbol: PathBuf,
    /// JSON array of benchmark candles, oldest first
    #[arg(long, value_name = "FILE")]
    benchmark: PathBuf,
    /// Ticker recorded on each point (defaults to the symbol file name)
    #[arg(long)]
    ticker: Option<String>,
    #[arg(long)]
    observations: Option<usize>,
    #[arg(long)]
    period: Option<usize>,
    #[arg(long)]
    momentum_period: Option<usize>,
    #[arg(long)]
    smoothing_period: Option<usize>,
}

fn main() -> Result<()> {
    // stdout carries the JSON result, logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cfg = load_config(cli.config.as_deref())?;

    let output = match cli.cmd {
        Cmd::Rrg(cmd) => {
            let symbol: Vec<Candle> = read_json(&cmd.symbol)?;
            let benchmark: Vec<Candle> = read_json(&cmd.benchmark)?;
            check_ordering(&symbol).with_context(|| cmd.symbol.display().to_string())?;
            check_ordering(&benchmark).with_context(|| cmd.benchmark.display().to_string())?;

            let settings = PeriodSettings::new(
                cmd.period.unwrap_or(cfg.rotation.period),
                cmd.momentum_period.unwrap_or(cfg.rotation.momentum_period),
                cmd.smoothing_period.unwrap_or(cfg.rotation.smoothing_period),
            )?;
            let observations = cmd.observations.unwrap_or(cfg.rotation.observation_count);
            let ticker = cmd.ticker.unwrap_or_else(|| ticker_from_path(&cmd.symbol));

            let trail = build_rotation_trail(&ticker, &symbol, &benchmark, &settings, observations);
            info!(%ticker, points = trail.len(), requested = observations, "rotation trail built");
            serde_json::to_string_pretty(&trail)?
        }
        Cmd::Breadth { input } => {
            let inputs: BreadthInputs = read_json(&input)?;
            let rows = build_momentum_rows(&inputs);
            info!(rows = rows.len(), "momentum rows built");
            serde_json::to_string_pretty(&rows)?
        }
        Cmd::Gdb { input, lookback } => {
            let series: Vec<DateValue> = read_json(&input)?;
            let lookback = lookback.unwrap_or(cfg.breadth.percentile_lookback);
            let ranked = rank_global_daily_breadth(trailing_window(&series, lookback));
            info!(points = ranked.len(), lookback, "global daily breadth ranked");
            serde_json::to_string_pretty(&ranked)?
        }
    };

    println!("{output}");
    Ok(())
}

fn load_config(flag: Option<&Path>) -> Result<AnalyticsConfig> {
    match flag.map(Path::to_path_buf).or_else(|| env_path(CONFIG_ENV)) {
        Some(path) => load_config_path(&path),
        None => Ok(AnalyticsConfig::default()),
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text =
        fs::read_to_string(path).with_context(|| format!("read input file {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parse JSON in {}", path.display()))
}

fn ticker_from_path(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_uppercase())
        .unwrap_or_else(|| "SYMBOL".to_string())
}
