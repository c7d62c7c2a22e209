// scripts/forecast.rs
//! gbm-forecast CLI
//!
//! Runs one simulated forecast and prints it with the ticker's mocked
//! fundamentals:
//!
//! ```text
//! gbm-forecast --ticker AAPL --price 189.5 --annual-return 12 --annual-volatility 30
//! gbm-forecast --seed 42 --start-date 2024-06-13 --format json
//! ```

use chrono::{Local, NaiveDate};
use clap::{Parser, ValueEnum};
use gbm_forecast::analytics::gbm_analytic;
use gbm_forecast::error::{ForecastError, ForecastResult};
use gbm_forecast::forecast::forecast_engine::{
    ForecastConfig, ForecastEngine, DEFAULT_FORECAST_DAYS, TRADING_DAYS_PER_YEAR,
};
use gbm_forecast::fundamentals;
use gbm_forecast::input::{
    ForecastRequest, DEFAULT_ANNUAL_RETURN_PCT, DEFAULT_ANNUAL_VOLATILITY_PCT,
    DEFAULT_INITIAL_PRICE, DEFAULT_TICKER,
};
use gbm_forecast::math_utils::Timer;
use gbm_forecast::output;
use gbm_forecast::rng::NormalVariateGenerator;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

/// Simulated stock price forecast (GBM model). Weekends are excluded.
#[derive(Parser)]
#[command(name = "gbm-forecast")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Ticker symbol, used for the fundamentals panel and the table header
    #[arg(short, long, default_value = DEFAULT_TICKER)]
    ticker: String,

    /// Starting price
    #[arg(short, long, default_value_t = DEFAULT_INITIAL_PRICE)]
    price: f64,

    /// Annual return (drift) in percent
    #[arg(short = 'r', long, default_value_t = DEFAULT_ANNUAL_RETURN_PCT, allow_hyphen_values = true)]
    annual_return: f64,

    /// Annual volatility in percent
    #[arg(short = 'v', long, default_value_t = DEFAULT_ANNUAL_VOLATILITY_PCT)]
    annual_volatility: f64,

    /// Number of trading days to simulate
    #[arg(short, long, default_value_t = DEFAULT_FORECAST_DAYS)]
    days: usize,

    /// Annualisation constant for the daily time step
    #[arg(long, default_value_t = TRADING_DAYS_PER_YEAR)]
    trading_days_per_year: f64,

    /// First date of the simulation (YYYY-MM-DD); the forecast starts the next trading day
    #[arg(short = 's', long)]
    start_date: Option<String>,

    /// Seed for a reproducible path
    #[arg(long)]
    seed: Option<u64>,

    /// Add a model confidence range column at this level, e.g. 0.9
    #[arg(long)]
    band: Option<f64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Enable verbose output
    #[arg(long)]
    verbose: bool,
}

fn parse_start_date(raw: Option<&str>) -> ForecastResult<NaiveDate> {
    match raw {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| ForecastError::InvalidDate {
            input: s.to_string(),
            reason: e.to_string(),
        }),
        None => Ok(Local::now().date_naive()),
    }
}

fn run(cli: Cli) -> ForecastResult<()> {
    let request = ForecastRequest {
        ticker: cli.ticker,
        initial_price: cli.price,
        annual_return_pct: cli.annual_return,
        annual_volatility_pct: cli.annual_volatility,
    };
    let (ticker, params) = request.validate()?;

    let config = ForecastConfig {
        days: cli.days,
        trading_days_per_year: cli.trading_days_per_year,
        ..Default::default()
    };
    let engine = ForecastEngine::new(config)?;
    let start_date = parse_start_date(cli.start_date.as_deref())?;

    let mut generator = match cli.seed {
        Some(seed) => NormalVariateGenerator::from_seed(seed),
        None => NormalVariateGenerator::from_entropy(),
    };

    let timer = Timer::new();
    let path = engine.generate(&params, &ticker, start_date, &mut generator);
    info!(elapsed_ms = timer.elapsed_ms(), "simulation finished");

    let bands = match cli.band {
        Some(level) => Some(gbm_analytic::daily_confidence_bands(
            params.initial_price,
            params.annual_drift,
            params.annual_volatility,
            engine.config().dt(),
            path.len(),
            level,
        )?),
        None => None,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        OutputFormat::Table => {
            output::render_fundamentals(&mut out, &fundamentals::lookup(&ticker))?;
            writeln!(out)?;
            output::render_forecast_table(&mut out, &path, bands.as_deref())?;
        }
        OutputFormat::Json => output::render_json(&mut out, &path)?,
    }
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
