//! Libscrape replay tool
//!
//! Runs a captured hold or checkout listing through the parser with the
//! configured rule tables and prints the records as JSON or as the patron
//! text report.

use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use libscrape::{
    config::{AppConfig, LoggingConfig},
    report, Capture, LibraryParser,
};

/// Command-line arguments for libscrape
#[derive(Parser, Debug)]
#[command(name = "libscrape")]
#[command(about = "Replay captured library listings through the hold/checkout parser")]
#[command(version)]
struct Args {
    /// Capture file (JSON) with the raw scraped items
    capture: PathBuf,

    /// Retrieval date (YYYY-MM-DD); defaults to the capture's date, then today
    #[arg(short, long)]
    date: Option<NaiveDate>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    output: OutputFormat,

    /// Directory holding default.toml and <RUN_MODE>.toml
    #[arg(long, default_value = "config")]
    config_dir: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
    let config = AppConfig::load_from(&args.config_dir, &run_mode)
        .context("Failed to load configuration")?;

    let _guard = init_tracing(&config.logging);

    tracing::info!("Starting libscrape v{}", env!("CARGO_PKG_VERSION"));

    let capture = Capture::from_file(&args.capture)
        .with_context(|| format!("Failed to read capture {}", args.capture.display()))?;

    let date_retrieved = args
        .date
        .or(capture.date_retrieved)
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    tracing::info!(
        "Replaying {} {} items from {} (retrieved {})",
        capture.items.len(),
        capture.kind,
        capture.system,
        date_retrieved
    );

    let parser = LibraryParser::with_rules(Arc::new(config.rules.clone()), date_retrieved);
    let items = parser.parse_batch(&capture.items, capture.kind, capture.system);

    match args.output {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&items)?);
        }
        OutputFormat::Text => {
            let text = report::report(
                capture.system,
                capture.kind,
                date_retrieved,
                &items,
                &config.report.style(),
            );
            println!("{}", text);
        }
    }

    Ok(())
}

/// Install the global subscriber.
///
/// Console output goes to stderr so stdout carries only the parsed records.
/// The returned guard must live until exit or buffered file lines are lost.
fn init_tracing(logging: &LoggingConfig) -> Option<WorkerGuard> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("libscrape={}", logging.level).into());

    let (file_layer, guard) = match &logging.directory {
        Some(directory) => {
            let appender = tracing_appender::rolling::daily(directory, "libscrape.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let registry = tracing_subscriber::registry().with(filter).with(file_layer);

    match logging.format.as_str() {
        "json" => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        _ => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }

    guard
}
