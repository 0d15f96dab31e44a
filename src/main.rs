// Standard library imports
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

// External crate imports
use anyhow::{Context, Result};
use clap::Parser;
use dotenv::dotenv;
use log::{error, info, warn};
use serde_json::Value;

// Internal crate imports
use order_normalizer::config_loader::AppConfig;
use order_normalizer::domain::traits::CommonOrder;
use order_normalizer::infrastructure::exchange::OrderParser;

const DEFAULT_CONFIG_PATH: &str = "./config.toml";

/// Normalize exchange order payloads into vendor-neutral order views.
///
/// Input may be a single JSON object, a JSON array of orders, or a stream
/// of JSON values (one per line). One JSON line is printed per order.
#[derive(Debug, Parser)]
#[command(name = "order-normalizer", version)]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Exchange profile name, overrides the config file
    #[arg(short, long)]
    exchange: Option<String>,

    /// Print the fully decoded orders instead of the neutral views
    #[arg(long)]
    full: bool,

    /// Payload file; stdin when omitted
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    dotenv().ok();
    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_deref())?;
    if let Some(name) = &cli.exchange {
        config.exchange.name = name.clone();
    }

    // Use an explicit Builder so the config file decides the level
    env_logger::Builder::new()
        .filter_level(config.log_level_filter()?)
        .init();
    info!("Logger initialized");

    let parser = OrderParser::new(config.exchange_profile()?);
    info!(
        "Using {} order layout v{}",
        parser.profile().name(),
        parser.profile().version()
    );

    let input = read_input(cli.input.as_deref())?;
    let count = normalize(&parser, &input, cli.full, &mut io::stdout().lock())?;

    info!("Normalized {} orders", count);
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    match path {
        Some(path) => AppConfig::from_file(path),
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => AppConfig::from_file(DEFAULT_CONFIG_PATH),
        None => Ok(AppConfig::default()),
    }
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file '{}'", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

/// Parses every payload in `input` and writes one JSON line per order.
fn normalize<W: Write>(parser: &OrderParser, input: &str, full: bool, out: &mut W) -> Result<usize> {
    let mut count = 0;

    for (index, payload) in serde_json::Deserializer::from_str(input)
        .into_iter::<Value>()
        .enumerate()
    {
        let payload = payload.with_context(|| format!("Payload {} is not valid JSON", index))?;

        let orders = match parser.parse_payload(&payload) {
            Ok(orders) => orders,
            Err(e) => {
                error!("Rejected payload {}: {}", index, e);
                return Err(e.into());
            }
        };
        if orders.is_empty() {
            warn!("Payload {} contained no orders", index);
        }

        for order in &orders {
            let line = if full {
                serde_json::to_string(order)?
            } else {
                serde_json::to_string(&order.project())?
            };
            writeln!(out, "{}", line)?;
            count += 1;
        }
    }

    Ok(count)
}
