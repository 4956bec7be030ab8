use anyhow::Context;
use clap::{Parser, ValueEnum};
use discrete_auction::domain::config::{
    DEFAULT_MAX_ORDERS, DEFAULT_PRICE_RANGE, DEFAULT_QUANTITY_RANGE,
};
use discrete_auction::prelude::*;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::Level;

/// Clear a discrete (call) double auction
///
/// Each input line is `<S|B> <quantity> <price>`, e.g. `S 100 15.30`.
/// Lines that do not match are skipped.
#[derive(Parser)]
#[command(name = "discrete-auction", version, about)]
struct Cli {
    /// Order file; reads stdin when omitted
    input: Option<PathBuf>,

    /// Number of input lines considered; later lines are ignored
    #[arg(long, default_value_t = DEFAULT_MAX_ORDERS)]
    max_orders: usize,

    /// Largest accepted order quantity
    #[arg(long, default_value_t = *DEFAULT_QUANTITY_RANGE.end())]
    max_quantity: u64,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// `<quantity> <price>` or `0 n/a`
    Text,
    /// Serialized result
    Json,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let event_handler: Arc<dyn EventHandler> = if cli.verbose > 0 {
        Arc::new(LoggingEventHandler)
    } else {
        Arc::new(NoOpEventHandler)
    };

    let auction = DiscreteAuctionBuilder::new()
        .with_max_orders(cli.max_orders)
        .with_quantity_range(*DEFAULT_QUANTITY_RANGE.start()..=cli.max_quantity)
        .with_price_range(DEFAULT_PRICE_RANGE)
        .build(event_handler)
        .map_err(anyhow::Error::msg)
        .context("invalid auction configuration")?;

    let batch = match &cli.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("cannot open {}", path.display()))?;
            auction.read(BufReader::new(file))
        },
        None => auction.read(io::stdin().lock()),
    }
    .context("failed to read orders")?;

    let result = auction.clear_batch(&batch);

    match cli.format {
        OutputFormat::Text => println!("{}", result),
        OutputFormat::Json => println!("{}", serde_json::to_string(&result)?),
    }

    Ok(())
}
