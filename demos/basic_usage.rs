// ============================================================================
// Basic Usage Example
// ============================================================================

use discrete_auction::prelude::*;
use std::fs::File;
use std::io::{BufReader, Cursor};
use std::sync::Arc;

const SAMPLE_ORDERS: &str = "\
S 100 15.40
S 50 15.20
B 70 15.30
S 30 15.20
B 80 15.50
B 20 15.30
garbage line
B 10 14.00
S 40 16.00
";

fn main() -> std::io::Result<()> {
    println!("=== Discrete Auction Example ===\n");

    let handler = Arc::new(RecordingEventHandler::new());
    let auction = DiscreteAuctionBuilder::new()
        .with_max_orders(10_000)
        .build(handler.clone())
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidInput, err))?;

    // Order file from the first argument, or the built-in sample
    let batch = match std::env::args().nth(1) {
        Some(path) => {
            println!("Reading orders from {}", path);
            auction.read(BufReader::new(File::open(path)?))?
        },
        None => {
            println!("Reading built-in sample orders");
            auction.read(Cursor::new(SAMPLE_ORDERS))?
        },
    };

    println!(
        "Accepted {} sell and {} buy orders\n",
        batch.sells.len(),
        batch.buys.len()
    );

    // Curves as the matcher sees them
    let curves = AuctionCurves::build(&batch.sells, &batch.buys);

    println!("Supply (cumulative, ascending):");
    for point in curves.sell.iter() {
        println!("  {:>8} @ {}", point.cumulative_quantity, point.price);
    }

    println!("\nDemand (cumulative, ascending):");
    for point in curves.buy.points() {
        println!("  {:>8} @ {}", point.cumulative_quantity, point.price);
    }

    let result = auction.clear_batch(&batch);

    println!("\nEvents generated:");
    for event in handler.take() {
        match event {
            AuctionEvent::OrdersReceived { sell_orders, buy_orders, .. } => {
                println!("  Orders received: {} sell, {} buy", sell_orders, buy_orders);
            },
            AuctionEvent::CurvesBuilt { sell_levels, buy_levels, .. } => {
                println!("  Curves built: {} sell, {} buy levels", sell_levels, buy_levels);
            },
            AuctionEvent::Cleared { quantity, price, .. } => {
                println!("  Cleared {} @ {:.2}", quantity, price);
            },
            AuctionEvent::NoDeal { .. } => println!("  No deal"),
        }
    }

    println!("\nResult: {}", result);

    Ok(())
}
