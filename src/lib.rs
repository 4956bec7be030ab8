// ============================================================================
// Discrete Auction Library
// Clearing price and volume for a call double auction
// ============================================================================

//! # Discrete Auction
//!
//! Finds the single price at which the largest quantity of a security can
//! change hands in a call (discrete) double auction, respecting the limit
//! price of every order.
//!
//! ## Features
//!
//! - **Exact prices**: limits are integer currency subunits, never floats
//! - **O(n log n) clearing** over cumulative supply/demand curves
//! - **Pluggable clearing algorithm** and **event handler** seams
//! - **Best-effort ingestion**: malformed order lines are skipped
//!
//! ## Example
//!
//! ```rust
//! use discrete_auction::prelude::*;
//! use std::sync::Arc;
//!
//! let auction = DiscreteAuction::new(
//!     AuctionConfig::default(),
//!     Box::new(CumulativeCurveMatcher::new()),
//!     Arc::new(NoOpEventHandler),
//! );
//!
//! // Prices are in subunits: 1500 == 15.00
//! let sells = [Order::sell(5, 1000), Order::sell(5, 1200)];
//! let buys = [Order::buy(3, 1100)];
//!
//! let result = auction.clear(&sells, &buys);
//! assert_eq!(result.quantity(), 3);
//! assert_eq!(result.to_string(), "3 10.50");
//! ```

pub mod domain;
pub mod engine;
pub mod ingest;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        AuctionConfig, AuctionId, AuctionResult, BuyCurve, CurvePoint, Order, SellCurve, Side,
    };
    pub use crate::engine::{
        create_from_config, AuctionCurves, CumulativeCurveMatcher, DiscreteAuction,
        DiscreteAuctionBuilder,
    };
    pub use crate::ingest::{read_orders, OrderBatch};
    pub use crate::interfaces::{
        AuctionEvent, ClearingAlgorithm, EventHandler, LoggingEventHandler, NoOpEventHandler,
        RecordingEventHandler,
    };
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use crate::numeric::Quantity;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;
    use std::io::Cursor;

    fn run(input: &str) -> String {
        let auction = DiscreteAuction::default();
        let batch = auction.read(Cursor::new(input)).unwrap();
        auction.clear_batch(&batch).to_string()
    }

    #[test]
    fn test_end_to_end_single_pair() {
        assert_eq!(run("S 10 15.00\nB 10 20.00\n"), "10 17.50");
    }

    #[test]
    fn test_end_to_end_partial_demand() {
        assert_eq!(run("S 5 10.00\nS 5 12.00\nB 3 11.00\n"), "3 10.50");
    }

    #[test]
    fn test_end_to_end_empty_sides() {
        assert_eq!(run(""), "0 n/a");
        assert_eq!(run("S 10 15.00\nS 3 16.00\n"), "0 n/a");
        assert_eq!(run("B 10 15.00\n"), "0 n/a");
        assert_eq!(run("garbage\nB 10 15.00\nS 10 abc\n"), "0 n/a");
    }

    #[test]
    fn test_end_to_end_mixed_input() {
        let input = "\
S 100 15.40
S 50 15.20
B 70 15.30
S 30 15.20
B 80 15.50
B 20 15.30
garbage line
B 10 14.00
S 40 16.00
S 5 0.50
B 1001 15.30
";
        // Sells 80 @ 15.20, 100 @ 15.40; buys 80 @ 15.50, 90 @ 15.30.
        // Both 15.40/15.50 and 15.20/15.30 reach 80, mean 15.35.
        assert_eq!(run(input), "80 15.35");
    }

    #[test]
    fn test_concurrent_runs_share_nothing() {
        let auction = &DiscreteAuction::default();
        let sells: &[Order] = &[Order::sell(4, 1000), Order::sell(4, 1100)];
        let buys: &[Order] = &[Order::buy(4, 1200), Order::buy(4, 1050)];

        let results: Vec<AuctionResult> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(move || auction.clear(sells, buys)))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert!(results.iter().all(|r| r.to_string() == "4 10.88"));
    }

    /// Same scan rule as the matcher, computed straight from raw orders in
    /// O(distinct prices * n)
    fn reference_clear(sells: &[Order], buys: &[Order]) -> AuctionResult {
        let mut sell_prices: Vec<u64> = sells.iter().map(|o| o.price).collect();
        sell_prices.sort_unstable();
        sell_prices.dedup();

        let mut best: Quantity = 0;
        let mut optimal = Vec::new();

        for &sell_price in sell_prices.iter().rev() {
            let Some(buy_price) = buys
                .iter()
                .map(|o| o.price)
                .filter(|&p| p >= sell_price)
                .min()
            else {
                continue;
            };

            let sold: Quantity = sells
                .iter()
                .filter(|o| o.price <= sell_price)
                .map(|o| o.quantity)
                .sum();
            let bought: Quantity = buys
                .iter()
                .filter(|o| o.price >= buy_price)
                .map(|o| o.quantity)
                .sum();

            let quantity = sold.min(bought);
            if quantity >= best {
                if quantity > best {
                    optimal.clear();
                    best = quantity;
                }
                optimal.push(sell_price);
                optimal.push(buy_price);
            }
        }

        AuctionResult::from_optimal_prices(best, &optimal)
    }

    fn synthetic_orders(seed: u64, count: usize) -> OrderBatch {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        (0..count)
            .map(|_| {
                let side = if rng.gen_bool(0.5) {
                    Side::Sell
                } else {
                    Side::Buy
                };
                Order::new(side, rng.gen_range(1..=1_000), rng.gen_range(1_000..=1_500))
            })
            .collect()
    }

    #[test]
    fn test_large_dataset_matches_reference() {
        for seed in [7, 42, 2024] {
            let batch = synthetic_orders(seed, 20_000);
            let auction = DiscreteAuction::default();

            let result = auction.clear_batch(&batch);

            assert!(result.is_deal());
            assert_eq!(result, reference_clear(&batch.sells, &batch.buys));
        }
    }

    #[test]
    fn test_large_dataset_from_text() {
        let batch = synthetic_orders(99, 50_000);
        let text: String = batch
            .sells
            .iter()
            .chain(batch.buys.iter())
            .map(|o| format!("{} {} {}.{:02}\n", o.side, o.quantity, o.price / 100, o.price % 100))
            .collect();

        let auction = DiscreteAuction::default();
        let parsed = auction.read(Cursor::new(text)).unwrap();

        assert_eq!(parsed, batch);
        assert_eq!(
            auction.clear_batch(&parsed),
            reference_clear(&batch.sells, &batch.buys)
        );
    }
}
