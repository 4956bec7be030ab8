// ============================================================================
// Cumulative Curve Matcher
// Finds the price that maximizes the volume changing hands
// ============================================================================

use crate::domain::{AuctionResult, BuyCurve, SellCurve};
use crate::interfaces::ClearingAlgorithm;
use crate::numeric::{PriceSubunits, Quantity};
use smallvec::SmallVec;

/// Volume-maximizing matcher over cumulative curves
///
/// Walks the sell curve from the highest price down. For every sell price
/// the demand curve's ceiling entry gives the best buy price still willing
/// to trade and the volume bid at or above it. The tradable volume is the
/// smaller of the two cumulative quantities.
///
/// Every (sell price, buy price) pair reaching the maximum volume is kept,
/// and the clearing price is their two-stage rounded mean (see
/// [`crate::numeric::clearing_price`]).
///
/// # Example
/// ```text
/// Sells: 4 @ 10.00, 4 @ 11.00     Buys: 4 @ 12.00, 4 @ 10.50
///
/// 11.00 -> ceiling 12.00 (4 bid)  volume min(8, 4) = 4
/// 10.00 -> ceiling 10.50 (8 bid)  volume min(4, 8) = 4
///
/// Result: 4 @ mean(1100, 1200, 1000, 1050) = 10.88
/// ```
///
/// Runs in O(n log n): one pass over the sell curve, one O(log n) ceiling
/// lookup per step.
#[derive(Debug, Clone, Copy, Default)]
pub struct CumulativeCurveMatcher;

impl CumulativeCurveMatcher {
    pub fn new() -> Self {
        Self
    }
}

impl ClearingAlgorithm for CumulativeCurveMatcher {
    fn clear(&self, sell_curve: &SellCurve, buy_curve: &BuyCurve) -> AuctionResult {
        match_curves(sell_curve, buy_curve)
    }

    fn name(&self) -> &str {
        "CumulativeCurve"
    }
}

/// Scan both curves for the maximum tradable volume
pub fn match_curves(sell_curve: &SellCurve, buy_curve: &BuyCurve) -> AuctionResult {
    if sell_curve.is_empty() || buy_curve.is_empty() {
        return AuctionResult::NoDeal;
    }

    let mut best_quantity: Quantity = 0;
    let mut optimal_prices: SmallVec<[PriceSubunits; 8]> = SmallVec::new();

    // Descending scan, so no second sort is needed
    for sell in sell_curve.iter().rev() {
        let Some(buy) = buy_curve.ceiling(sell.price) else {
            continue;
        };

        let quantity = sell.cumulative_quantity.min(buy.cumulative_quantity);
        if quantity >= best_quantity {
            if quantity > best_quantity {
                optimal_prices.clear();
                best_quantity = quantity;
            }
            optimal_prices.push(sell.price);
            optimal_prices.push(buy.price);
        }
    }

    AuctionResult::from_optimal_prices(best_quantity, &optimal_prices)
}
