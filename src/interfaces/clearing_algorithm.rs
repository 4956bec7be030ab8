// ============================================================================
// Clearing Algorithm Interface
// Defines the contract for pluggable clearing algorithms
// ============================================================================

use crate::domain::{AuctionResult, BuyCurve, SellCurve};
use crate::numeric::PriceSubunits;

/// Strategy pattern interface for clearing a discrete auction
/// Implementations: CumulativeCurveMatcher
pub trait ClearingAlgorithm: Send + Sync {
    /// Find the volume-maximizing price for a pair of cumulative curves
    ///
    /// # Arguments
    /// * `sell_curve` - Cumulative supply, ascending by price
    /// * `buy_curve` - Cumulative demand, keyed by price
    ///
    /// # Returns
    /// The matched volume and clearing price, or `NoDeal`
    fn clear(&self, sell_curve: &SellCurve, buy_curve: &BuyCurve) -> AuctionResult;

    /// Get the algorithm name for logging/metrics
    fn name(&self) -> &str;

    /// Optional: Check if a sell price and a buy price can trade
    fn prices_cross(&self, sell_price: PriceSubunits, buy_price: PriceSubunits) -> bool {
        sell_price <= buy_price
    }
}
