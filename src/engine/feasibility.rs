// ============================================================================
// Feasibility Filter
// Discards orders that can never trade against the best opposing price
// ============================================================================

use crate::domain::{Order, Side};
use crate::numeric::PriceSubunits;

/// Whether `order` could be filled against the best opposing price.
///
/// `threshold_price` is the highest buy price when filtering sells and the
/// lowest sell price when filtering buys.
#[inline]
pub fn is_feasible(order: &Order, threshold_price: PriceSubunits) -> bool {
    match order.side {
        Side::Sell => order.price <= threshold_price,
        Side::Buy => order.price >= threshold_price,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sell_feasible_up_to_best_bid() {
        assert!(is_feasible(&Order::sell(1, 1000), 1100));
        assert!(is_feasible(&Order::sell(1, 1100), 1100));
        assert!(!is_feasible(&Order::sell(1, 1101), 1100));
    }

    #[test]
    fn test_buy_feasible_down_to_best_ask() {
        assert!(is_feasible(&Order::buy(1, 1200), 1100));
        assert!(is_feasible(&Order::buy(1, 1100), 1100));
        assert!(!is_feasible(&Order::buy(1, 1099), 1100));
    }
}
