// ============================================================================
// Curve Builder
// Filters, aggregates and accumulates raw orders into supply/demand curves
// ============================================================================

use super::feasibility::is_feasible;
use crate::domain::{BuyCurve, Order, SellCurve, Side};
use crate::numeric::{PriceSubunits, Quantity};
use std::collections::BTreeMap;

/// Both cumulative curves of one auction run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuctionCurves {
    pub sell: SellCurve,
    pub buy: BuyCurve,
}

impl AuctionCurves {
    /// Build both curves from the raw order lists.
    ///
    /// Sells are filtered against the highest buy price and buys against the
    /// lowest sell price. If either side is empty both curves are empty.
    pub fn build(sells: &[Order], buys: &[Order]) -> Self {
        let best_sell = best_price(sells, Side::Sell);
        let best_buy = best_price(buys, Side::Buy);

        match (best_sell, best_buy) {
            (Some(best_sell), Some(best_buy)) => Self {
                sell: build_sell_curve(sells, best_buy),
                buy: build_buy_curve(buys, best_sell),
            },
            _ => Self::default(),
        }
    }

    /// True when no trade is possible
    pub fn is_empty(&self) -> bool {
        self.sell.is_empty() || self.buy.is_empty()
    }
}

/// Lowest ask or highest bid among `orders` of the given side
pub fn best_price(orders: &[Order], side: Side) -> Option<PriceSubunits> {
    let prices = orders
        .iter()
        .filter(|order| order.side == side)
        .map(|order| order.price);

    match side {
        Side::Sell => prices.min(),
        Side::Buy => prices.max(),
    }
}

/// Supply curve from sell orders that do not exceed `best_buy_price`
pub fn build_sell_curve(sells: &[Order], best_buy_price: PriceSubunits) -> SellCurve {
    SellCurve::from_ascending_levels(aggregate(sells, Side::Sell, best_buy_price))
}

/// Demand curve from buy orders that are not below `best_sell_price`
pub fn build_buy_curve(buys: &[Order], best_sell_price: PriceSubunits) -> BuyCurve {
    BuyCurve::from_descending_levels(aggregate(buys, Side::Buy, best_sell_price).into_iter().rev())
}

/// Sum the quantities of feasible orders sharing a price
fn aggregate(
    orders: &[Order],
    side: Side,
    threshold_price: PriceSubunits,
) -> BTreeMap<PriceSubunits, Quantity> {
    let mut levels: BTreeMap<PriceSubunits, Quantity> = BTreeMap::new();

    for order in orders
        .iter()
        .filter(|order| order.side == side && is_feasible(order, threshold_price))
    {
        let level = levels.entry(order.price).or_insert(0);
        *level = level.saturating_add(order.quantity);
    }

    levels
}
