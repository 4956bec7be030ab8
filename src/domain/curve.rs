// ============================================================================
// Cumulative Supply / Demand Curves
// ============================================================================

use crate::numeric::{PriceSubunits, Quantity};
use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One step of a cumulative curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CurvePoint {
    pub price: PriceSubunits,
    /// Total quantity tradable at this price or better for the counterparty
    pub cumulative_quantity: Quantity,
}

impl CurvePoint {
    pub fn new(price: PriceSubunits, cumulative_quantity: Quantity) -> Self {
        Self {
            price,
            cumulative_quantity,
        }
    }
}

// ============================================================================
// Sell Curve
// ============================================================================

/// Supply curve: strictly ascending prices, each carrying the quantity
/// sellable at or below that price.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SellCurve {
    points: Vec<CurvePoint>,
}

impl SellCurve {
    /// Build from `(price, quantity)` levels sorted by ascending price.
    pub(crate) fn from_ascending_levels(
        levels: impl IntoIterator<Item = (PriceSubunits, Quantity)>,
    ) -> Self {
        let mut cumulative: Quantity = 0;
        let points = levels
            .into_iter()
            .map(|(price, quantity)| {
                cumulative = cumulative.saturating_add(quantity);
                CurvePoint::new(price, cumulative)
            })
            .collect();

        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points in ascending price order
    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CurvePoint> {
        self.points.iter()
    }

    /// Lowest ask
    pub fn best_price(&self) -> Option<PriceSubunits> {
        self.points.first().map(|point| point.price)
    }

    /// Total quantity offered at or below `price`
    pub fn quantity_at(&self, price: PriceSubunits) -> Quantity {
        let idx = self.points.partition_point(|point| point.price <= price);
        idx.checked_sub(1)
            .map(|i| self.points[i].cumulative_quantity)
            .unwrap_or(0)
    }
}

// ============================================================================
// Buy Curve
// ============================================================================

/// Demand curve keyed by price: each key maps to the quantity of all buy
/// orders with a limit at or above it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BuyCurve {
    levels: BTreeMap<PriceSubunits, Quantity>,
}

impl BuyCurve {
    /// Build from `(price, quantity)` levels sorted by descending price.
    pub(crate) fn from_descending_levels(
        levels: impl IntoIterator<Item = (PriceSubunits, Quantity)>,
    ) -> Self {
        let mut cumulative: Quantity = 0;
        let levels = levels
            .into_iter()
            .map(|(price, quantity)| {
                cumulative = cumulative.saturating_add(quantity);
                (price, cumulative)
            })
            .collect();

        Self { levels }
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Highest bid
    pub fn best_price(&self) -> Option<PriceSubunits> {
        self.levels.keys().next_back().copied()
    }

    /// Smallest stored price greater than or equal to `price`, O(log n)
    pub fn ceiling(&self, price: PriceSubunits) -> Option<CurvePoint> {
        self.levels
            .range(price..)
            .next()
            .map(|(&price, &cumulative_quantity)| CurvePoint::new(price, cumulative_quantity))
    }

    /// Total quantity bid at or above `price`
    pub fn quantity_at(&self, price: PriceSubunits) -> Quantity {
        self.ceiling(price)
            .map(|point| point.cumulative_quantity)
            .unwrap_or(0)
    }

    /// Points in ascending price order
    pub fn points(&self) -> impl DoubleEndedIterator<Item = CurvePoint> + '_ {
        self.levels
            .iter()
            .map(|(&price, &cumulative_quantity)| CurvePoint::new(price, cumulative_quantity))
    }
}
