// ============================================================================
// Auction Configuration
// Acceptable order values and input limits
// ============================================================================

use crate::numeric::{PriceSubunits, Quantity};
use std::ops::RangeInclusive;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default number of input lines considered per auction
pub const DEFAULT_MAX_ORDERS: usize = 1_000_000;

/// Default acceptable order quantity
pub const DEFAULT_QUANTITY_RANGE: RangeInclusive<Quantity> = 1..=1_000;

/// Default acceptable price, in subunits (1.00 - 100.00)
pub const DEFAULT_PRICE_RANGE: RangeInclusive<PriceSubunits> = 100..=10_000;

/// Configuration for one discrete auction
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AuctionConfig {
    /// Quantities outside this range are discarded at ingestion
    pub quantity_range: RangeInclusive<Quantity>,

    /// Prices (subunits) outside this range are discarded at ingestion
    pub price_range: RangeInclusive<PriceSubunits>,

    /// Maximum number of input lines read; the rest is ignored
    pub max_orders: usize,
}

impl AuctionConfig {
    /// Create a new configuration with required parameters
    pub fn new(
        quantity_range: RangeInclusive<Quantity>,
        price_range: RangeInclusive<PriceSubunits>,
    ) -> Self {
        Self {
            quantity_range,
            price_range,
            max_orders: DEFAULT_MAX_ORDERS,
        }
    }

    /// Builder method: Set the maximum number of input lines
    pub fn with_max_orders(mut self, max_orders: usize) -> Self {
        self.max_orders = max_orders;
        self
    }

    /// Builder method: Set the acceptable quantity range
    pub fn with_quantity_range(mut self, range: RangeInclusive<Quantity>) -> Self {
        self.quantity_range = range;
        self
    }

    /// Builder method: Set the acceptable price range (subunits)
    pub fn with_price_range(mut self, range: RangeInclusive<PriceSubunits>) -> Self {
        self.price_range = range;
        self
    }

    pub fn accepts_quantity(&self, quantity: Quantity) -> bool {
        self.quantity_range.contains(&quantity)
    }

    pub fn accepts_price(&self, price: PriceSubunits) -> bool {
        self.price_range.contains(&price)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.quantity_range.is_empty() {
            return Err("Quantity range cannot be empty".to_string());
        }

        if *self.quantity_range.start() == 0 {
            return Err("Quantity range must exclude zero".to_string());
        }

        if self.price_range.is_empty() {
            return Err("Price range cannot be empty".to_string());
        }

        if self.max_orders == 0 {
            return Err("Maximum order count must be positive".to_string());
        }

        // Cumulative curve volumes are summed in u64
        if (self.max_orders as u64)
            .checked_mul(*self.quantity_range.end())
            .is_none()
        {
            return Err("Maximum order count times maximum quantity overflows".to_string());
        }

        Ok(())
    }
}

impl Default for AuctionConfig {
    fn default() -> Self {
        Self::new(DEFAULT_QUANTITY_RANGE, DEFAULT_PRICE_RANGE)
    }
}
