// ============================================================================
// Auction Result Domain Model
// ============================================================================

use crate::numeric::{clearing_price, format_price, PriceSubunits, Quantity};
use rust_decimal::Decimal;
use std::fmt;
use uuid::Uuid;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rendering of a result without a trade
pub const NO_DEAL: &str = "0 n/a";

/// Identifier of one clearing run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AuctionId(Uuid);

impl AuctionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for AuctionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AuctionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Outcome of a discrete auction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AuctionResult {
    /// No price lets any quantity change hands
    NoDeal,

    /// Maximum tradable volume and the single clearing price
    Deal {
        quantity: Quantity,
        /// Currency amount with two fractional digits
        price: Decimal,
    },
}

impl AuctionResult {
    /// Build a result from the best volume and every price tied for it.
    ///
    /// Zero volume or an empty price list yields `NoDeal`.
    pub fn from_optimal_prices(quantity: Quantity, optimal_prices: &[PriceSubunits]) -> Self {
        if quantity == 0 {
            return AuctionResult::NoDeal;
        }

        match clearing_price(optimal_prices) {
            Some(price) => AuctionResult::Deal { quantity, price },
            None => AuctionResult::NoDeal,
        }
    }

    /// Matched volume; zero when there is no deal
    pub fn quantity(&self) -> Quantity {
        match self {
            AuctionResult::NoDeal => 0,
            AuctionResult::Deal { quantity, .. } => *quantity,
        }
    }

    /// Clearing price; absent when there is no deal
    pub fn price(&self) -> Option<Decimal> {
        match self {
            AuctionResult::NoDeal => None,
            AuctionResult::Deal { price, .. } => Some(*price),
        }
    }

    pub fn is_deal(&self) -> bool {
        matches!(self, AuctionResult::Deal { .. })
    }
}

impl fmt::Display for AuctionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuctionResult::NoDeal => f.write_str(NO_DEAL),
            AuctionResult::Deal { quantity, price } => {
                write!(f, "{} {}", quantity, format_price(*price))
            },
        }
    }
}
