// ============================================================================
// Order Domain Model
// ============================================================================

use crate::numeric::{PriceSubunits, Quantity};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Value Objects
// ============================================================================

/// Side of the auction an order belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Side {
    Sell,
    Buy,
}

impl Side {
    /// Returns the opposite side
    pub fn opposite(self) -> Self {
        match self {
            Side::Sell => Side::Buy,
            Side::Buy => Side::Sell,
        }
    }

    /// Single-letter tag used in order files
    pub fn tag(self) -> &'static str {
        match self {
            Side::Sell => "S",
            Side::Buy => "B",
        }
    }
}

impl FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "S" => Ok(Side::Sell),
            "B" => Ok(Side::Buy),
            other => Err(format!("unknown order side: `{}`", other)),
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

// ============================================================================
// Order Entity
// ============================================================================

/// Immutable limit order taking part in one auction run.
///
/// The price is kept in currency subunits so that two prices compare
/// exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Order {
    pub side: Side,
    pub quantity: Quantity,
    pub price: PriceSubunits,
}

impl Order {
    pub fn new(side: Side, quantity: Quantity, price: PriceSubunits) -> Self {
        Self {
            side,
            quantity,
            price,
        }
    }

    pub fn sell(quantity: Quantity, price: PriceSubunits) -> Self {
        Self::new(Side::Sell, quantity, price)
    }

    pub fn buy(quantity: Quantity, price: PriceSubunits) -> Self {
        Self::new(Side::Buy, quantity, price)
    }

    /// Orders are ranked by limit price alone.
    pub fn cmp_price(&self, other: &Self) -> Ordering {
        self.price.cmp(&other.price)
    }

    pub fn is_sell(&self) -> bool {
        matches!(self.side, Side::Sell)
    }

    pub fn is_buy(&self) -> bool {
        matches!(self.side, Side::Buy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_creation() {
        let order = Order::sell(10, 1500);

        assert_eq!(order.side, Side::Sell);
        assert_eq!(order.quantity, 10);
        assert_eq!(order.price, 1500);
        assert!(order.is_sell());
        assert!(!order.is_buy());
    }

    #[test]
    fn test_price_ordering_ignores_side_and_quantity() {
        let cheap = Order::buy(1_000, 1000);
        let dear = Order::sell(1, 1200);

        assert_eq!(cheap.cmp_price(&dear), Ordering::Less);
        assert_eq!(dear.cmp_price(&cheap), Ordering::Greater);
        assert_eq!(
            Order::sell(5, 1100).cmp_price(&Order::buy(7, 1100)),
            Ordering::Equal
        );
    }

    #[test]
    fn test_side_tags() {
        assert_eq!("S".parse::<Side>(), Ok(Side::Sell));
        assert_eq!("B".parse::<Side>(), Ok(Side::Buy));
        assert!("s".parse::<Side>().is_err());
        assert!("X".parse::<Side>().is_err());
        assert_eq!(Side::Buy.to_string(), "B");
        assert_eq!(Side::Sell.opposite(), Side::Buy);
    }
}
