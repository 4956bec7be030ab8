// ============================================================================
// Order Line Parser
// ============================================================================

use crate::domain::{AuctionConfig, Order, Side};
use crate::numeric::{parse_price, NumericError, PriceSubunits, Quantity};
use std::fmt;

/// Reasons an input line is not accepted as an order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Empty or whitespace-only line
    Blank,
    /// Line does not have exactly three fields
    FieldCount(usize),
    /// Side tag other than `S` or `B`
    UnknownSide(String),
    /// Quantity is not an unsigned integer
    InvalidQuantity(String),
    /// Price is not a non-negative decimal
    InvalidPrice(NumericError),
    /// Quantity outside the configured range
    QuantityOutOfRange(Quantity),
    /// Price (subunits) outside the configured range
    PriceOutOfRange(PriceSubunits),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Blank => write!(f, "blank line"),
            ParseError::FieldCount(count) => {
                write!(f, "expected 3 fields, found {}", count)
            },
            ParseError::UnknownSide(tag) => write!(f, "unknown order side `{}`", tag),
            ParseError::InvalidQuantity(text) => write!(f, "invalid quantity `{}`", text),
            ParseError::InvalidPrice(err) => write!(f, "invalid price: {}", err),
            ParseError::QuantityOutOfRange(quantity) => {
                write!(f, "quantity {} outside acceptable range", quantity)
            },
            ParseError::PriceOutOfRange(price) => {
                write!(f, "price {} subunits outside acceptable range", price)
            },
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::InvalidPrice(err) => Some(err),
            _ => None,
        }
    }
}

/// Parse one `<side> <quantity> <price>` line, e.g. `"S 100 15.30"`.
///
/// Fields are separated by runs of whitespace. A line starting with
/// whitespace has an empty first field and is rejected; trailing
/// whitespace is ignored. The side is `S` (sell) or `B` (buy), the
/// quantity an integer and the price a decimal currency amount.
/// Quantity and price must lie inside the ranges of `config`.
pub fn parse_order(line: &str, config: &AuctionConfig) -> Result<Order, ParseError> {
    let field_count = line.split_whitespace().count();
    if field_count == 0 {
        return Err(ParseError::Blank);
    }
    if line.starts_with(char::is_whitespace) {
        return Err(ParseError::FieldCount(field_count + 1));
    }

    let mut fields = line.split_whitespace();
    let (Some(side), Some(quantity), Some(price), None) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err(ParseError::FieldCount(field_count));
    };

    let side: Side = side
        .parse()
        .map_err(|_| ParseError::UnknownSide(side.to_string()))?;

    let quantity: Quantity = quantity
        .parse()
        .map_err(|_| ParseError::InvalidQuantity(quantity.to_string()))?;

    let price = parse_price(price).map_err(ParseError::InvalidPrice)?;

    if !config.accepts_quantity(quantity) {
        return Err(ParseError::QuantityOutOfRange(quantity));
    }
    if !config.accepts_price(price) {
        return Err(ParseError::PriceOutOfRange(price));
    }

    Ok(Order::new(side, quantity, price))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Result<Order, ParseError> {
        parse_order(line, &AuctionConfig::default())
    }

    #[test]
    fn test_parse_valid_lines() {
        assert_eq!(parse("S 100 15.30"), Ok(Order::sell(100, 1530)));
        assert_eq!(parse("B 1 1"), Ok(Order::buy(1, 100)));
        assert_eq!(parse("B\t1000   100.00"), Ok(Order::buy(1000, 10_000)));
        assert_eq!(parse("S 7 12.349"), Ok(Order::sell(7, 1234)));
    }

    #[test]
    fn test_blank_and_malformed_lines() {
        assert_eq!(parse(""), Err(ParseError::Blank));
        assert_eq!(parse("   "), Err(ParseError::Blank));
        assert_eq!(parse("S 100"), Err(ParseError::FieldCount(2)));
        assert_eq!(parse("S 100 15.30 x"), Err(ParseError::FieldCount(4)));
        assert_eq!(parse(" S 10 15.00"), Err(ParseError::FieldCount(4)));
        assert_eq!(parse("\tB 10 15.00"), Err(ParseError::FieldCount(4)));
        assert_eq!(parse("S 10 15.00  "), Ok(Order::sell(10, 1500)));
        assert_eq!(parse("X 100 15.30"), Err(ParseError::UnknownSide("X".into())));
        assert_eq!(parse("s 100 15.30"), Err(ParseError::UnknownSide("s".into())));
        assert_eq!(
            parse("S 1.5 15.30"),
            Err(ParseError::InvalidQuantity("1.5".into()))
        );
        assert_eq!(
            parse("S 10 abc"),
            Err(ParseError::InvalidPrice(NumericError::InvalidInput))
        );
    }

    #[test]
    fn test_out_of_range_values() {
        assert_eq!(parse("S 0 15.30"), Err(ParseError::QuantityOutOfRange(0)));
        assert_eq!(parse("S 1001 15.30"), Err(ParseError::QuantityOutOfRange(1001)));
        assert_eq!(parse("S 10 0.99"), Err(ParseError::PriceOutOfRange(99)));
        assert_eq!(parse("S 10 100.01"), Err(ParseError::PriceOutOfRange(10_001)));
        assert_eq!(
            parse("S 10 -5.00"),
            Err(ParseError::InvalidPrice(NumericError::Underflow))
        );
    }

    #[test]
    fn test_custom_ranges() {
        let config = AuctionConfig::default()
            .with_quantity_range(1..=5)
            .with_price_range(1..=50);

        assert_eq!(parse_order("B 5 0.50", &config), Ok(Order::buy(5, 50)));
        assert_eq!(
            parse_order("B 6 0.50", &config),
            Err(ParseError::QuantityOutOfRange(6))
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(ParseError::FieldCount(2).to_string(), "expected 3 fields, found 2");
        assert_eq!(
            ParseError::InvalidPrice(NumericError::InvalidInput).to_string(),
            "invalid price: invalid input: could not parse value"
        );
    }
}
