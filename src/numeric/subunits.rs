// ============================================================================
// Currency Subunits
// Integer price representation and clearing-price rounding
// ============================================================================

use super::errors::{NumericError, NumericResult};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Price expressed in the smallest currency subunit (1.00 == 100).
pub type PriceSubunits = u64;

/// Number of securities in an order or on a curve.
pub type Quantity = u64;

/// Subunits in one currency unit.
pub const SUBUNITS_PER_UNIT: u64 = 100;

/// Fractional digits of a currency amount.
pub const PRICE_DECIMALS: u32 = 2;

/// Parse a currency amount such as `"15.30"` into subunits.
///
/// Digits below one subunit are truncated toward zero, so `"15.309"`
/// becomes `1530`.
///
/// # Errors
/// - `InvalidInput` if the text is not a decimal number
/// - `Underflow` if the amount is negative
/// - `Overflow` if the amount does not fit into `u64` subunits
pub fn parse_price(text: &str) -> NumericResult<PriceSubunits> {
    let amount = Decimal::from_str(text).map_err(|_| NumericError::InvalidInput)?;
    to_subunits(amount)
}

/// Convert a currency amount into subunits, truncating toward zero.
pub fn to_subunits(amount: Decimal) -> NumericResult<PriceSubunits> {
    let scaled = amount
        .checked_mul(Decimal::from(SUBUNITS_PER_UNIT))
        .ok_or(NumericError::Overflow)?
        .trunc();

    if scaled.is_zero() {
        return Ok(0);
    }
    if scaled.is_sign_negative() {
        return Err(NumericError::Underflow);
    }

    scaled.to_u64().ok_or(NumericError::Overflow)
}

/// Convert subunits back into a currency amount with two decimals.
pub fn from_subunits(subunits: PriceSubunits) -> Decimal {
    Decimal::from_i128_with_scale(i128::from(subunits), PRICE_DECIMALS)
}

/// Average a list of tied optimal prices into one clearing price.
///
/// The rule is applied in two stages and must be kept exactly:
/// 1. `sum / count` is rounded away from zero to whole subunits.
/// 2. The subunit value is rescaled to currency and rounded half-up to
///    two decimals.
///
/// Returns `None` for an empty list.
///
/// # Example
/// ```
/// use discrete_auction::numeric::clearing_price;
/// use rust_decimal::Decimal;
///
/// // (1101 + 1200 + 1000 + 1200) / 4 = 1125.25 -> 1126 subunits
/// let price = clearing_price(&[1101, 1200, 1000, 1200]).unwrap();
/// assert_eq!(price, Decimal::new(1126, 2));
/// ```
pub fn clearing_price(prices: &[PriceSubunits]) -> Option<Decimal> {
    if prices.is_empty() {
        return None;
    }

    let sum: Decimal = prices.iter().map(|&price| Decimal::from(price)).sum();
    let count = Decimal::from(prices.len() as u64);

    let mean_subunits = (sum / count).round_dp_with_strategy(0, RoundingStrategy::AwayFromZero);

    Some(
        (mean_subunits / Decimal::from(SUBUNITS_PER_UNIT))
            .round_dp_with_strategy(PRICE_DECIMALS, RoundingStrategy::MidpointAwayFromZero),
    )
}

/// Render a currency amount with exactly two fractional digits.
pub fn format_price(amount: Decimal) -> String {
    format!("{:.2}", amount)
}
