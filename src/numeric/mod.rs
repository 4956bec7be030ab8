// ============================================================================
// Numeric Module
// Currency subunits and clearing-price rounding
// ============================================================================
//
// This module provides:
// - Conversion between currency amounts (Decimal) and integer subunits
// - The two-stage rounding rule used to derive a single clearing price
// - NumericError: Error types for conversions
//
// Design principles:
// - Prices are compared as integer subunits, never as floating point
// - Currency amounts crossing the public API are rust_decimal::Decimal
// - Conversions return Result (no panics)

mod errors;
mod subunits;

pub use errors::{NumericError, NumericResult};
pub use subunits::{
    clearing_price, format_price, from_subunits, parse_price, to_subunits, PriceSubunits,
    Quantity, PRICE_DECIMALS, SUBUNITS_PER_UNIT,
};
