//! Conversion between wire percentage strings and decimals.

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;
use thiserror::Error;

/// Number of fractional digits used for percentages on the wire.
pub const PERCENTAGE_SCALE: u32 = 2;

/// Percentage parsing error.
#[derive(Debug, Error)]
#[error("invalid percentage {value:?}: {source}")]
pub struct PercentageError {
    pub value: String,
    #[source]
    pub source: rust_decimal::Error,
}

/// Formats a percentage with exactly two fractional digits ("5" -> "5.00").
///
/// Extra digits are rounded half away from zero.
pub fn format_percentage(value: Decimal) -> String {
    let rounded =
        value.round_dp_with_strategy(PERCENTAGE_SCALE, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}

/// Parses a wire percentage string such as "5.00".
pub fn parse_percentage(value: &str) -> Result<Decimal, PercentageError> {
    Decimal::from_str(value.trim()).map_err(|source| PercentageError {
        value: value.to_string(),
        source,
    })
}
