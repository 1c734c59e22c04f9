//! Exact decimal frequency arithmetic.
//!
//! Repeater frequencies and offsets are written in MHz with up to five
//! fractional digits. Adding them as binary floats produces values like
//! `145.91999999999999`, so both are parsed into [`rust_decimal::Decimal`]
//! and summed exactly.
//!
//! Codeplug frequencies are rendered with exactly five fractional digits and
//! at least three integer digits, zero-padded: `146.52000`, `050.10000`.

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Number of fractional digits in a rendered frequency.
pub const FRACTION_DIGITS: u32 = 5;

/// Minimum number of integer digits in a rendered frequency.
pub const MIN_INTEGER_DIGITS: usize = 3;

/// Parse a decimal number, tolerating surrounding whitespace and a leading `+`.
pub fn parse(text: &str) -> Option<Decimal> {
    let trimmed = text.trim();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    Decimal::from_str(unsigned)
        .or_else(|_| Decimal::from_scientific(unsigned))
        .ok()
}

/// Receive frequency of a repeater: transmit frequency plus offset.
pub fn receive_frequency(transmit: Decimal, offset: Decimal) -> Decimal {
    transmit + offset
}

/// Render a frequency in codeplug form.
pub fn format(value: Decimal) -> String {
    let mut rounded =
        value.round_dp_with_strategy(FRACTION_DIGITS, RoundingStrategy::MidpointNearestEven);
    rounded.rescale(FRACTION_DIGITS);

    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let text = rounded.abs().to_string();
    let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));

    format!(
        "{}{:0>width$}.{}",
        if negative { "-" } else { "" },
        integer,
        fraction,
        width = MIN_INTEGER_DIGITS
    )
}
