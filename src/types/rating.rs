//! Restaurant rating helpers.
//!
//! Ratings are `rust_decimal::Decimal` values with one decimal place by
//! convention. They never enter dispatch arithmetic, so these helpers only
//! cover parsing, display and the fixed-point form used in state-root records.
//!
//! ## Examples
//!
//! ```
//! use food_dispatch::types::rating::{parse_rating, format_rating};
//!
//! let rating = parse_rating("4.5").unwrap();
//! assert_eq!(format_rating(rating), "4.5");
//! ```

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

/// Decimal places kept for a rating
pub const RATING_DP: u32 = 1;

/// Scaling factor for the fixed-point form: 10^[`RATING_DP`]
pub const RATING_SCALE: u64 = 10;

/// Parse a rating string, rounding to [`RATING_DP`] places.
///
/// # Returns
///
/// * `Some(Decimal)` - The rounded rating
/// * `None` - If parsing fails or the value is negative
///
/// # Example
///
/// ```
/// use food_dispatch::types::rating::parse_rating;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_rating("4.2"), Some(Decimal::new(42, 1)));
/// assert_eq!(parse_rating("4.25"), Some(Decimal::new(42, 1)));
/// assert_eq!(parse_rating("-1"), None);
/// assert_eq!(parse_rating("five"), None);
/// ```
pub fn parse_rating(s: &str) -> Option<Decimal> {
    let decimal = Decimal::from_str(s.trim()).ok()?;
    if decimal.is_sign_negative() {
        return None;
    }
    Some(decimal.round_dp(RATING_DP))
}

/// Render a rating with exactly [`RATING_DP`] decimal places
pub fn format_rating(rating: Decimal) -> String {
    format!("{:.1}", rating)
}

/// Convert a rating to fixed-point u64 (scaled by [`RATING_SCALE`]).
///
/// Negative or out-of-range ratings map to 0.
pub fn rating_to_fixed(rating: Decimal) -> u64 {
    if rating.is_sign_negative() {
        return 0;
    }
    rating
        .checked_mul(Decimal::from(RATING_SCALE))
        .map(|scaled| scaled.round_dp(0))
        .and_then(|rounded| rounded.to_u64())
        .unwrap_or(0)
}
