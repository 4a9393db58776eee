//! Normalization of free-form price and stock text
//!
//! Both parsers recover locally: malformed price text becomes 0, malformed
//! stock text becomes the unavailable sentinel. Neither ever propagates a
//! failure.

use crate::types::StockLevel;

/// Normalize free-form currency text to a non-negative price.
///
/// Strips everything but digits and decimal points, then parses the leading
/// numeric run (a second `.` terminates it). Defaults to `0.0` when nothing
/// numeric survives, e.g. `"$1,234.50"` is 1234.5 and `"TBC"` is 0.
#[must_use]
pub fn normalize_price(raw: &str) -> f64 {
    let cleaned: String = raw
        .chars()
        .filter(|ch| ch.is_ascii_digit() || *ch == '.')
        .collect();
    leading_number(&cleaned).unwrap_or(0.0)
}

/// Normalize free-form stock text to a stock level.
///
/// Parses the leading numeric run of the trimmed text and rounds to the
/// nearest whole unit, so `"12.7 units"` is 13. Anything unparseable
/// (`"n/a"`, `""`) is `Unavailable`, never silently zero.
#[must_use]
pub fn normalize_stock(raw: &str) -> StockLevel {
    match leading_number(raw.trim()) {
        Some(value) if value >= 0.0 => StockLevel::Available(value.round() as u32),
        _ => StockLevel::Unavailable,
    }
}

/// Parse the longest leading `digits [. digits]` prefix of `text`.
///
/// Returns `None` when the prefix contains no digit at all.
fn leading_number(text: &str) -> Option<f64> {
    let mut end = 0;
    let mut seen_dot = false;
    let mut seen_digit = false;
    for (idx, ch) in text.char_indices() {
        match ch {
            '0'..='9' => {
                seen_digit = true;
                end = idx + 1;
            }
            '.' if !seen_dot => {
                seen_dot = true;
                end = idx + 1;
            }
            _ => break,
        }
    }
    if !seen_digit {
        return None;
    }
    text[..end].trim_end_matches('.').parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_strips_currency_markup() {
        assert_eq!(normalize_price("$1,234.50"), 1234.5);
        assert_eq!(normalize_price("NZD 20"), 20.0);
        assert_eq!(normalize_price("15.00"), 15.0);
    }

    #[test]
    fn price_defaults_to_zero_on_failure() {
        assert_eq!(normalize_price(""), 0.0);
        assert_eq!(normalize_price("TBC"), 0.0);
        assert_eq!(normalize_price("..."), 0.0);
    }

    #[test]
    fn price_stops_at_second_decimal_point() {
        // "1.2.3" reads as 1.2, matching leading-prefix parse semantics
        assert_eq!(normalize_price("1.2.3"), 1.2);
    }

    #[test]
    fn stock_rounds_to_nearest_unit() {
        assert_eq!(normalize_stock("12.7 units"), StockLevel::Available(13));
        assert_eq!(normalize_stock("12.2"), StockLevel::Available(12));
        assert_eq!(normalize_stock("0"), StockLevel::Available(0));
    }

    #[test]
    fn stock_unparseable_is_unavailable_not_zero() {
        assert_eq!(normalize_stock("n/a"), StockLevel::Unavailable);
        assert_eq!(normalize_stock(""), StockLevel::Unavailable);
        assert_eq!(normalize_stock("out of stock"), StockLevel::Unavailable);
        assert_eq!(normalize_stock("-5"), StockLevel::Unavailable);
    }

    #[test]
    fn stock_trims_surrounding_whitespace() {
        assert_eq!(normalize_stock("  7  "), StockLevel::Available(7));
    }
}
