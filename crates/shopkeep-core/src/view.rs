// ── Derived view model ──
//
// Pure presentation helpers over the cached product collection. These
// never touch the network and never mutate cache state.

use std::cmp::Reverse;
use std::sync::Arc;

use chrono::Datelike;

use crate::model::{Product, parse_timestamp};

/// Image shown when a product has none of its own.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.jpg";

/// Order products newest-first by creation time.
///
/// Records whose timestamp fails to parse sort to the end, keeping
/// their relative input order. The sort is stable, so repeated
/// derivation of the same input yields the same output.
pub fn derive_list(products: &[Product]) -> Vec<Arc<Product>> {
    let mut out: Vec<Arc<Product>> = products.iter().cloned().map(Arc::new).collect();
    out.sort_by_key(|p| {
        Reverse(parse_timestamp(&p.created_at).map_or(i64::MIN, |t| t.timestamp_millis()))
    });
    out
}

/// Render a raw price string as a dollar amount with thousands
/// separators and exactly two decimal places.
///
/// Currency symbols and grouping in the input are ignored. Input that
/// contains no parseable number is returned unchanged.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_currency(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '-' || *c == '.')
        .collect();
    let Ok(value) = cleaned.parse::<f64>() else {
        return raw.to_owned();
    };
    if !value.is_finite() {
        return raw.to_owned();
    }

    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}${grouped}.{frac:02}")
}

/// Render a stored timestamp as M/D/YYYY.
///
/// Falls back to the raw input when it cannot be parsed.
pub fn format_date(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(t) => format!("{}/{}/{}", t.month(), t.day(), t.year()),
        None => raw.to_owned(),
    }
}

/// Split a comma-separated materials string into trimmed, non-empty
/// tags.
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Image URL to display for a product, substituting the placeholder
/// when none is set.
pub fn display_image(product: &Product) -> &str {
    if product.image.trim().is_empty() {
        PLACEHOLDER_IMAGE
    } else {
        &product.image
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn product(id: &str, created_at: &str) -> Product {
        Product {
            id: id.into(),
            created_at: created_at.to_owned(),
            ..Product::default()
        }
    }

    #[test]
    fn derive_list_sorts_newest_first() {
        let products = vec![
            product("1", "2024-01-01"),
            product("2", "2024-06-01"),
            product("3", "2024-03-15T08:30:00.000Z"),
        ];
        let derived = derive_list(&products);
        let ids: Vec<_> = derived.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["2", "3", "1"]);
    }

    #[test]
    fn derive_list_puts_unparseable_timestamps_last_in_input_order() {
        let products = vec![
            product("a", "garbage"),
            product("b", "2024-06-01"),
            product("c", ""),
        ];
        let derived = derive_list(&products);
        let ids: Vec<_> = derived.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["b", "a", "c"]);
    }

    #[test]
    fn derive_list_is_idempotent() {
        let products = vec![
            product("1", "2024-01-01"),
            product("2", "2024-06-01"),
        ];
        let once = derive_list(&products);
        let again: Vec<Product> = once.iter().map(|p| (**p).clone()).collect();
        let twice = derive_list(&again);
        let a: Vec<_> = once.iter().map(|p| p.id.as_str()).collect();
        let b: Vec<_> = twice.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn format_currency_normalizes_amounts() {
        assert_eq!(format_currency("19.9"), "$19.90");
        assert_eq!(format_currency("$1,234.5"), "$1,234.50");
        assert_eq!(format_currency("0"), "$0.00");
        assert_eq!(format_currency("1234567.891"), "$1,234,567.89");
        assert_eq!(format_currency("-42"), "-$42.00");
    }

    #[test]
    fn format_currency_passes_garbage_through() {
        assert_eq!(format_currency("abc"), "abc");
        assert_eq!(format_currency(""), "");
        assert_eq!(format_currency("..."), "...");
    }

    #[test]
    fn format_date_renders_month_day_year() {
        assert_eq!(format_date("2024-06-01"), "6/1/2024");
        assert_eq!(format_date("2024-11-20T14:05:00.000Z"), "11/20/2024");
        assert_eq!(format_date("not a date"), "not a date");
    }

    #[test]
    fn split_tags_trims_and_drops_empties() {
        assert_eq!(
            split_tags("Cotton, Polyester,, Wool "),
            ["Cotton", "Polyester", "Wool"]
        );
        assert!(split_tags("").is_empty());
        assert!(split_tags(" , ,").is_empty());
    }

    #[test]
    fn display_image_substitutes_placeholder() {
        let mut p = Product::default();
        assert_eq!(display_image(&p), PLACEHOLDER_IMAGE);
        p.image = "/img/mug.jpg".to_owned();
        assert_eq!(display_image(&p), "/img/mug.jpg");
    }
}
