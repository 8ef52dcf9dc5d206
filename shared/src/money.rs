//! Rupiah price helpers
//!
//! Catalog prices arrive as display strings (`"Rp 15.000"`). Amounts are
//! whole rupiah held in `i64`; there are no fractional units in this domain.

use regex::Regex;
use std::sync::LazyLock;

/// Currency marker + first run of digits/separators after it
static PRICE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Rp\s*([0-9.,]+)").expect("price pattern is valid"));

/// Extract the numeric amount from a display price.
///
/// Takes the first run of digits and separators following `Rp`, drops the
/// `.` thousands separators and reads the leading integer. Anything after a
/// `,` (decimal part) is ignored. Returns 0 when there is no match.
///
/// ```
/// use shared::money::parse_price;
///
/// assert_eq!(parse_price("Rp 12.345"), 12345);
/// assert_eq!(parse_price("Rp15.000,-"), 15000);
/// assert_eq!(parse_price("gratis"), 0);
/// ```
pub fn parse_price(display: &str) -> i64 {
    let Some(captures) = PRICE_PATTERN.captures(display) else {
        return 0;
    };
    let digits: String = captures[1]
        .chars()
        .filter(|c| *c != '.')
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}

/// Group an amount in thousands the `id-ID` way (`25000` → `"25.000"`).
pub fn format_thousands(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if amount < 0 {
        grouped.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    grouped
}

/// Display price for an amount (`15000` → `"Rp 15.000"`).
pub fn format_rupiah(amount: i64) -> String {
    format!("Rp {}", format_thousands(amount))
}

/// Total line as shown at checkout (`25000` → `"Rp 25.000,-"`).
pub fn format_total(amount: i64) -> String {
    format!("Rp {},-", format_thousands(amount))
}
