//! Display formatting for amounts and dates.
//!
//! Amounts are stored as integer cents. Conversion to dollars happens only
//! here, at the edge, never in SQL.

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Format an amount in cents as an en-US dollar string: `125000` -> `"$1,250.00"`.
pub fn format_currency(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    let dollars = (abs / 100).to_string();
    let fraction = abs % 100;

    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, ch) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}${}.{:02}", sign, grouped, fraction)
}

/// Exact cents-to-dollars conversion for form values.
pub fn cents_to_dollars(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

/// Short human date for tables, e.g. `Jan 1, 2024`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}
