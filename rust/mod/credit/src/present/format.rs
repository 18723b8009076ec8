//! Currency, number and date formatting (en-IN conventions).

use chrono::NaiveDateTime;

pub const RUPEE: &str = "₹";

const CRORE: f64 = 10_000_000.0;
const LAKH: f64 = 100_000.0;

/// Rupee amount in the compact Indian style.
///
/// `>= 1 crore` → `₹1.25 Cr`, `>= 1 lakh` → `₹2.50 L`, otherwise the
/// rounded amount with Indian digit grouping (`₹12,345`).
pub fn format_currency(amount: f64) -> String {
    if amount >= CRORE {
        format!("{}{:.2} Cr", RUPEE, amount / CRORE)
    } else if amount >= LAKH {
        format!("{}{:.2} L", RUPEE, amount / LAKH)
    } else {
        format!("{}{}", RUPEE, group_indian(amount.round() as i64))
    }
}

/// `None` renders as "N/A".
pub fn format_optional_currency(amount: Option<f64>) -> String {
    amount.map(format_currency).unwrap_or_else(|| "N/A".to_string())
}

/// Indian digit grouping: last three digits, then pairs (`12,34,567`).
pub fn group_indian(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let sign = if n < 0 { "-" } else { "" };
    if digits.len() <= 3 {
        return format!("{}{}", sign, digits);
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();
    format!("{}{},{}", sign, groups.join(","), tail)
}

/// `15 Jan 2024`
pub fn format_date(t: &NaiveDateTime) -> String {
    t.format("%d %b %Y").to_string()
}

/// `15 Jan 2024, 14:30`
pub fn format_datetime(t: &NaiveDateTime) -> String {
    t.format("%d %b %Y, %H:%M").to_string()
}

/// Date or a placeholder for missing values.
pub fn format_optional_date(t: Option<&NaiveDateTime>, missing: &str) -> String {
    t.map(format_date).unwrap_or_else(|| missing.to_string())
}

pub fn format_optional_datetime(t: Option<&NaiveDateTime>, missing: &str) -> String {
    t.map(format_datetime).unwrap_or_else(|| missing.to_string())
}

/// Score as shown in badges and bars: whole numbers without decimals,
/// otherwise one decimal place.
pub fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{:.0}", score)
    } else {
        format!("{:.1}", score)
    }
}
