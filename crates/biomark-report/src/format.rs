//! Display formatting shared by every view.
//!
//! The value rule is part of the comparison contract: integral values render
//! without decimals, everything else with exactly two.

use chrono::NaiveDate;

use biomark_core::Delta;

pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

pub fn format_opt_value(value: Option<f64>) -> String {
    match value {
        Some(value) => format_value(value),
        None => "-".to_string(),
    }
}

/// `↑ 10.0%` / `↓ 3.2%` / `= 0.0%`; `-` when there is no data to compare.
pub fn format_delta(delta: Option<&Delta>) -> String {
    match delta {
        Some(delta) => format!("{} {:.1}%", delta.direction.glyph(), delta.pct.abs()),
        None => "-".to_string(),
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Reference interval for table cells: `30 – 100`, `> 30`, `< 100`, or `-`.
pub fn format_range(low: Option<f64>, high: Option<f64>) -> String {
    match (low, high) {
        (Some(low), Some(high)) => format!("{} – {}", format_value(low), format_value(high)),
        (Some(low), None) => format!("> {}", format_value(low)),
        (None, Some(high)) => format!("< {}", format_value(high)),
        (None, None) => "-".to_string(),
    }
}
