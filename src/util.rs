// Number formatting helpers for console output.
//
// Keeps display rounding in one place so the KPI line, analysis text and
// tables all agree on how a value is shown.
use num_format::{Locale, ToFormattedString};

/// Fixed decimals with locale thousands separators (e.g. `1,234.50`).
pub fn format_number(n: f64, decimals: usize) -> String {
    if !n.is_finite() {
        return n.to_string();
    }
    let s = format!("{:.*}", decimals, n.abs());
    let (int_part, frac_part) = match s.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (s.as_str(), None),
    };
    let int_val: u64 = int_part.parse().unwrap_or(0);
    let mut res = int_val.to_formatted_string(&Locale::en);
    if let Some(frac) = frac_part {
        res.push('.');
        res.push_str(frac);
    }
    // `-0.00` reads badly; only keep the sign when something non-zero shows.
    if n.is_sign_negative() && res.chars().any(|c| c.is_ascii_digit() && c != '0') {
        format!("-{}", res)
    } else {
        res
    }
}

pub fn format_percent(n: f64, decimals: usize) -> String {
    format!("{}%", format_number(n, decimals))
}

pub fn format_int<T>(n: T) -> String
where
    T: ToFormattedString,
{
    n.to_formatted_string(&Locale::en)
}
