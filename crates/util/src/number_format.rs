//! Indian-locale number formatting used by the portfolio view.
//!
//! Digits are grouped as lakh/crore: the last three digits form one group and
//! every group above that has two digits (`84,72,930`).

/// Groups the integer part of `value` in Indian style, no currency symbol.
pub fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

/// Formats a rupee amount rounded to whole rupees: `₹8,47,293`.
///
/// Negative values keep their sign in front of the symbol.
pub fn format_inr(amount: f64) -> String {
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let magnitude = rounded.abs().min(u64::MAX as f64) as u64;
    format!("{sign}₹{}", group_indian(magnitude))
}

/// Formats a signed percentage with two decimals: `+2.35%`.
pub fn format_percent_change(value: f64) -> String {
    if value >= 0.0 {
        format!("+{value:.2}%")
    } else {
        format!("{value:.2}%")
    }
}
