//! Rupee formatting for display.

/// Format a price as whole rupees with Indian digit grouping,
/// e.g. `5800000.0` -> `₹58,00,000`.
pub fn format_inr(price: f64) -> String {
    let rounded = price.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());

    format!("{}₹{}", sign, group_indian(&digits))
}

/// Compact axis label in lakhs, e.g. `5800000.0` -> `₹58.0L`.
pub fn format_lakhs(price: f64) -> String {
    format!("₹{:.1}L", price / 100_000.0)
}

/// Last three digits form one group, every two digits before that another.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
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
