//! Text formatting for axis labels, tooltips and the coin table.

/// Inserts `,` thousands separators into the integer part of a plain decimal
/// string such as `-1234567.89`.
fn group_thousands(plain: &str) -> String {
    let (sign, unsigned) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (position, digit) in integer.chars().enumerate() {
        if position > 0 && (integer.len() - position) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match fraction {
        Some(fraction) => format!("{sign}{grouped}.{fraction}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Fixed-precision decimal with thousands separators.
#[must_use]
pub fn format_grouped(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return "nan".to_owned();
    }
    group_thousands(&format!("{value:.precision$}"))
}

/// Price-axis tick label: three decimals for stablecoins, otherwise two
/// decimals with thousands separators.
#[must_use]
pub fn format_axis_price(value: f64, is_stablecoin: bool) -> String {
    if is_stablecoin {
        format!("${value:.3}")
    } else {
        format!("${}", format_grouped(value, 2))
    }
}

#[must_use]
pub fn format_tooltip(timestamp: &str, price: f64) -> String {
    format!("Date: {timestamp}\nPrice: ${price:.6}")
}

/// Chart heading, truncated to `max_chars` characters.
#[must_use]
pub fn format_chart_title(series_label: &str, is_stablecoin: bool, max_chars: usize) -> String {
    let mut title = format!("{series_label} - 7-Day Price (USD)");
    if is_stablecoin {
        title.push_str(" (Stablecoin)");
    }
    truncate_chars(&title, max_chars)
}

/// First `max_chars` characters of `text`.
#[must_use]
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// Table price cell. Sub-dollar prices keep more precision.
#[must_use]
pub fn format_price(price: f64) -> String {
    if !price.is_finite() || price <= 0.0 {
        return "N/A".to_owned();
    }
    if price >= 1.0 {
        format!("${}", format_grouped(price, 2))
    } else if price < 0.000_001 {
        format!("${}", format_grouped(price, 8))
    } else {
        format!("${}", format_grouped(price, 6))
    }
}

/// Market-cap style amount with T/B/M suffixes.
#[must_use]
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() || value <= 0.0 {
        return "N/A".to_owned();
    }
    for (threshold, suffix) in [
        (1_000_000_000_000.0, "T"),
        (1_000_000_000.0, "B"),
        (1_000_000.0, "M"),
    ] {
        if value >= threshold {
            return format!("${} {suffix}", format_grouped(value / threshold, 2));
        }
    }
    format!("${}", format_grouped(value, 2))
}

#[must_use]
pub fn format_percentage_change(change: Option<f64>) -> String {
    match change {
        Some(change) if change.is_finite() => format!("{change:+.2}%"),
        _ => "N/A".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::group_thousands;

    #[test]
    fn grouping_handles_short_and_negative_numbers() {
        assert_eq!(group_thousands("999.5"), "999.5");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("-1234567.00"), "-1,234,567.00");
    }
}
