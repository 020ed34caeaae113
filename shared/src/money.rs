//! Currency and quantity formatting shared by the on-screen views and the
//! printable documents.

/// Peso sign prefixed to every monetary amount
pub const CURRENCY_SYMBOL: &str = "₱";

/// Formats an amount as `₱1,234.50`: two decimals, comma thousands separators.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return "-".to_string();
    }

    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };

    format!("{}{}{}.{}", CURRENCY_SYMBOL, sign, group_thousands(whole), cents)
}

/// Like [`format_currency`], but renders a missing amount as `-`
pub fn format_optional_currency(amount: Option<f64>) -> String {
    amount.map(format_currency).unwrap_or_else(|| "-".to_string())
}

/// Day and hour counts print without a trailing `.0`; missing values print as `-`
pub fn format_optional_quantity(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{}", v),
        _ => "-".to_string(),
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "₱0.00");
        assert_eq!(format_currency(500.0), "₱500.00");
        assert_eq!(format_currency(19500.0), "₱19,500.00");
        assert_eq!(format_currency(1234567.891), "₱1,234,567.89");
        assert_eq!(format_currency(999.999), "₱1,000.00");
    }

    #[test]
    fn test_format_negative_currency() {
        assert_eq!(format_currency(-1250.5), "₱-1,250.50");
        // Rounds to zero, so no sign
        assert_eq!(format_currency(-0.001), "₱0.00");
    }

    #[test]
    fn test_format_missing_values() {
        assert_eq!(format_optional_currency(None), "-");
        assert_eq!(format_optional_currency(Some(20000.0)), "₱20,000.00");
        assert_eq!(format_currency(f64::NAN), "-");
    }

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_optional_quantity(Some(22.0)), "22");
        assert_eq!(format_optional_quantity(Some(20.5)), "20.5");
        assert_eq!(format_optional_quantity(None), "-");
    }
}
