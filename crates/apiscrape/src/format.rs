//! Number formatting for console output.

/// `1234567` -> `"1,234,567"`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Dollar amount with two decimals, e.g. `$50,000.50`.
pub fn usd(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    format!(
        "{}${}.{:02}",
        sign(amount, cents),
        group_thousands(cents / 100),
        cents % 100
    )
}

/// Dollar amount rounded to whole units, e.g. `$900,000,000,000`.
pub fn usd_whole(amount: f64) -> String {
    let whole = amount.abs().round() as u64;
    format!("{}${}", sign(amount, whole), group_thousands(whole))
}

/// Percentage with two decimals, e.g. `-2.34%`.
pub fn percent(value: f64) -> String {
    format!("{:.2}%", value)
}

pub fn or_na(value: Option<f64>, fmt: fn(f64) -> String) -> String {
    value.map(fmt).unwrap_or_else(|| "N/A".to_string())
}

fn sign(amount: f64, magnitude: u64) -> &'static str {
    if amount < 0.0 && magnitude > 0 { "-" } else { "" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(50000), "50,000");
        assert_eq!(group_thousands(900_000_000_000), "900,000,000,000");
    }

    #[test]
    fn test_usd() {
        assert_eq!(usd(50000.5), "$50,000.50");
        assert_eq!(usd(0.999), "$1.00");
        assert_eq!(usd(0.0412), "$0.04");
        assert_eq!(usd(-12.5), "-$12.50");
    }

    #[test]
    fn test_usd_whole() {
        assert_eq!(usd_whole(900_000_000_000.0), "$900,000,000,000");
        assert_eq!(usd_whole(1234.6), "$1,235");
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(-2.34), "-2.34%");
        assert_eq!(percent(5.0), "5.00%");
    }

    #[test]
    fn test_missing_value_is_na() {
        assert_eq!(or_na(None, usd), "N/A");
        assert_eq!(or_na(Some(1.0), usd), "$1.00");
    }
}
