use chrono::{DateTime, NaiveDateTime};

/// Format a backend timestamp for display, e.g. "June 19, 2025". Backends
/// emit RFC 3339 with or without a zone offset; anything unparseable is
/// echoed back as-is.
pub fn format_date(timestamp: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(timestamp) {
        return dt.format("%B %-d, %Y").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%B %-d, %Y").to_string();
    }
    timestamp.to_string()
}

/// US-style currency display with thousands separators: 1234.5 -> "$1,234.50".
pub fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let dollars = cents / 100;
    let remainder = cents % 100;

    let digits = dollars.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!(
        "{}${}.{:02}",
        if negative { "-" } else { "" },
        grouped,
        remainder
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_rfc3339() {
        assert_eq!(format_date("2025-06-19T14:30:00Z"), "June 19, 2025");
        assert_eq!(format_date("2024-11-02T16:45:00+02:00"), "November 2, 2024");
    }

    #[test]
    fn test_format_date_naive() {
        assert_eq!(format_date("2025-03-05T09:00:00"), "March 5, 2025");
        assert_eq!(format_date("2025-03-05T09:00:00.123456"), "March 5, 2025");
    }

    #[test]
    fn test_format_date_fallback() {
        assert_eq!(format_date("not a date"), "not a date");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(5.0), "$5.00");
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(1_000_000.0), "$1,000,000.00");
        assert_eq!(format_currency(-42.25), "-$42.25");
    }
}
