//! Display Formatting
//!
//! Currency and date helpers shared by the pages.

/// Format an amount as marketplace currency, e.g. `PKR 1,500`.
///
/// Whole amounts drop the decimals; fractional amounts keep two places.
pub fn pkr(amount: f64) -> String {
    let negative = amount < 0.0;
    let amount = amount.abs();

    let mut whole = amount.trunc() as u64;
    let mut fraction = ((amount - amount.trunc()) * 100.0).round() as u64;
    // Rounding the cents can overflow into the next rupee.
    if fraction == 100 {
        whole += 1;
        fraction = 0;
    }

    let mut grouped = String::new();
    let digits = whole.to_string();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    if fraction == 0 {
        format!("PKR {}{}", sign, grouped)
    } else {
        format!("PKR {}{}.{:02}", sign, grouped, fraction)
    }
}

/// Format an RFC 3339 timestamp as `Mar 04, 2026`; falls back to the raw
/// string when the server sends something unparsable.
pub fn date(raw: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.format("%b %d, %Y").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

/// Format an RFC 3339 timestamp with the time of day, `Mar 04, 14:05`.
pub fn date_time(raw: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.format("%b %d, %H:%M").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pkr_whole_amounts() {
        assert_eq!(pkr(500.0), "PKR 500");
        assert_eq!(pkr(0.0), "PKR 0");
        assert_eq!(pkr(1500.0), "PKR 1,500");
        assert_eq!(pkr(2_500_000.0), "PKR 2,500,000");
    }

    #[test]
    fn pkr_fractional_amounts() {
        assert_eq!(pkr(499.5), "PKR 499.50");
        assert_eq!(pkr(1249.99), "PKR 1,249.99");
    }

    #[test]
    fn pkr_fraction_carries_into_whole() {
        assert_eq!(pkr(0.999), "PKR 1");
        assert_eq!(pkr(1499.999), "PKR 1,500");
        assert_eq!(pkr(999.995), "PKR 1,000");
    }

    #[test]
    fn pkr_negative_amounts() {
        assert_eq!(pkr(-750.0), "PKR -750");
    }

    #[test]
    fn date_parses_rfc3339() {
        assert_eq!(date("2026-03-04T14:05:00Z"), "Mar 04, 2026");
        assert_eq!(date_time("2026-03-04T14:05:00Z"), "Mar 04, 14:05");
    }

    #[test]
    fn date_falls_back_to_raw() {
        assert_eq!(date("yesterday"), "yesterday");
    }
}
