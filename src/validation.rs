//! Tracking-Number Validation
//!
//! Structural checks on courier tracking numbers so the dispatch form can
//! give immediate feedback without a network round trip. Pure functions;
//! the server still performs its own validation on submit.

use regex::Regex;
use std::sync::OnceLock;

/// Verdict for a candidate tracking number
#[derive(Clone, Debug, PartialEq)]
pub struct TrackingVerdict {
    pub is_valid: bool,
    pub message: String,
}

impl TrackingVerdict {
    fn valid() -> Self {
        Self {
            is_valid: true,
            message: String::new(),
        }
    }

    fn invalid(message: &str) -> Self {
        Self {
            is_valid: false,
            message: message.to_string(),
        }
    }
}

struct CourierPattern {
    courier: &'static str,
    pattern: Regex,
    message: &'static str,
}

fn courier_table() -> &'static [CourierPattern] {
    static TABLE: OnceLock<Vec<CourierPattern>> = OnceLock::new();
    TABLE.get_or_init(|| {
        let entry = |courier, pattern: &str, message| CourierPattern {
            courier,
            // Patterns are fixed literals; a failure here is a programming error.
            pattern: Regex::new(pattern).unwrap(),
            message,
        };
        vec![
            entry(
                "tcs",
                r"^\d{11,12}$",
                "Invalid TCS format. Must be 11 or 12 digits.",
            ),
            entry(
                "leopards",
                r"^[A-Z]{2}\d{9,11}$",
                "Invalid Leopards format. Must be 2 letters followed by 9 to 11 digits.",
            ),
            entry("mnp", r"^\d{10}$", "Invalid M&P format. Must be 10 digits."),
            entry(
                "trax",
                r"^\d{9,12}$",
                "Invalid Trax format. Must be 9 to 12 digits.",
            ),
            entry(
                "postex",
                r"^\d{12,15}$",
                "Invalid PostEx format. Must be 12 to 15 digits.",
            ),
            entry(
                "blueex",
                r"^[A-Z]{3}-?\d{6,8}$",
                "Invalid BlueEx format. Must be 3 letters followed by 6 to 8 digits.",
            ),
            entry(
                "rider",
                r"^\d{10,12}$",
                "Invalid Rider format. Must be 10 to 12 digits.",
            ),
            entry("dhl", r"^\d{10}$", "Invalid DHL format. Must be 10 digits."),
        ]
    })
}

/// List of courier codes with a registered pattern, for the dispatch form
/// dropdown.
pub fn known_couriers() -> Vec<&'static str> {
    courier_table().iter().map(|c| c.courier).collect()
}

/// Validate a tracking number for the given courier code.
///
/// Couriers without a registered pattern are accepted fail-open: any
/// non-empty string passes, and the server has the final say.
pub fn validate_tracking(courier: &str, number: &str) -> TrackingVerdict {
    if courier.is_empty() {
        return TrackingVerdict::invalid("Select a courier first.");
    }
    if number.is_empty() {
        return TrackingVerdict::invalid("Tracking number cannot be empty.");
    }

    match courier_table().iter().find(|c| c.courier == courier) {
        Some(entry) if entry.pattern.is_match(number) => TrackingVerdict::valid(),
        Some(entry) => TrackingVerdict::invalid(entry.message),
        None => TrackingVerdict::valid(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_missing_courier() {
        let verdict = validate_tracking("", "12345678901");
        assert!(!verdict.is_valid);
        assert_eq!(verdict.message, "Select a courier first.");
    }

    #[test]
    fn rejects_empty_number() {
        let verdict = validate_tracking("tcs", "");
        assert!(!verdict.is_valid);
        assert_eq!(verdict.message, "Tracking number cannot be empty.");
    }

    #[test]
    fn tcs_accepts_11_or_12_digits() {
        assert!(validate_tracking("tcs", "12345678901").is_valid);
        assert!(validate_tracking("tcs", "123456789012").is_valid);

        let verdict = validate_tracking("tcs", "1234567890");
        assert!(!verdict.is_valid);
        assert_eq!(verdict.message, "Invalid TCS format. Must be 11 or 12 digits.");
        assert!(!validate_tracking("tcs", "12345678901X").is_valid);
    }

    #[test]
    fn leopards_requires_letter_prefix() {
        assert!(validate_tracking("leopards", "LP123456789").is_valid);
        assert!(validate_tracking("leopards", "KK12345678901").is_valid);
        assert!(!validate_tracking("leopards", "123456789").is_valid);
        assert!(!validate_tracking("leopards", "L123456789").is_valid);
    }

    #[test]
    fn mnp_requires_exactly_10_digits() {
        assert!(validate_tracking("mnp", "1234567890").is_valid);
        assert!(!validate_tracking("mnp", "123456789").is_valid);
        assert!(!validate_tracking("mnp", "12345678901").is_valid);
    }

    #[test]
    fn trax_accepts_9_to_12_digits() {
        assert!(validate_tracking("trax", "123456789").is_valid);
        assert!(validate_tracking("trax", "123456789012").is_valid);
        assert!(!validate_tracking("trax", "12345678").is_valid);
    }

    #[test]
    fn postex_accepts_12_to_15_digits() {
        assert!(validate_tracking("postex", "123456789012").is_valid);
        assert!(validate_tracking("postex", "123456789012345").is_valid);
        assert!(!validate_tracking("postex", "12345678901").is_valid);
    }

    #[test]
    fn blueex_accepts_optional_dash() {
        assert!(validate_tracking("blueex", "KHI-123456").is_valid);
        assert!(validate_tracking("blueex", "LHE12345678").is_valid);
        assert!(!validate_tracking("blueex", "KH-123456").is_valid);
    }

    #[test]
    fn rider_accepts_10_to_12_digits() {
        assert!(validate_tracking("rider", "1234567890").is_valid);
        assert!(!validate_tracking("rider", "123456789").is_valid);
    }

    #[test]
    fn dhl_requires_exactly_10_digits() {
        assert!(validate_tracking("dhl", "1234567890").is_valid);
        assert!(!validate_tracking("dhl", "12345678901").is_valid);
    }

    #[test]
    fn unknown_courier_fails_open() {
        let verdict = validate_tracking("speedy-express", "whatever-123");
        assert!(verdict.is_valid);
        assert!(verdict.message.is_empty());
        // Empty input still fails even for unknown couriers
        assert!(!validate_tracking("speedy-express", "").is_valid);
    }

    #[test]
    fn every_known_courier_rejects_garbage_with_a_message() {
        for courier in known_couriers() {
            let verdict = validate_tracking(courier, "!!!");
            assert!(!verdict.is_valid, "{} accepted garbage", courier);
            assert!(!verdict.message.is_empty(), "{} gave no message", courier);
        }
    }
}
