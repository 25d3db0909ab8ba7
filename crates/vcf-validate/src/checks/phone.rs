//! Phone number shape.
//!
//! Accepted: an optional leading `+`, then digits optionally grouped with
//! parentheses, hyphens and spaces, with at least one digit. A `tel:` URI
//! scheme prefix (vCard 4.0) is ignored. Extensions and letters are rejected.

use std::sync::LazyLock;

use regex::Regex;
use vcf_model::{ContactRecord, Reason};

static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+?[0-9() -]*[0-9][0-9() -]*$").expect("phone pattern is valid")
});

const TEL_URI_SCHEME: &str = "tel:";

/// True when `value` has an importable phone shape.
pub fn is_well_formed(value: &str) -> bool {
    let trimmed = value.trim();
    let number = match trimmed.get(..TEL_URI_SCHEME.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(TEL_URI_SCHEME) => {
            &trimmed[TEL_URI_SCHEME.len()..]
        }
        _ => trimmed,
    };
    PHONE_PATTERN.is_match(number)
}

/// One reason per non-blank `TEL` value with a bad shape.
pub fn check(record: &ContactRecord) -> Vec<Reason> {
    record
        .phones()
        .filter(|p| !p.is_blank())
        .filter(|p| !is_well_formed(&p.value))
        .map(|p| Reason::InvalidPhoneFormat(p.value.trim().to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use vcf_model::Property;

    #[test]
    fn test_accepted_shapes() {
        for value in [
            "+15551234567",
            "(555) 123-4567",
            "555-1234",
            "5551234567",
            "+1 (555) 123-4567",
            "tel:+15551234567",
            "TEL:555 1234",
        ] {
            assert!(is_well_formed(value), "{value}");
        }
    }

    #[test]
    fn test_rejected_shapes() {
        for value in [
            "abc-def",
            "555-BAD-FMT",
            "555-1234 x12",
            "555.123.4567",
            "1+555",
            "+",
            "()- ",
            "++1555",
        ] {
            assert!(!is_well_formed(value), "{value}");
        }
    }

    #[test]
    fn test_check_reports_each_bad_value() {
        let record = ContactRecord::from_properties(vec![
            Property::new("TEL", "+15551234567"),
            Property::new("TEL", "abc-def"),
            Property::new("TEL", ""),
            Property::new("TEL", " 555-BAD-FMT "),
        ]);
        assert_eq!(
            check(&record),
            vec![
                Reason::InvalidPhoneFormat("abc-def".to_string()),
                Reason::InvalidPhoneFormat("555-BAD-FMT".to_string()),
            ]
        );
    }

    #[test]
    fn test_no_phone_is_exempt() {
        let record = ContactRecord::from_properties(vec![Property::new("EMAIL", "a@b.com")]);
        assert!(check(&record).is_empty());
    }
}
