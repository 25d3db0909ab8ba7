//! Contact-method presence.

use vcf_model::{ContactRecord, Reason};

/// At least one non-blank `TEL` or `EMAIL` is required.
pub fn check(record: &ContactRecord) -> Vec<Reason> {
    let has_phone = record.phones().any(|p| !p.is_blank());
    let has_email = record.emails().any(|p| !p.is_blank());
    if has_phone || has_email {
        vec![]
    } else {
        vec![Reason::MissingContactMethod]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vcf_model::Property;

    #[test]
    fn test_phone_or_email_suffices() {
        let phone_only = ContactRecord::from_properties(vec![Property::new("TEL", "555")]);
        let email_only = ContactRecord::from_properties(vec![Property::new("EMAIL", "a@b.com")]);
        assert!(check(&phone_only).is_empty());
        assert!(check(&email_only).is_empty());
    }

    #[test]
    fn test_blank_values_do_not_count() {
        let record = ContactRecord::from_properties(vec![
            Property::new("FN", "Jane"),
            Property::new("TEL", "  "),
            Property::new("EMAIL", ""),
        ]);
        assert_eq!(check(&record), vec![Reason::MissingContactMethod]);
    }
}
