//! Full-name presence and character legality.

use vcf_model::{ContactRecord, Reason};

/// Characters the destination rejects in contact names.
pub const ILLEGAL_NAME_CHARS: [char; 9] = ['<', '>', '|', ':', '*', '?', '"', '\\', '/'];

/// The first `FN` must exist and be non-blank.
pub fn check_presence(record: &ContactRecord) -> Vec<Reason> {
    match record.full_name() {
        Some(name) if !name.trim().is_empty() => vec![],
        _ => vec![Reason::MissingFullName],
    }
}

/// The full name must not contain any of [`ILLEGAL_NAME_CHARS`].
pub fn check_characters(record: &ContactRecord) -> Vec<Reason> {
    let Some(name) = record.full_name() else {
        return vec![];
    };
    if name.contains(ILLEGAL_NAME_CHARS) {
        vec![Reason::IllegalNameCharacter]
    } else {
        vec![]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vcf_model::Property;

    fn with_name(name: &str) -> ContactRecord {
        ContactRecord::from_properties(vec![Property::new("FN", name)])
    }

    #[test]
    fn test_presence() {
        assert!(check_presence(&with_name("Jane")).is_empty());
        assert_eq!(check_presence(&with_name("   ")), vec![Reason::MissingFullName]);
        assert_eq!(
            check_presence(&ContactRecord::new()),
            vec![Reason::MissingFullName]
        );
    }

    #[test]
    fn test_each_illegal_character() {
        for ch in ILLEGAL_NAME_CHARS {
            let name = format!("Jane{ch}Doe");
            let record = with_name(&name);
            assert_eq!(
                check_characters(&record),
                vec![Reason::IllegalNameCharacter],
                "{name}"
            );
        }
    }

    #[test]
    fn test_escaped_comma_is_legal() {
        assert!(check_characters(&with_name(r"Doe\, Jane")).is_empty());
        assert!(check_characters(&with_name("O'Brien-Smith Jr.")).is_empty());
    }
}
