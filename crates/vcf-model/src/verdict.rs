use std::fmt;

use serde::Serialize;

use crate::record::RecordBlock;

/// Why a record cannot be imported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "value", rename_all = "snake_case")]
pub enum Reason {
    MissingFullName,
    IllegalNameCharacter,
    MissingContactMethod,
    InvalidPhoneFormat(String),
    UnparsableBlock,
}

impl Reason {
    /// Stable machine identifier used in JSON reports.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingFullName => "missing_full_name",
            Self::IllegalNameCharacter => "illegal_name_character",
            Self::MissingContactMethod => "missing_contact_method",
            Self::InvalidPhoneFormat(_) => "invalid_phone_format",
            Self::UnparsableBlock => "unparsable_block",
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFullName => f.write_str("missing full name"),
            Self::IllegalNameCharacter => f.write_str("illegal character in name"),
            Self::MissingContactMethod => f.write_str("missing phone and email"),
            Self::InvalidPhoneFormat(value) => write!(f, "invalid phone format: {value}"),
            Self::UnparsableBlock => f.write_str("unparsable block"),
        }
    }
}

/// Classification of a single record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", content = "reasons", rename_all = "lowercase")]
pub enum Verdict {
    Valid,
    Invalid(Vec<Reason>),
}

impl Verdict {
    /// Valid when no reasons were collected.
    pub fn from_reasons(reasons: Vec<Reason>) -> Self {
        if reasons.is_empty() {
            Self::Valid
        } else {
            Self::Invalid(reasons)
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn reasons(&self) -> &[Reason] {
        match self {
            Self::Valid => &[],
            Self::Invalid(reasons) => reasons,
        }
    }
}

/// A block paired with its verdict and 1-based input position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssessedRecord {
    pub position: usize,
    pub block: RecordBlock,
    pub verdict: Verdict,
}

impl AssessedRecord {
    /// Full name when present and non-blank, otherwise `record #N`.
    ///
    /// Control characters (such as a decoded `\n`) become spaces so the label
    /// always fits on one line.
    pub fn label(&self) -> String {
        self.block
            .as_record()
            .and_then(|record| record.full_name())
            .map(|name| {
                let flat: String = name
                    .chars()
                    .map(|c| if c.is_control() { ' ' } else { c })
                    .collect();
                flat.trim().to_string()
            })
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| format!("record #{}", self.position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{ContactRecord, MalformedBlock, Property};

    #[test]
    fn reason_messages() {
        assert_eq!(Reason::MissingFullName.to_string(), "missing full name");
        assert_eq!(
            Reason::InvalidPhoneFormat("555-BAD-FMT".to_string()).to_string(),
            "invalid phone format: 555-BAD-FMT"
        );
        assert_eq!(Reason::UnparsableBlock.to_string(), "unparsable block");
    }

    #[test]
    fn verdict_from_reasons() {
        assert!(Verdict::from_reasons(vec![]).is_valid());
        let verdict = Verdict::from_reasons(vec![Reason::MissingContactMethod]);
        assert!(!verdict.is_valid());
        assert_eq!(verdict.reasons(), &[Reason::MissingContactMethod]);
    }

    #[test]
    fn verdict_serializes() {
        let verdict = Verdict::Invalid(vec![Reason::InvalidPhoneFormat("x".to_string())]);
        let json = serde_json::to_value(&verdict).expect("serialize verdict");
        assert_eq!(json["verdict"], "invalid");
        assert_eq!(json["reasons"][0]["code"], "invalid_phone_format");
        assert_eq!(json["reasons"][0]["value"], "x");
    }

    #[test]
    fn label_falls_back_to_position() {
        let named = AssessedRecord {
            position: 1,
            block: RecordBlock::Parsed(ContactRecord::from_properties(vec![Property::new(
                "FN", " Jane ",
            )])),
            verdict: Verdict::Valid,
        };
        assert_eq!(named.label(), "Jane");

        let multiline = AssessedRecord {
            position: 3,
            block: RecordBlock::Parsed(ContactRecord::from_properties(vec![Property::new(
                "FN",
                r"Jane\nDoe",
            )])),
            verdict: Verdict::Valid,
        };
        assert_eq!(multiline.label(), "Jane Doe");

        let only_breaks = AssessedRecord {
            position: 5,
            block: RecordBlock::Parsed(ContactRecord::from_properties(vec![Property::new(
                "FN",
                r"\n\n",
            )])),
            verdict: Verdict::Valid,
        };
        assert_eq!(only_breaks.label(), "record #5");

        let blank = AssessedRecord {
            position: 2,
            block: RecordBlock::Parsed(ContactRecord::from_properties(vec![Property::new(
                "FN", "",
            )])),
            verdict: Verdict::Invalid(vec![Reason::MissingFullName]),
        };
        assert_eq!(blank.label(), "record #2");

        let malformed = AssessedRecord {
            position: 7,
            block: RecordBlock::Malformed(MalformedBlock {
                lines: vec!["FN:Ghost".to_string()],
                error: "unterminated".to_string(),
            }),
            verdict: Verdict::Invalid(vec![Reason::UnparsableBlock]),
        };
        assert_eq!(malformed.label(), "record #7");
    }
}
