//! Data model shared by the vcf-clean crates.

pub mod record;
pub mod verdict;

pub use record::{
    ContactRecord, FieldKind, MalformedBlock, Param, Property, RecordBlock, unescape_text,
};
pub use verdict::{AssessedRecord, Reason, Verdict};
