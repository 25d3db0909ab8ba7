//! Import-readiness validation for contact records.
//!
//! Rules run in a fixed order and every failing rule contributes its reasons;
//! a record is valid only when no rule reported anything.
//!
//! 1. full name present ([`checks::name::check_presence`])
//! 2. no illegal characters in the name ([`checks::name::check_characters`])
//! 3. at least one phone or email ([`checks::contact::check`])
//! 4. every phone well-formed ([`checks::phone::check`])

pub mod checks;
mod normalize;

pub use normalize::normalize_record;

use vcf_model::{AssessedRecord, ContactRecord, Reason, RecordBlock, Verdict};

type Check = fn(&ContactRecord) -> Vec<Reason>;

const CHECKS: [Check; 4] = [
    checks::name::check_presence,
    checks::name::check_characters,
    checks::contact::check,
    checks::phone::check,
];

/// Validation settings.
#[derive(Debug, Clone, Copy)]
pub struct ValidateOptions {
    /// Trim contact fields in place before checking.
    pub normalize: bool,
}

impl Default for ValidateOptions {
    fn default() -> Self {
        Self { normalize: true }
    }
}

/// Run every rule against `record` and collect all reasons.
pub fn validate_record(record: &ContactRecord) -> Verdict {
    let reasons: Vec<Reason> = CHECKS.iter().flat_map(|check| check(record)).collect();
    Verdict::from_reasons(reasons)
}

/// Normalize (when enabled) and validate one block.
///
/// Malformed blocks are invalid with a single "unparsable block" reason.
pub fn assess_block(
    position: usize,
    mut block: RecordBlock,
    options: ValidateOptions,
) -> AssessedRecord {
    let verdict = match &mut block {
        RecordBlock::Parsed(record) => {
            if options.normalize {
                normalize_record(record);
            }
            validate_record(record)
        }
        RecordBlock::Malformed(_) => Verdict::Invalid(vec![Reason::UnparsableBlock]),
    };
    let assessed = AssessedRecord {
        position,
        block,
        verdict,
    };
    tracing::debug!(
        position,
        valid = assessed.verdict.is_valid(),
        reasons = assessed.verdict.reasons().len(),
        "record assessed"
    );
    assessed
}

/// Assess blocks in input order, numbering them from 1.
pub fn assess_blocks(blocks: Vec<RecordBlock>, options: ValidateOptions) -> Vec<AssessedRecord> {
    blocks
        .into_iter()
        .enumerate()
        .map(|(idx, block)| assess_block(idx + 1, block, options))
        .collect()
}
