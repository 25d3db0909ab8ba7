//! In-place whitespace cleanup applied before validation.

use vcf_model::{ContactRecord, FieldKind};

fn is_normalized_field(kind: &FieldKind) -> bool {
    matches!(kind, FieldKind::FullName | FieldKind::Tel | FieldKind::Email)
}

/// Trim `FN`, `TEL` and `EMAIL` values. Returns how many values changed.
pub fn normalize_record(record: &mut ContactRecord) -> usize {
    let mut changed = 0usize;
    for property in record.properties_mut() {
        if !is_normalized_field(&property.kind) {
            continue;
        }
        let trimmed = property.value.trim();
        if trimmed.len() != property.value.len() {
            property.value = trimmed.to_string();
            changed += 1;
        }
    }
    changed
}
