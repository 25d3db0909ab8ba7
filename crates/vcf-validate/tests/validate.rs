//! Rule-set tests over whole records.

use proptest::prelude::*;
use vcf_model::{ContactRecord, MalformedBlock, Property, Reason, RecordBlock, Verdict};
use vcf_validate::{ValidateOptions, assess_block, assess_blocks, validate_record};

fn record(fields: &[(&str, &str)]) -> ContactRecord {
    ContactRecord::from_properties(
        fields
            .iter()
            .map(|(name, value)| Property::new(*name, *value))
            .collect(),
    )
}

#[test]
fn test_complete_record_is_valid() {
    let verdict = validate_record(&record(&[("FN", "Jane Doe"), ("TEL", "+15551234567")]));
    assert_eq!(verdict, Verdict::Valid);
}

#[test]
fn test_empty_name_with_email() {
    let verdict = validate_record(&record(&[("FN", ""), ("EMAIL", "a@b.com")]));
    assert_eq!(verdict, Verdict::Invalid(vec![Reason::MissingFullName]));
}

#[test]
fn test_reasons_accumulate_in_rule_order() {
    let verdict = validate_record(&record(&[("FN", "Bad<Name>"), ("TEL", "555-BAD-FMT")]));
    assert_eq!(
        verdict,
        Verdict::Invalid(vec![
            Reason::IllegalNameCharacter,
            Reason::InvalidPhoneFormat("555-BAD-FMT".to_string()),
        ])
    );
}

#[test]
fn test_bare_record_fails_presence_rules() {
    let verdict = validate_record(&record(&[("VERSION", "3.0")]));
    assert_eq!(
        verdict,
        Verdict::Invalid(vec![Reason::MissingFullName, Reason::MissingContactMethod])
    );
}

#[test]
fn test_normalization_is_visible_on_record() {
    let block = RecordBlock::Parsed(record(&[("FN", " Jane "), ("TEL", " +1555 ")]));
    let assessed = assess_block(1, block, ValidateOptions::default());
    assert!(assessed.verdict.is_valid());
    let fields = assessed.block.as_record().unwrap().properties();
    assert_eq!(fields[0].value, "Jane");
    assert_eq!(fields[1].value, "+1555");
}

#[test]
fn test_normalization_can_be_disabled() {
    let block = RecordBlock::Parsed(record(&[("FN", " Jane "), ("TEL", "+1555")]));
    let assessed = assess_block(1, block, ValidateOptions { normalize: false });
    assert_eq!(assessed.block.as_record().unwrap().properties()[0].value, " Jane ");
}

#[test]
fn test_malformed_block_is_unparsable() {
    let block = RecordBlock::Malformed(MalformedBlock {
        lines: vec!["FN:A".to_string(), "oops".to_string()],
        error: "missing ':'".to_string(),
    });
    let assessed = assess_block(4, block, ValidateOptions::default());
    assert_eq!(
        assessed.verdict,
        Verdict::Invalid(vec![Reason::UnparsableBlock])
    );
    assert_eq!(assessed.label(), "record #4");
}

#[test]
fn test_positions_follow_input_order() {
    let blocks = vec![
        RecordBlock::Parsed(record(&[("FN", "A"), ("TEL", "1")])),
        RecordBlock::Parsed(record(&[("FN", "B")])),
    ];
    let assessed = assess_blocks(blocks, ValidateOptions::default());
    let positions: Vec<usize> = assessed.iter().map(|a| a.position).collect();
    assert_eq!(positions, vec![1, 2]);
    assert!(assessed[0].verdict.is_valid());
    assert!(!assessed[1].verdict.is_valid());
}

proptest! {
    #[test]
    fn illegal_name_is_always_invalid(
        prefix in "[A-Za-z ]{0,8}",
        bad in prop::sample::select(vec!['<', '>', '|', ':', '*', '?', '"', '/']),
        suffix in "[A-Za-z ]{0,8}",
    ) {
        let name = format!("{prefix}{bad}{suffix}");
        let verdict = validate_record(&record(&[("FN", name.as_str()), ("EMAIL", "a@b.com")]));
        prop_assert!(verdict.reasons().contains(&Reason::IllegalNameCharacter));
    }

    #[test]
    fn blank_name_is_always_invalid(name in "[ \t]{0,6}", tel in "[0-9]{1,10}") {
        let verdict = validate_record(&record(&[("FN", name.as_str()), ("TEL", tel.as_str())]));
        prop_assert!(verdict.reasons().contains(&Reason::MissingFullName));
    }

    #[test]
    fn digit_groups_are_well_formed(groups in prop::collection::vec("[0-9]{1,4}", 1..5)) {
        let phone = groups.join("-");
        let verdict = validate_record(&record(&[("FN", "Jane"), ("TEL", phone.as_str())]));
        prop_assert!(verdict.is_valid());
    }
}
