//! Splitting text into vCard blocks and parsing each one.
//!
//! Every `BEGIN:VCARD` opens a block. A block that cannot be parsed becomes a
//! [`RecordBlock::Malformed`] and parsing resumes at the next block.

mod line;

pub use line::{LineError, parse_content_line, unfold_lines};

use vcf_model::{ContactRecord, MalformedBlock, RecordBlock};

use crate::error::{IngestError, Result};

const BEGIN_MARKER: &str = "BEGIN:VCARD";
const END_MARKER: &str = "END:VCARD";

fn is_marker(line: &str, marker: &str) -> bool {
    line.trim().eq_ignore_ascii_case(marker)
}

/// Parse the content lines of one block (markers excluded).
///
/// `index` is the 1-based block position, used in the error. A
/// quoted-printable value ending in a `=` soft break continues on the next
/// line; the break is removed and the value stays encoded.
pub fn parse_block(index: usize, lines: &[String]) -> Result<ContactRecord> {
    let mut record = ContactRecord::new();
    let mut lines = lines.iter().enumerate();
    while let Some((offset, line)) = lines.next() {
        if line.trim().is_empty() {
            continue;
        }
        let mut property =
            parse_content_line(line).map_err(|error| IngestError::MalformedRecordBlock {
                index,
                reason: format!("line {}: {error}", offset + 1),
            })?;
        if property.is_quoted_printable() {
            while property.value.ends_with('=') {
                let Some((_, next)) = lines.next() else {
                    break;
                };
                property.value.pop();
                property.value.push_str(next);
            }
        }
        record.push(property);
    }
    Ok(record)
}

fn finish_block(blocks: &mut Vec<RecordBlock>, lines: Vec<String>, terminated: bool) {
    let index = blocks.len() + 1;
    let outcome = if terminated {
        parse_block(index, &lines)
    } else {
        Err(IngestError::MalformedRecordBlock {
            index,
            reason: "unterminated block: missing END:VCARD".to_string(),
        })
    };
    match outcome {
        Ok(record) => blocks.push(RecordBlock::Parsed(record)),
        Err(error) => {
            tracing::warn!(block = index, %error, "unparsable block");
            blocks.push(RecordBlock::Malformed(MalformedBlock {
                lines,
                error: error.to_string(),
            }));
        }
    }
}

/// Parse sanitized text into blocks, in input order.
pub fn parse_records(text: &str) -> Vec<RecordBlock> {
    let mut blocks = Vec::new();
    let mut current: Option<Vec<String>> = None;
    let mut ignored = 0usize;

    for (line_no, line) in unfold_lines(text).into_iter().enumerate() {
        if is_marker(&line, BEGIN_MARKER) {
            if let Some(open) = current.take() {
                finish_block(&mut blocks, open, false);
            }
            current = Some(Vec::new());
        } else if is_marker(&line, END_MARKER) {
            match current.take() {
                Some(open) => finish_block(&mut blocks, open, true),
                None => tracing::warn!(line = line_no + 1, "END:VCARD outside of a block"),
            }
        } else if let Some(open) = current.as_mut() {
            open.push(line);
        } else if !line.trim().is_empty() {
            ignored += 1;
            tracing::debug!(line = line_no + 1, "ignoring text outside of a block");
        }
    }
    if let Some(open) = current.take() {
        finish_block(&mut blocks, open, false);
    }

    let malformed = blocks.iter().filter(|block| block.is_malformed()).count();
    tracing::info!(
        blocks = blocks.len(),
        malformed,
        ignored_lines = ignored,
        "records parsed"
    );
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use vcf_model::FieldKind;

    #[test]
    fn test_parse_two_records() {
        let text = "BEGIN:VCARD\r\nVERSION:3.0\r\nFN:Jane Doe\r\nTEL:+15551234567\r\nEND:VCARD\r\n\
                    begin:vcard\r\nFN:John\r\nEMAIL:j@example.com\r\nend:vcard\r\n";
        let blocks = parse_records(text);
        assert_eq!(blocks.len(), 2);
        let first = blocks[0].as_record().unwrap();
        assert_eq!(first.len(), 3);
        assert_eq!(first.full_name().as_deref(), Some("Jane Doe"));
        let second = blocks[1].as_record().unwrap();
        assert_eq!(second.first(&FieldKind::Email).unwrap().value, "j@example.com");
    }

    #[test]
    fn test_empty_text() {
        assert!(parse_records("").is_empty());
        assert!(parse_records("\r\n\r\n").is_empty());
    }

    #[test]
    fn test_bad_line_isolated_to_its_block() {
        let text = "BEGIN:VCARD\nFN:A\nthis line has no delimiter\nEND:VCARD\n\
                    BEGIN:VCARD\nFN:B\nEND:VCARD\n";
        let blocks = parse_records(text);
        assert_eq!(blocks.len(), 2);
        match &blocks[0] {
            RecordBlock::Malformed(block) => {
                assert_eq!(block.lines, vec!["FN:A", "this line has no delimiter"]);
                assert_eq!(
                    block.error,
                    "malformed record block #1: line 2: missing ':' delimiter"
                );
            }
            RecordBlock::Parsed(_) => panic!("expected malformed block"),
        }
        assert_eq!(
            blocks[1].as_record().unwrap().full_name().as_deref(),
            Some("B")
        );
    }

    #[test]
    fn test_unterminated_block_followed_by_begin() {
        let text = "BEGIN:VCARD\nFN:A\nBEGIN:VCARD\nFN:B\nEND:VCARD\n";
        let blocks = parse_records(text);
        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].is_malformed());
        assert!(!blocks[1].is_malformed());
    }

    #[test]
    fn test_unterminated_at_end_of_input() {
        let blocks = parse_records("BEGIN:VCARD\nFN:A\n");
        assert_eq!(blocks.len(), 1);
        match &blocks[0] {
            RecordBlock::Malformed(block) => {
                assert!(block.error.contains("unterminated"));
            }
            RecordBlock::Parsed(_) => panic!("expected malformed block"),
        }
    }

    #[test]
    fn test_text_outside_blocks_ignored() {
        let text = "garbage\nEND:VCARD\nBEGIN:VCARD\nFN:A\n\nEND:VCARD\ntrailer\n";
        let blocks = parse_records(text);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].as_record().unwrap().len(), 1);
    }

    #[test]
    fn test_quoted_printable_soft_breaks_are_joined() {
        let text = "BEGIN:VCARD\r\nVERSION:2.1\r\n\
                    N;CHARSET=UTF-8;ENCODING=QUOTED-PRINTABLE:=44=6F=65;=4A=61=\r\n\
                    =6E=65=\r\n\
                    \r\n\
                    FN:Jane Doe\r\nTEL;CELL:+15551234567\r\nEND:VCARD\r\n";
        let blocks = parse_records(text);
        assert_eq!(blocks.len(), 1);
        let record = blocks[0].as_record().expect("soft breaks parse");
        let name = record.first(&FieldKind::Name).unwrap();
        assert_eq!(name.value, "=44=6F=65;=4A=61=6E=65");
        assert_eq!(record.full_name().as_deref(), Some("Jane Doe"));
        assert_eq!(record.phones().count(), 1);
    }

    #[test]
    fn test_trailing_equals_without_quoted_printable_is_not_joined() {
        let text = "BEGIN:VCARD\nFN:A\nNOTE:x=\ny\nEND:VCARD\n";
        let blocks = parse_records(text);
        assert!(blocks[0].is_malformed());
    }

    #[test]
    fn test_folded_value() {
        let text = "BEGIN:VCARD\r\nFN:Jane\r\nNOTE:a long\r\n  note\r\nEND:VCARD\r\n";
        let blocks = parse_records(text);
        let record = blocks[0].as_record().unwrap();
        assert_eq!(record.first(&FieldKind::Note).unwrap().value, "a long note");
    }
}
