//! Re-serialization of records into vCard text.
//!
//! Lines end in CRLF and are folded at 75 octets. Property names, parameters
//! and values are written exactly as parsed. Quoted-printable values fold with
//! `=` soft breaks instead of leading whitespace.

use vcf_model::{ContactRecord, MalformedBlock, Property, RecordBlock};

/// Maximum octets per physical line, excluding the line break.
pub const FOLD_WIDTH: usize = 75;

const CRLF: &str = "\r\n";

/// Logical content line for one property.
pub fn property_line(property: &Property) -> String {
    let mut line = String::with_capacity(property.name.len() + property.value.len() + 8);
    if let Some(group) = &property.group {
        line.push_str(group);
        line.push('.');
    }
    line.push_str(&property.name);
    for param in &property.params {
        line.push(';');
        line.push_str(&param.name);
        if let Some(value) = &param.value {
            line.push('=');
            line.push_str(value);
        }
    }
    line.push(':');
    line.push_str(&property.value);
    line
}

/// Append `line` to `out` folded at [`FOLD_WIDTH`] octets, never splitting a
/// UTF-8 sequence. Continuation lines start with one space.
pub fn push_folded(out: &mut String, line: &str) {
    let mut rest = line;
    let mut width = FOLD_WIDTH;
    loop {
        if rest.len() <= width {
            out.push_str(rest);
            out.push_str(CRLF);
            return;
        }
        let mut cut = width;
        while !rest.is_char_boundary(cut) {
            cut -= 1;
        }
        out.push_str(&rest[..cut]);
        out.push_str(CRLF);
        out.push(' ');
        rest = &rest[cut..];
        // The leading space counts toward the next line's width.
        width = FOLD_WIDTH - 1;
    }
}

/// Append a quoted-printable `line` to `out`, breaking it with a trailing `=`
/// so each physical line stays within [`FOLD_WIDTH`] octets. Breaks fall
/// inside the value (from `value_start` on) and never split an `=XX` escape.
pub fn push_soft_broken(out: &mut String, line: &str, value_start: usize) {
    let mut rest = line;
    let mut floor = value_start;
    loop {
        if rest.len() <= FOLD_WIDTH {
            break;
        }
        let mut cut = FOLD_WIDTH - 1;
        while !rest.is_char_boundary(cut) {
            cut -= 1;
        }
        let bytes = rest.as_bytes();
        if bytes[cut - 1] == b'=' {
            cut -= 1;
        } else if bytes[cut - 2] == b'=' {
            cut -= 2;
        }
        let cut = cut.max(floor);
        if cut >= rest.len() {
            break;
        }
        out.push_str(&rest[..cut]);
        out.push('=');
        out.push_str(CRLF);
        rest = &rest[cut..];
        floor = 0;
    }
    out.push_str(rest);
    out.push_str(CRLF);
}

pub fn serialize_record(record: &ContactRecord) -> String {
    let mut out = String::new();
    out.push_str("BEGIN:VCARD");
    out.push_str(CRLF);
    for property in record.properties() {
        let line = property_line(property);
        if property.is_quoted_printable() {
            let value_start = line.len() - property.value.len();
            push_soft_broken(&mut out, &line, value_start);
        } else {
            push_folded(&mut out, &line);
        }
    }
    out.push_str("END:VCARD");
    out.push_str(CRLF);
    out
}

/// Write a malformed block back out from its raw lines so nothing is lost.
pub fn serialize_malformed(block: &MalformedBlock) -> String {
    let mut out = String::new();
    out.push_str("BEGIN:VCARD");
    out.push_str(CRLF);
    for line in &block.lines {
        push_folded(&mut out, line);
    }
    out.push_str("END:VCARD");
    out.push_str(CRLF);
    out
}

pub fn serialize_block(block: &RecordBlock) -> String {
    match block {
        RecordBlock::Parsed(record) => serialize_record(record),
        RecordBlock::Malformed(malformed) => serialize_malformed(malformed),
    }
}
