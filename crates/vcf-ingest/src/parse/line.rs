//! Content-line grammar: `[group "."] name *(";" param) ":" value`.

use thiserror::Error;

use vcf_model::{FieldKind, Param, Property};

/// Why a single content line could not be parsed.
///
/// Messages never quote the line itself; it may hold contact data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LineError {
    #[error("missing ':' delimiter")]
    MissingDelimiter,
    #[error("empty property name")]
    EmptyName,
    #[error("invalid property name")]
    InvalidName,
    #[error("unterminated quoted parameter")]
    UnterminatedQuote,
}

/// Split unfolded text into logical lines.
///
/// Accepts CRLF, LF and bare CR. A line starting with a space or HTAB continues
/// the previous line with that one whitespace character removed.
pub fn unfold_lines(text: &str) -> Vec<String> {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    let mut lines: Vec<String> = Vec::new();
    for raw in normalized.split('\n') {
        let continuation = raw.starts_with([' ', '\t']);
        match lines.last_mut() {
            Some(previous) if continuation && !previous.is_empty() => {
                previous.push_str(&raw[1..]);
            }
            _ => lines.push(raw.to_string()),
        }
    }
    while lines.last().is_some_and(String::is_empty) {
        lines.pop();
    }
    lines
}

/// Split `input` on `separator` outside double quotes.
fn split_unquoted(input: &str, separator: char) -> Option<Vec<&str>> {
    let mut parts = Vec::new();
    let mut in_quotes = false;
    let mut start = 0usize;
    for (idx, ch) in input.char_indices() {
        if ch == '"' {
            in_quotes = !in_quotes;
        } else if ch == separator && !in_quotes {
            parts.push(&input[start..idx]);
            start = idx + ch.len_utf8();
        }
    }
    if in_quotes {
        return None;
    }
    parts.push(&input[start..]);
    Some(parts)
}

/// Byte offset of the first `:` outside quoted parameter values.
fn find_value_delimiter(line: &str) -> Result<usize, LineError> {
    let mut in_quotes = false;
    for (idx, ch) in line.char_indices() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ':' if !in_quotes => return Ok(idx),
            _ => {}
        }
    }
    if in_quotes {
        Err(LineError::UnterminatedQuote)
    } else {
        Err(LineError::MissingDelimiter)
    }
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// Parse one unfolded content line into a property.
pub fn parse_content_line(line: &str) -> Result<Property, LineError> {
    let colon = find_value_delimiter(line)?;
    let (head, value) = (&line[..colon], &line[colon + 1..]);

    let segments = split_unquoted(head, ';').ok_or(LineError::UnterminatedQuote)?;
    let qualified = segments[0].trim();
    if qualified.is_empty() {
        return Err(LineError::EmptyName);
    }

    let (group, name) = match qualified.split_once('.') {
        Some((group, name)) => (Some(group), name),
        None => (None, qualified),
    };
    if !is_valid_name(name) {
        return Err(LineError::InvalidName);
    }
    if let Some(group) = group
        && !is_valid_name(group)
    {
        return Err(LineError::InvalidName);
    }

    let params = segments[1..]
        .iter()
        .filter(|segment| !segment.is_empty())
        .map(|segment| match segment.split_once('=') {
            Some((key, val)) => Param::new(key, Some(val.to_string())),
            None => Param::new(*segment, None),
        })
        .collect();

    Ok(Property {
        group: group.map(str::to_string),
        kind: FieldKind::from_name(name),
        name: name.to_string(),
        params,
        value: value.to_string(),
    })
}
