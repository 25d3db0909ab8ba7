//! Encoding detection and decoding to UTF-8.

use std::fmt;

use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_8};

use crate::error::{IngestError, Result};

/// How the source encoding was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Detection {
    /// Caller supplied the encoding.
    Override,
    /// Byte-order mark at the start of the input.
    Bom,
    /// Input was already valid UTF-8.
    Utf8,
    /// Statistical guess from byte patterns.
    Statistical,
    /// Nothing to detect from; the fallback encoding was used.
    Fallback,
}

impl fmt::Display for Detection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Override => "override",
            Self::Bom => "bom",
            Self::Utf8 => "utf-8 validation",
            Self::Statistical => "statistical",
            Self::Fallback => "fallback",
        };
        f.write_str(label)
    }
}

/// Decoder settings.
#[derive(Debug, Clone, Copy)]
pub struct DecodeOptions {
    /// Skip detection and decode with this encoding.
    pub encoding: Option<&'static Encoding>,
    /// Used when detection has no evidence to work with.
    pub fallback: &'static Encoding,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            encoding: None,
            fallback: UTF_8,
        }
    }
}

/// Text decoded from raw input.
#[derive(Debug, Clone)]
pub struct Decoded {
    pub text: String,
    pub encoding: &'static Encoding,
    pub detection: Detection,
    /// Replacement characters inserted for unmappable byte sequences.
    pub substitutions: usize,
}

/// Resolve a WHATWG encoding label such as `latin1` or `utf-16le`.
pub fn resolve_encoding_label(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes()).ok_or_else(|| IngestError::UnknownEncoding {
        label: label.to_string(),
    })
}

/// Pick the most probable encoding for `bytes`.
///
/// Fails with [`IngestError::EncodingUndetectable`] only when there are no
/// bytes to sample.
pub fn detect_encoding(bytes: &[u8]) -> Result<(&'static Encoding, Detection)> {
    if bytes.is_empty() {
        return Err(IngestError::EncodingUndetectable);
    }
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return Ok((encoding, Detection::Bom));
    }
    if std::str::from_utf8(bytes).is_ok() {
        return Ok((UTF_8, Detection::Utf8));
    }
    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    Ok((detector.guess(None, true), Detection::Statistical))
}

/// Decode raw input into UTF-8 text. Never fails: undecodable sequences become
/// U+FFFD and an undetectable encoding falls back to `options.fallback`.
pub fn decode(bytes: &[u8], options: &DecodeOptions) -> Decoded {
    let (encoding, detection) = match options.encoding {
        Some(encoding) => (encoding, Detection::Override),
        None => match detect_encoding(bytes) {
            Ok(found) => found,
            Err(error) => {
                tracing::warn!(
                    %error,
                    fallback = options.fallback.name(),
                    "using fallback encoding"
                );
                (options.fallback, Detection::Fallback)
            }
        },
    };

    let (text, had_errors) = encoding.decode_with_bom_removal(bytes);
    let substitutions = if had_errors {
        text.chars().filter(|&c| c == char::REPLACEMENT_CHARACTER).count()
    } else {
        0
    };

    tracing::info!(
        encoding = encoding.name(),
        %detection,
        substitutions,
        "input decoded"
    );

    Decoded {
        text: text.into_owned(),
        encoding,
        detection,
        substitutions,
    }
}
