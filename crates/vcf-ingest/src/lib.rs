//! vCard ingestion utilities.
//!
//! This crate turns raw input bytes into parsed contact blocks:
//!
//! - **Reading**: load the input file with a size limit
//! - **Decoding**: detect the source encoding and decode to UTF-8
//! - **Sanitizing**: strip control characters that break line parsing
//! - **Parsing**: split text into `BEGIN:VCARD` blocks with per-block isolation
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use vcf_ingest::{DecodeOptions, decode, parse_records, read_input, sanitize};
//!
//! let bytes = read_input(Path::new("contacts.vcf"))?;
//! let decoded = decode(&bytes, &DecodeOptions::default());
//! let sanitized = sanitize(&decoded.text);
//! let blocks = parse_records(&sanitized.text);
//! ```

mod decode;
mod error;
mod parse;
mod reader;
mod sanitize;

// === Error Types ===
pub use error::{IngestError, Result};

// === Reading ===
pub use reader::{MAX_INPUT_FILE_SIZE, check_file_size_with_limit, read_input};

// === Decoding ===
pub use encoding_rs::Encoding;
pub use decode::{
    DecodeOptions, Decoded, Detection, decode, detect_encoding, resolve_encoding_label,
};

// === Sanitizing ===
pub use sanitize::{Sanitized, is_disallowed_control, sanitize};

// === Parsing ===
pub use parse::{LineError, parse_block, parse_content_line, parse_records, unfold_lines};
