//! Human-readable log of why records were rejected.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use vcf_model::AssessedRecord;

use crate::error::{OutputError, Result};
use crate::writer::create_output;

/// Default file name, placed next to the invalid-records output.
pub const EXPLANATIONS_FILE_NAME: &str = "invalid_explanations.txt";

/// Explanation log location for a given invalid-records path.
pub fn default_explanations_path(invalid_output: &Path) -> PathBuf {
    match invalid_output.parent() {
        Some(dir) => dir.join(EXPLANATIONS_FILE_NAME),
        None => PathBuf::from(EXPLANATIONS_FILE_NAME),
    }
}

/// Format one entry:
///
/// ```text
/// Contact: <label>
///   - <reason>
///
/// ```
pub fn format_entry(record: &AssessedRecord) -> String {
    let mut entry = format!("Contact: {}\n", record.label());
    for reason in record.verdict.reasons() {
        entry.push_str("  - ");
        entry.push_str(&reason.to_string());
        entry.push('\n');
    }
    entry.push('\n');
    entry
}

/// An open explanation log. Entries are appended in call order; [`finish`]
/// flushes and closes it.
///
/// [`finish`]: ExplanationLog::finish
pub struct ExplanationLog<W: Write> {
    writer: W,
    path: PathBuf,
    entries: usize,
}

impl ExplanationLog<BufWriter<File>> {
    /// Create (truncating) the log file at `path`.
    pub fn create(path: &Path) -> Result<Self> {
        let file = create_output(path)?;
        Ok(Self::new(BufWriter::new(file), path))
    }
}

impl<W: Write> ExplanationLog<W> {
    pub fn new(writer: W, path: &Path) -> Self {
        Self {
            writer,
            path: path.to_path_buf(),
            entries: 0,
        }
    }

    /// Append an entry for an invalid record. Valid records are skipped.
    pub fn append(&mut self, record: &AssessedRecord) -> Result<()> {
        if record.verdict.is_valid() {
            return Ok(());
        }
        self.writer
            .write_all(format_entry(record).as_bytes())
            .map_err(|source| self.write_error(source))?;
        self.entries += 1;
        Ok(())
    }

    pub fn entries(&self) -> usize {
        self.entries
    }

    /// Flush and close, returning the entry count.
    pub fn finish(mut self) -> Result<usize> {
        self.writer
            .flush()
            .map_err(|source| self.write_error(source))?;
        tracing::debug!(path = %self.path.display(), entries = self.entries, "explanations written");
        Ok(self.entries)
    }

    fn write_error(&self, source: io::Error) -> OutputError {
        OutputError::Write {
            path: self.path.clone(),
            source,
        }
    }
}
