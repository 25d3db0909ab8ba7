//! Stable partition of assessed records into the two vCard outputs.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use vcf_model::AssessedRecord;

use crate::error::{OutputError, Result};
use crate::explanations::ExplanationLog;
use crate::serialize::serialize_block;

/// Where the three artifacts of a run are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub valid: PathBuf,
    pub invalid: PathBuf,
    pub explanations: PathBuf,
}

/// Counts produced by [`write_outputs`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteSummary {
    pub valid: usize,
    pub invalid: usize,
    pub explanations: usize,
}

/// Split records by verdict, keeping input order within each side.
pub fn partition(records: &[AssessedRecord]) -> (Vec<&AssessedRecord>, Vec<&AssessedRecord>) {
    records.iter().partition(|record| record.verdict.is_valid())
}

/// Create (truncating) an output file, making parent directories as needed.
pub(crate) fn create_output(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|source| OutputError::Create {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    File::create(path).map_err(|source| OutputError::Create {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialize `records` to `writer` in order.
pub fn write_records<W: Write>(
    writer: &mut W,
    records: &[&AssessedRecord],
) -> std::io::Result<()> {
    for record in records {
        writer.write_all(serialize_block(&record.block).as_bytes())?;
    }
    writer.flush()
}

fn write_record_file(path: &Path, records: &[&AssessedRecord]) -> Result<()> {
    let mut writer = BufWriter::new(create_output(path)?);
    write_records(&mut writer, records).map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), records = records.len(), "records written");
    Ok(())
}

/// Write valid records, invalid records and the explanation log.
///
/// All three files are created even when they end up empty. Files are written
/// in place, so a failure part-way can leave earlier files complete and the
/// failing one partial.
pub fn write_outputs(records: &[AssessedRecord], paths: &OutputPaths) -> Result<WriteSummary> {
    let (valid, invalid) = partition(records);

    write_record_file(&paths.valid, &valid)?;
    write_record_file(&paths.invalid, &invalid)?;

    let mut log = ExplanationLog::create(&paths.explanations)?;
    for record in &invalid {
        log.append(record)?;
    }
    let explanations = log.finish()?;

    Ok(WriteSummary {
        valid: valid.len(),
        invalid: invalid.len(),
        explanations,
    })
}
