//! Machine-readable JSON summary of a run.

use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::Serialize;

use vcf_model::AssessedRecord;

use crate::error::{OutputError, Result};
use crate::writer::create_output;

const REPORT_SCHEMA: &str = "vcf-clean.run-report";
const REPORT_SCHEMA_VERSION: u32 = 1;

/// Decoding and sanitizing facts gathered before parsing.
#[derive(Debug, Clone, Serialize)]
pub struct InputSummary {
    pub path: PathBuf,
    pub encoding: String,
    pub detection: String,
    pub substitutions: usize,
    pub removed_controls: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReasonJson {
    pub code: &'static str,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct InvalidRecordJson {
    pub position: usize,
    pub label: String,
    pub reasons: Vec<ReasonJson>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub schema: &'static str,
    pub schema_version: u32,
    pub generated_at: String,
    pub input: InputSummary,
    pub parsed: usize,
    pub valid: usize,
    pub invalid: usize,
    pub malformed: usize,
    pub invalid_records: Vec<InvalidRecordJson>,
}

impl RunReport {
    pub fn new(input: InputSummary, records: &[AssessedRecord]) -> Self {
        let invalid_records: Vec<InvalidRecordJson> = records
            .iter()
            .filter(|record| !record.verdict.is_valid())
            .map(|record| InvalidRecordJson {
                position: record.position,
                label: record.label(),
                reasons: record
                    .verdict
                    .reasons()
                    .iter()
                    .map(|reason| ReasonJson {
                        code: reason.code(),
                        message: reason.to_string(),
                    })
                    .collect(),
            })
            .collect();
        Self {
            schema: REPORT_SCHEMA,
            schema_version: REPORT_SCHEMA_VERSION,
            generated_at: Utc::now().to_rfc3339(),
            input,
            parsed: records.len(),
            valid: records.len() - invalid_records.len(),
            invalid: invalid_records.len(),
            malformed: records.iter().filter(|r| r.block.is_malformed()).count(),
            invalid_records,
        }
    }
}

pub fn write_run_report(path: &Path, report: &RunReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    let mut file = create_output(path)?;
    file.write_all(format!("{json}\n").as_bytes())
        .map_err(|source| OutputError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::debug!(path = %path.display(), "run report written");
    Ok(())
}
