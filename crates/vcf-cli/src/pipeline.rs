//! Cleaning pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Read**: load the input bytes
//! 2. **Decode**: detect the encoding and decode to UTF-8
//! 3. **Sanitize**: drop control characters
//! 4. **Parse**: split into vCard blocks
//! 5. **Validate**: normalize and check every record
//! 6. **Output**: write valid/invalid files, explanations, and the optional report
//!
//! Only reading the input, resolving encoding labels, and writing outputs can
//! fail; everything wrong with the data itself ends up as an invalid record.

use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use vcf_ingest::{
    DecodeOptions, decode, parse_records, read_input, resolve_encoding_label, sanitize,
};
use vcf_model::AssessedRecord;
use vcf_output::{InputSummary, RunReport, write_outputs, write_run_report};
use vcf_validate::{ValidateOptions, assess_blocks};

use crate::logging::redact_value;
use crate::types::{RunConfig, RunResult};

/// Resolve encoding labels from the configuration.
pub fn decode_options(config: &RunConfig) -> Result<DecodeOptions> {
    let encoding = config
        .encoding
        .as_deref()
        .map(resolve_encoding_label)
        .transpose()
        .context("resolve --encoding")?;
    let fallback =
        resolve_encoding_label(&config.fallback_encoding).context("resolve --fallback-encoding")?;
    Ok(DecodeOptions { encoding, fallback })
}

/// Reason codes only; messages can quote contact values such as phone numbers.
fn reason_fields(record: &AssessedRecord, log_data: bool) -> Vec<String> {
    record
        .verdict
        .reasons()
        .iter()
        .map(|reason| {
            if log_data {
                reason.to_string()
            } else {
                reason.code().to_string()
            }
        })
        .collect()
}

fn log_verdicts(records: &[AssessedRecord], log_data: bool) {
    for record in records {
        let label = record.label();
        let reasons = reason_fields(record, log_data);
        debug!(
            position = record.position,
            contact = redact_value(&label, log_data),
            valid = record.verdict.is_valid(),
            reasons = ?reasons,
            "verdict"
        );
    }
}

/// Run every stage for one input file.
pub fn run(config: &RunConfig) -> Result<RunResult> {
    let run_span = info_span!("run", input = %config.input.display());
    let _run_guard = run_span.enter();
    let start = Instant::now();

    let decode_options = decode_options(config)?;
    let paths = config.output_paths()?;

    // =========================================================================
    // Stage 1-3: Read, decode, sanitize
    // =========================================================================
    let bytes = read_input(&config.input)
        .with_context(|| format!("read input {}", config.input.display()))?;
    let decoded = decode(&bytes, &decode_options);
    drop(bytes);
    let sanitized = sanitize(&decoded.text);

    // =========================================================================
    // Stage 4-5: Parse and validate
    // =========================================================================
    let blocks = parse_records(&sanitized.text);
    let validate_options = ValidateOptions {
        normalize: config.normalize,
    };
    let records = assess_blocks(blocks, validate_options);
    log_verdicts(&records, config.log_data);

    let parsed = records.len();
    let valid = records.iter().filter(|r| r.verdict.is_valid()).count();
    let invalid = parsed - valid;
    let malformed = records.iter().filter(|r| r.block.is_malformed()).count();

    // =========================================================================
    // Stage 6: Output
    // =========================================================================
    let mut outputs = None;
    let mut report = None;
    if config.dry_run {
        info!("dry run: no files written");
    } else {
        let summary = write_outputs(&records, &paths).context("write outputs")?;
        debug_assert_eq!(summary.valid, valid);
        debug_assert_eq!(summary.invalid, invalid);
        info!(
            valid_output = %paths.valid.display(),
            invalid_output = %paths.invalid.display(),
            explanations = %paths.explanations.display(),
            "outputs written"
        );
        outputs = Some(paths);

        if let Some(path) = &config.report_json {
            let input = InputSummary {
                path: config.input.clone(),
                encoding: decoded.encoding.name().to_string(),
                detection: decoded.detection.to_string(),
                substitutions: decoded.substitutions,
                removed_controls: sanitized.removed,
            };
            write_run_report(path, &RunReport::new(input, &records))
                .context("write run report")?;
            report = Some(path.clone());
        }
    }

    info!(
        parsed,
        valid,
        invalid,
        malformed,
        duration_ms = start.elapsed().as_millis(),
        "run complete"
    );

    Ok(RunResult {
        input: config.input.clone(),
        encoding: decoded.encoding.name(),
        detection: decoded.detection,
        substitutions: decoded.substitutions,
        removed_controls: sanitized.removed,
        parsed,
        valid,
        invalid,
        malformed,
        outputs,
        report,
    })
}
