use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

use vcf_ingest::Detection;
use vcf_output::{OutputPaths, default_explanations_path};

/// Everything a run needs, resolved from the command line.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input: PathBuf,
    pub valid_output: PathBuf,
    pub invalid_output: PathBuf,
    /// Overrides the default explanation log location.
    pub explanations: Option<PathBuf>,
    /// Encoding label that bypasses detection.
    pub encoding: Option<String>,
    pub fallback_encoding: String,
    pub normalize: bool,
    pub dry_run: bool,
    pub report_json: Option<PathBuf>,
    /// Whether contact names may appear in diagnostics.
    pub log_data: bool,
}

impl RunConfig {
    pub fn new(input: &Path, valid_output: &Path, invalid_output: &Path) -> Self {
        Self {
            input: input.to_path_buf(),
            valid_output: valid_output.to_path_buf(),
            invalid_output: invalid_output.to_path_buf(),
            explanations: None,
            encoding: None,
            fallback_encoding: "utf-8".to_string(),
            normalize: true,
            dry_run: false,
            report_json: None,
            log_data: false,
        }
    }

    /// Resolve the three output locations.
    ///
    /// Fails when two of them are the same path, since one file would
    /// silently overwrite the other.
    pub fn output_paths(&self) -> Result<OutputPaths> {
        let paths = OutputPaths {
            valid: self.valid_output.clone(),
            invalid: self.invalid_output.clone(),
            explanations: self
                .explanations
                .clone()
                .unwrap_or_else(|| default_explanations_path(&self.invalid_output)),
        };
        if paths.valid == paths.invalid {
            bail!(
                "valid and invalid outputs are the same file: {}",
                paths.valid.display()
            );
        }
        if paths.explanations == paths.valid || paths.explanations == paths.invalid {
            bail!(
                "explanation log {} collides with an output file; pass --explanations",
                paths.explanations.display()
            );
        }
        Ok(paths)
    }
}

#[derive(Debug)]
pub struct RunResult {
    pub input: PathBuf,
    pub encoding: &'static str,
    pub detection: Detection,
    pub substitutions: usize,
    pub removed_controls: usize,
    pub parsed: usize,
    pub valid: usize,
    pub invalid: usize,
    pub malformed: usize,
    /// `None` for dry runs.
    pub outputs: Option<OutputPaths>,
    pub report: Option<PathBuf>,
}
