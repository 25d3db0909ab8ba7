//! CLI argument definitions for vcf-clean.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "vcf-clean",
    version,
    about = "Split a vCard file into import-ready and defective contacts",
    long_about = "Split a vCard file into import-ready and defective contacts.\n\n\
                  The input is decoded from whatever encoding it uses, stripped of\n\
                  control characters, and every contact is checked for a full name,\n\
                  legal name characters, a phone or email, and well-formed phone\n\
                  numbers. Rejected contacts are explained in invalid_explanations.txt\n\
                  next to the invalid output."
)]
pub struct Cli {
    /// vCard file to check.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Where import-ready contacts are written.
    #[arg(value_name = "VALID_OUTPUT")]
    pub valid_output: PathBuf,

    /// Where defective contacts are written.
    #[arg(value_name = "INVALID_OUTPUT")]
    pub invalid_output: PathBuf,

    /// Explanation log path (default: invalid_explanations.txt next to INVALID_OUTPUT).
    #[arg(long = "explanations", value_name = "PATH")]
    pub explanations: Option<PathBuf>,

    /// Decode the input with this encoding instead of detecting it (e.g. latin1, utf-16le).
    #[arg(long = "encoding", value_name = "LABEL")]
    pub encoding: Option<String>,

    /// Encoding to use when detection has nothing to go on.
    #[arg(long = "fallback-encoding", value_name = "LABEL", default_value = "utf-8")]
    pub fallback_encoding: String,

    /// Keep values exactly as read instead of trimming names, phones and emails.
    #[arg(long = "no-normalize")]
    pub no_normalize: bool,

    /// Validate and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Also write a JSON run report to this path.
    #[arg(long = "report-json", value_name = "PATH")]
    pub report_json: Option<PathBuf>,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Include contact names in diagnostic logs.
    #[arg(long = "log-data")]
    pub log_data: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_positional_paths() {
        let cli = Cli::try_parse_from(["vcf-clean", "in.vcf", "ok.vcf", "bad.vcf"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("in.vcf"));
        assert_eq!(cli.valid_output, PathBuf::from("ok.vcf"));
        assert_eq!(cli.invalid_output, PathBuf::from("bad.vcf"));
        assert_eq!(cli.fallback_encoding, "utf-8");
        assert!(!cli.no_normalize);
    }

    #[test]
    fn test_missing_positional_is_rejected() {
        assert!(Cli::try_parse_from(["vcf-clean", "in.vcf", "ok.vcf"]).is_err());
    }
}
