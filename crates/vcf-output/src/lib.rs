//! Output generation for vcf-clean.
//!
//! - **Serialization**: records back to vCard text, CRLF, folded at 75 octets
//! - **Partitioning**: valid and invalid records into separate files, input order kept
//! - **Explanations**: one log entry per invalid record with its reasons
//! - **Run report**: optional JSON summary

mod error;
mod explanations;
mod report;
mod serialize;
mod writer;

pub use error::{OutputError, Result};
pub use explanations::{
    EXPLANATIONS_FILE_NAME, ExplanationLog, default_explanations_path, format_entry,
};
pub use report::{InputSummary, InvalidRecordJson, ReasonJson, RunReport, write_run_report};
pub use serialize::{
    FOLD_WIDTH, property_line, push_folded, push_soft_broken, serialize_block,
    serialize_malformed, serialize_record,
};
pub use writer::{OutputPaths, WriteSummary, partition, write_outputs, write_records};
