//! Library components for the vcf-clean command line tool.

pub mod logging;
pub mod pipeline;
pub mod types;
