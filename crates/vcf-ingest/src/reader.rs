//! Raw input loading.

use std::path::Path;

use crate::error::{IngestError, Result};

/// Maximum input size (64 MB default). Contact exports are far smaller.
pub const MAX_INPUT_FILE_SIZE: u64 = 64 * 1024 * 1024;

fn open_error(path: &Path, error: std::io::Error) -> IngestError {
    if error.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: error,
        }
    }
}

/// Check file size against a custom limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| open_error(path, e))?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

/// Read the whole input file as bytes.
pub fn read_input(path: &Path) -> Result<Vec<u8>> {
    check_file_size_with_limit(path, MAX_INPUT_FILE_SIZE)?;
    let bytes = std::fs::read(path).map_err(|e| open_error(path, e))?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "input read");
    Ok(bytes)
}
