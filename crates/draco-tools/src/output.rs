//! Persists the encoded buffer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::EncodeToolError;

/// Creates (or truncates) `path` and writes `data` in one call.
pub fn write_output_file(path: &Path, data: &[u8]) -> Result<(), EncodeToolError> {
    let mut file = File::create(path).map_err(|source| EncodeToolError::CreateOutput {
        path: path.to_path_buf(),
        source,
    })?;
    file.write_all(data)
        .and_then(|_| file.flush())
        .map_err(|source| EncodeToolError::WriteOutput {
            path: path.to_path_buf(),
            source,
        })
}
