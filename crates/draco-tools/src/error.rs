use std::io;
use std::path::PathBuf;

use draco_core::status::DracoError;
use thiserror::Error;

/// Process status reported for a successful run.
pub const EXIT_SUCCESS: i32 = 0;
/// Process status reported for any failed run.
pub const EXIT_FAILURE: i32 = -1;

/// Terminal failures of an encoder run.
///
/// The `Display` text is the line shown to the user; the source is only
/// logged.
#[derive(Error, Debug)]
pub enum EncodeToolError {
    #[error("Failed loading the input mesh.")]
    LoadMesh {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed loading the input point cloud.")]
    LoadPointCloud {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to encode the mesh.")]
    EncodeMesh(#[source] DracoError),
    #[error("Failed to encode the point cloud.")]
    EncodePointCloud(#[source] DracoError),
    #[error("Failed to create the output file.")]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to write the output file.")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl EncodeToolError {
    pub fn exit_code(&self) -> i32 {
        EXIT_FAILURE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_messages_and_sources() {
        let err = EncodeToolError::LoadMesh {
            path: PathBuf::from("cube.obj"),
            source: io::Error::new(io::ErrorKind::NotFound, "File not found: cube.obj"),
        };
        assert_eq!(err.to_string(), "Failed loading the input mesh.");
        assert_eq!(err.source().map(|s| s.to_string()).as_deref(), Some("File not found: cube.obj"));
        assert_eq!(err.exit_code(), -1);

        let err = EncodeToolError::EncodePointCloud(DracoError::InvalidParameter("bits".into()));
        assert_eq!(err.to_string(), "Failed to encode the point cloud.");
    }
}
