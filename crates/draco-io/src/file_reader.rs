//! Format dispatch by file extension.

use std::io;
use std::path::Path;

use draco_core::mesh::Mesh;
use draco_core::point_cloud::PointCloud;

use crate::obj_reader::ObjReader;
use crate::ply_reader::PlyReader;
use crate::traits::{PointCloudReader, Reader};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryFileFormat {
    Obj,
    Ply,
}

impl GeometryFileFormat {
    /// Detects the format from the (case-insensitive) file extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .map(|s| s.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "obj" => Ok(GeometryFileFormat::Obj),
            "ply" => Ok(GeometryFileFormat::Ply),
            _ => Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Unsupported geometry file format: {}", path.display()),
            )),
        }
    }
}

/// Loads `path` as a mesh. Files without connectivity yield a mesh with
/// zero faces.
pub fn read_mesh_from_file<P: AsRef<Path>>(path: P) -> io::Result<Mesh> {
    let path = path.as_ref();
    match GeometryFileFormat::from_path(path)? {
        GeometryFileFormat::Obj => ObjReader::open(path)?.read_mesh(),
        GeometryFileFormat::Ply => PlyReader::open(path)?.read_mesh(),
    }
}

/// Loads `path` as a point cloud, ignoring any connectivity.
pub fn read_point_cloud_from_file<P: AsRef<Path>>(path: P) -> io::Result<PointCloud> {
    let path = path.as_ref();
    match GeometryFileFormat::from_path(path)? {
        GeometryFileFormat::Obj => ObjReader::open(path)?.read_point_cloud(),
        GeometryFileFormat::Ply => PlyReader::open(path)?.read_point_cloud(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(GeometryFileFormat::from_path("a/b/cube.OBJ").unwrap(), GeometryFileFormat::Obj);
        assert_eq!(GeometryFileFormat::from_path("bunny.ply").unwrap(), GeometryFileFormat::Ply);
        let err = GeometryFileFormat::from_path("scene.fbx").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert!(GeometryFileFormat::from_path("noext").is_err());
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let err = read_mesh_from_file("/nonexistent/cube.obj").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
