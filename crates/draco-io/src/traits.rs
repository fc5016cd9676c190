//! Common traits for geometry readers.
//!
//! ```ignore
//! use draco_io::{ObjReader, Reader};
//!
//! fn load<R: Reader>(path: &str) -> io::Result<Mesh> {
//!     let mut reader = R::open(path)?;
//!     reader.read_mesh()
//! }
//! ```

use std::io;
use std::path::Path;

use draco_core::mesh::Mesh;
use draco_core::point_cloud::PointCloud;

/// Common interface for mesh readers.
pub trait Reader: Sized {
    /// Open a file for reading.
    fn open<P: AsRef<Path>>(path: P) -> io::Result<Self>;

    /// Read the file as a mesh. Files without faces yield a mesh with zero
    /// faces.
    fn read_mesh(&mut self) -> io::Result<Mesh>;
}

/// Readers that can load a file as a point cloud (connectivity ignored).
pub trait PointCloudReader: Reader {
    fn read_point_cloud(&mut self) -> io::Result<PointCloud>;
}
