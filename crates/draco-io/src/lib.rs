//! Draco I/O library: geometry file readers.
//!
//! | Format | Mesh | Point cloud |
//! |--------|------|-------------|
//! | OBJ    | ✓    | ✓           |
//! | PLY    | ✓    | ✓           |
//!
//! All readers implement [`Reader`] and [`PointCloudReader`]. The
//! [`read_mesh_from_file`] and [`read_point_cloud_from_file`] helpers pick
//! the reader from the file extension:
//!
//! ```ignore
//! let mesh = draco_io::read_mesh_from_file("cube.obj")?;
//! let pc = draco_io::read_point_cloud_from_file("scan.ply")?;
//! ```

pub mod file_reader;
pub mod obj_reader;
pub mod ply_reader;
pub mod traits;

pub use file_reader::{read_mesh_from_file, read_point_cloud_from_file, GeometryFileFormat};
pub use obj_reader::ObjReader;
pub use ply_reader::PlyReader;
pub use traits::{PointCloudReader, Reader};
