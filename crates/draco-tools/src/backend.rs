//! Seams between the orchestrator and its collaborators.
//!
//! The pipeline only talks to a [`GeometryLoader`] and a
//! [`GeometryEncoder`]. The default implementations use the `draco-io`
//! readers and the `draco-core` sequential encoder.

use std::io;
use std::path::Path;

use draco_core::encoder_buffer::EncoderBuffer;
use draco_core::encoder_options::EncoderOptions;
use draco_core::mesh::Mesh;
use draco_core::point_cloud::PointCloud;
use draco_core::status::DracoError;
use draco_core::{encode_mesh_to_buffer, encode_point_cloud_to_buffer};

/// Loads geometry from a source file.
pub trait GeometryLoader {
    fn load_mesh(&self, path: &Path) -> io::Result<Mesh>;
    fn load_point_cloud(&self, path: &Path) -> io::Result<PointCloud>;
}

/// Produces an encoded bitstream from geometry and options.
pub trait GeometryEncoder {
    fn encode_mesh(&self, mesh: &Mesh, options: &EncoderOptions) -> Result<EncoderBuffer, DracoError>;
    fn encode_point_cloud(&self, pc: &PointCloud, options: &EncoderOptions) -> Result<EncoderBuffer, DracoError>;
}

/// Loader backed by the OBJ and PLY readers.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileLoader;

impl GeometryLoader for FileLoader {
    fn load_mesh(&self, path: &Path) -> io::Result<Mesh> {
        draco_io::read_mesh_from_file(path)
    }

    fn load_point_cloud(&self, path: &Path) -> io::Result<PointCloud> {
        draco_io::read_point_cloud_from_file(path)
    }
}

/// Encoder backed by the sequential bitstream encoder.
#[derive(Debug, Default, Clone, Copy)]
pub struct DracoEncoder;

impl GeometryEncoder for DracoEncoder {
    fn encode_mesh(&self, mesh: &Mesh, options: &EncoderOptions) -> Result<EncoderBuffer, DracoError> {
        let mut buffer = EncoderBuffer::new();
        encode_mesh_to_buffer(mesh, options, &mut buffer)?;
        Ok(buffer)
    }

    fn encode_point_cloud(&self, pc: &PointCloud, options: &EncoderOptions) -> Result<EncoderBuffer, DracoError> {
        let mut buffer = EncoderBuffer::new();
        encode_point_cloud_to_buffer(pc, options, &mut buffer)?;
        Ok(buffer)
    }
}
