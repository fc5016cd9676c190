//! Top-level encoding entry points.

use crate::encoder_buffer::EncoderBuffer;
use crate::encoder_options::EncoderOptions;
use crate::mesh::Mesh;
use crate::mesh_encoder::MeshEncoder;
use crate::point_cloud::PointCloud;
use crate::point_cloud_encoder::PointCloudEncoder;
use crate::status::Status;

/// Encodes `pc` into `out_buffer`. On failure `out_buffer` may hold a
/// partial bitstream and must be discarded.
pub fn encode_point_cloud_to_buffer(pc: &PointCloud, options: &EncoderOptions, out_buffer: &mut EncoderBuffer) -> Status {
    let mut encoder = PointCloudEncoder::new();
    encoder.set_point_cloud(pc);
    encoder.encode(options, out_buffer)
}

/// Encodes `mesh` including its connectivity into `out_buffer`.
pub fn encode_mesh_to_buffer(mesh: &Mesh, options: &EncoderOptions, out_buffer: &mut EncoderBuffer) -> Status {
    let mut encoder = MeshEncoder::new();
    encoder.set_mesh(mesh);
    encoder.encode(options, out_buffer)
}
