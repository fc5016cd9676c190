//! Draco Core Library
//!
//! Geometry model (meshes, point clouds, named attributes), encoder options
//! and the sequential bitstream encoder used by the Draco encoder tool.

pub mod compression_config;
pub mod draco_types;
pub mod encode;
pub mod encoder_buffer;
pub mod encoder_options;
pub mod geometry_attribute;
pub mod geometry_indices;
pub mod mesh;
pub mod mesh_encoder;
pub mod point_cloud;
pub mod point_cloud_encoder;
pub mod quantization_utils;
pub mod sequential_attribute_encoder;
pub mod status;
pub mod version;

pub use draco_types::DataType;
pub use encode::{encode_mesh_to_buffer, encode_point_cloud_to_buffer};
pub use encoder_buffer::EncoderBuffer;
pub use encoder_options::{
    create_default_encoder_options, set_named_attribute_quantization, set_speed_options, EncoderOptions,
};
pub use geometry_attribute::{GeometryAttributeType, PointAttribute};
pub use geometry_indices::{FaceIndex, PointIndex};
pub use mesh::Mesh;
pub use mesh_encoder::MeshEncoder;
pub use point_cloud::PointCloud;
pub use point_cloud_encoder::PointCloudEncoder;
pub use status::{DracoError, Status};
