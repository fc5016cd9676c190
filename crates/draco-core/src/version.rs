// Bitstream constants written by the sequential encoders.

/// Magic string at the start of every encoded file.
pub const DRACO_MAGIC: &[u8; 5] = b"DRACO";

/// Version written by the point cloud encoder.
pub const DEFAULT_POINT_CLOUD_SEQUENTIAL_VERSION: (u8, u8) = (2, 3);

/// Version written by the mesh encoder.
pub const DEFAULT_MESH_VERSION: (u8, u8) = (2, 2);

/// Sequential encoding method id (same value for meshes and point clouds).
pub const SEQUENTIAL_ENCODING_METHOD: u8 = 0;

/// Largest quantization bit depth accepted by the encoders.
pub const MAX_QUANTIZATION_BITS: i32 = 30;
