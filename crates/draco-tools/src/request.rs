//! The encoding request: everything one encoder run needs to know.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use draco_core::geometry_attribute::GeometryAttributeType;

/// Suffix appended to the source path when no output path is given.
pub const DEFAULT_OUTPUT_SUFFIX: &str = ".drc";

pub const DEFAULT_POSITION_QUANTIZATION_BITS: i32 = 14;
pub const DEFAULT_TEX_COORDS_QUANTIZATION_BITS: i32 = 12;
pub const DEFAULT_NORMALS_QUANTIZATION_BITS: i32 = 10;
pub const DEFAULT_COMPRESSION_LEVEL: i32 = 5;
pub const MAX_COMPRESSION_LEVEL: i32 = 10;

/// Options for one encoder run.
///
/// Quantization bit depths of zero or less disable quantization for that
/// attribute. `compression_level` is clamped into
/// `[0, MAX_COMPRESSION_LEVEL]` when converted to an encoder speed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodingRequest {
    pub source_path: PathBuf,
    pub output_path: Option<PathBuf>,
    pub is_point_cloud: bool,
    pub pos_quantization_bits: i32,
    pub tex_coords_quantization_bits: i32,
    pub normals_quantization_bits: i32,
    pub compression_level: i32,
}

impl EncodingRequest {
    /// A request for `source_path` with default options.
    pub fn new<P: Into<PathBuf>>(source_path: P) -> Self {
        Self {
            source_path: source_path.into(),
            output_path: None,
            is_point_cloud: false,
            pos_quantization_bits: DEFAULT_POSITION_QUANTIZATION_BITS,
            tex_coords_quantization_bits: DEFAULT_TEX_COORDS_QUANTIZATION_BITS,
            normals_quantization_bits: DEFAULT_NORMALS_QUANTIZATION_BITS,
            compression_level: DEFAULT_COMPRESSION_LEVEL,
        }
    }

    pub fn with_output_path<P: Into<PathBuf>>(mut self, output_path: P) -> Self {
        self.output_path = Some(output_path.into());
        self
    }

    pub fn with_point_cloud(mut self, is_point_cloud: bool) -> Self {
        self.is_point_cloud = is_point_cloud;
        self
    }

    pub fn with_quantization_bits(mut self, position: i32, tex_coords: i32, normals: i32) -> Self {
        self.pos_quantization_bits = position;
        self.tex_coords_quantization_bits = tex_coords;
        self.normals_quantization_bits = normals;
        self
    }

    pub fn with_compression_level(mut self, compression_level: i32) -> Self {
        self.compression_level = compression_level;
        self
    }

    /// Requested bit depth for each quantizable named attribute.
    pub fn quantization_bits(&self) -> [(GeometryAttributeType, i32); 3] {
        [
            (GeometryAttributeType::Position, self.pos_quantization_bits),
            (GeometryAttributeType::TexCoord, self.tex_coords_quantization_bits),
            (GeometryAttributeType::Normal, self.normals_quantization_bits),
        ]
    }

    /// Encoder speed for both encoding and decoding: 0 is slowest and
    /// densest, 10 is fastest.
    pub fn encoding_speed(&self) -> i32 {
        MAX_COMPRESSION_LEVEL - self.compression_level.clamp(0, MAX_COMPRESSION_LEVEL)
    }

    /// The explicit output path, or the source path with
    /// [`DEFAULT_OUTPUT_SUFFIX`] appended when none (or an empty one) was
    /// given.
    pub fn resolved_output_path(&self) -> PathBuf {
        match &self.output_path {
            Some(path) if !path.as_os_str().is_empty() => path.clone(),
            _ => default_output_path(&self.source_path),
        }
    }
}

fn default_output_path(source_path: &Path) -> PathBuf {
    let mut name = OsString::from(source_path.as_os_str());
    name.push(DEFAULT_OUTPUT_SUFFIX);
    PathBuf::from(name)
}
