//! Command line surface of `draco_encoder`.
//!
//! The tool keeps Draco's single-dash flags (`-qp 14`, `-point_cloud`,
//! `-?`). [`normalize_args`] rewrites them to the `--` form clap expects
//! before parsing.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

use crate::request::{
    EncodingRequest, DEFAULT_COMPRESSION_LEVEL, DEFAULT_NORMALS_QUANTIZATION_BITS,
    DEFAULT_POSITION_QUANTIZATION_BITS, DEFAULT_TEX_COORDS_QUANTIZATION_BITS,
};

/// Single-dash long flags accepted for compatibility.
const LEGACY_LONG_FLAGS: &[&str] = &["point_cloud", "qp", "qt", "qn", "cl"];

/// Encodes a mesh or point cloud into a Draco .drc file.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "draco_encoder",
    version,
    override_usage = "draco_encoder [options] -i input"
)]
pub struct Args {
    /// Input file name.
    #[arg(short = 'i', value_name = "input")]
    pub input: PathBuf,

    /// Output file name (default: <input>.drc).
    #[arg(short = 'o', value_name = "output")]
    pub output: Option<PathBuf>,

    /// Forces the input to be encoded as a point cloud.
    #[arg(long = "point_cloud")]
    pub point_cloud: bool,

    /// Quantization bits for the position attribute (<= 0 disables).
    #[arg(long = "qp", value_name = "value", default_value_t = DEFAULT_POSITION_QUANTIZATION_BITS, allow_negative_numbers = true)]
    pub pos_quantization_bits: i32,

    /// Quantization bits for the texture coordinate attribute (<= 0 disables).
    #[arg(long = "qt", value_name = "value", default_value_t = DEFAULT_TEX_COORDS_QUANTIZATION_BITS, allow_negative_numbers = true)]
    pub tex_coords_quantization_bits: i32,

    /// Quantization bits for the normal vector attribute (<= 0 disables).
    #[arg(long = "qn", value_name = "value", default_value_t = DEFAULT_NORMALS_QUANTIZATION_BITS, allow_negative_numbers = true)]
    pub normals_quantization_bits: i32,

    /// Compression level [0-10], most=10, least=0.
    #[arg(
        long = "cl",
        value_name = "value",
        default_value_t = DEFAULT_COMPRESSION_LEVEL,
        value_parser = clap::value_parser!(i32).range(0..=10)
    )]
    pub compression_level: i32,

    /// Print debug logging to stderr.
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl Args {
    /// Parses Draco-style arguments; the first item is the program name.
    pub fn try_parse_legacy<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(normalize_args(args))
    }

    pub fn to_request(&self) -> EncodingRequest {
        EncodingRequest {
            source_path: self.input.clone(),
            output_path: self.output.clone(),
            is_point_cloud: self.point_cloud,
            pos_quantization_bits: self.pos_quantization_bits,
            tex_coords_quantization_bits: self.tex_coords_quantization_bits,
            normals_quantization_bits: self.normals_quantization_bits,
            compression_level: self.compression_level,
        }
    }
}

/// Rewrites `-qp`-style flags to `--qp` and `-?` to `--help`. Other
/// arguments pass through untouched.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            let rewritten = arg.to_str().and_then(|s| {
                let flag = s.strip_prefix('-')?;
                if flag == "?" {
                    Some(OsString::from("--help"))
                } else if LEGACY_LONG_FLAGS.contains(&flag) {
                    Some(OsString::from(format!("--{}", flag)))
                } else {
                    None
                }
            });
            rewritten.unwrap_or(arg)
        })
        .collect()
}
