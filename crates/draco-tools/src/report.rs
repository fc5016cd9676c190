//! User-facing report lines.

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use draco_core::geometry_attribute::GeometryAttributeType;
use draco_core::point_cloud::PointCloud;

use crate::geometry::GeometryKind;
use crate::request::EncodingRequest;

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeSummary {
    pub kind: GeometryKind,
    pub output_path: PathBuf,
    pub encode_time: Duration,
    pub encoded_size: usize,
}

fn write_quantization_line<W: Write>(out: &mut W, label: &str, bits: i32) -> io::Result<()> {
    if bits <= 0 {
        writeln!(out, "  {}: No quantization", label)
    } else {
        writeln!(out, "  {}: Quantization = {} bits", label, bits)
    }
}

/// Prints the options the encoder will run with. Texture coordinate and
/// normal lines appear only when `pc` has those attributes.
pub fn write_options_report<W: Write>(out: &mut W, pc: &PointCloud, request: &EncodingRequest) -> io::Result<()> {
    writeln!(out, "Encoder options:")?;
    writeln!(out, "  Compression level = {}", request.compression_level)?;
    write_quantization_line(out, "Positions", request.pos_quantization_bits)?;
    if pc.has_named_attribute(GeometryAttributeType::TexCoord) {
        write_quantization_line(out, "Texture coordinates", request.tex_coords_quantization_bits)?;
    }
    if pc.has_named_attribute(GeometryAttributeType::Normal) {
        write_quantization_line(out, "Normals", request.normals_quantization_bits)?;
    }
    writeln!(out)
}

pub fn write_result_report<W: Write>(out: &mut W, summary: &EncodeSummary) -> io::Result<()> {
    writeln!(
        out,
        "Encoded {} saved to {} ({} ms to encode)",
        summary.kind.label(),
        summary.output_path.display(),
        summary.encode_time.as_millis()
    )?;
    writeln!(out)?;
    writeln!(out, "Encoded size = {} bytes", summary.encoded_size)?;
    writeln!(out)
}
