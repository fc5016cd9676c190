//! The encoder run: load, configure, encode, write, report.

use std::io::Write;
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::backend::{DracoEncoder, FileLoader, GeometryEncoder, GeometryLoader};
use crate::config::build_encoder_options;
use crate::error::{EncodeToolError, EXIT_SUCCESS};
use crate::geometry::Geometry;
use crate::output::write_output_file;
use crate::report::{write_options_report, write_result_report, EncodeSummary};
use crate::request::EncodingRequest;

/// Drives one encoder run against a loader and an encoder.
///
/// Every stage failure is terminal. Report lines and the failure message
/// go to the `out` stream passed to [`EncoderPipeline::encode`] or
/// [`EncoderPipeline::run`].
#[derive(Debug, Default, Clone)]
pub struct EncoderPipeline<L = FileLoader, E = DracoEncoder> {
    loader: L,
    encoder: E,
}

impl EncoderPipeline {
    /// Pipeline using the OBJ/PLY readers and the sequential encoder.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<L: GeometryLoader, E: GeometryEncoder> EncoderPipeline<L, E> {
    pub fn with_backends(loader: L, encoder: E) -> Self {
        Self { loader, encoder }
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }

    pub fn encoder(&self) -> &E {
        &self.encoder
    }

    fn load(&self, request: &EncodingRequest) -> Result<Geometry, EncodeToolError> {
        let path = request.source_path.as_path();
        let geometry = if request.is_point_cloud {
            let pc = self
                .loader
                .load_point_cloud(path)
                .map_err(|source| EncodeToolError::LoadPointCloud { path: path.to_path_buf(), source })?;
            Geometry::PointCloud(pc)
        } else {
            let mesh = self
                .loader
                .load_mesh(path)
                .map_err(|source| EncodeToolError::LoadMesh { path: path.to_path_buf(), source })?;
            Geometry::Mesh(mesh)
        };
        debug!(
            path = %path.display(),
            points = geometry.point_cloud().num_points(),
            attributes = geometry.point_cloud().num_attributes(),
            "geometry loaded"
        );
        Ok(geometry.resolve())
    }

    /// Runs the pipeline and returns the summary of what was written.
    pub fn encode<W: Write>(&self, request: &EncodingRequest, out: &mut W) -> Result<EncodeSummary, EncodeToolError> {
        let geometry = self.load(request)?;
        let options = build_encoder_options(geometry.point_cloud(), request);
        let output_path = request.resolved_output_path();

        if let Err(e) = write_options_report(out, geometry.point_cloud(), request) {
            warn!(error = %e, "failed to print encoder options");
        }

        let kind = geometry.kind();
        let start = Instant::now();
        let buffer = match &geometry {
            Geometry::Mesh(mesh) => self.encoder.encode_mesh(mesh, &options),
            Geometry::PointCloud(pc) => self.encoder.encode_point_cloud(pc, &options),
        };
        let encode_time = start.elapsed();
        let buffer = buffer.map_err(|e| match &geometry {
            Geometry::Mesh(_) => EncodeToolError::EncodeMesh(e),
            Geometry::PointCloud(_) => EncodeToolError::EncodePointCloud(e),
        })?;
        drop(geometry);

        write_output_file(&output_path, buffer.data())?;

        let summary = EncodeSummary {
            kind,
            output_path,
            encode_time,
            encoded_size: buffer.size(),
        };
        info!(
            kind = kind.label(),
            path = %summary.output_path.display(),
            bytes = summary.encoded_size,
            ms = summary.encode_time.as_millis() as u64,
            "encoded"
        );
        if let Err(e) = write_result_report(out, &summary) {
            warn!(error = %e, "failed to print encoder result");
        }
        Ok(summary)
    }

    /// Runs the pipeline and maps the outcome to a process status:
    /// [`EXIT_SUCCESS`] or [`crate::error::EXIT_FAILURE`]. On failure the
    /// stage message is written to `out`.
    pub fn run<W: Write>(&self, request: &EncodingRequest, out: &mut W) -> i32 {
        match self.encode(request, out) {
            Ok(_) => EXIT_SUCCESS,
            Err(e) => {
                let cause = std::error::Error::source(&e).map(|s| s.to_string()).unwrap_or_default();
                debug!(error = %e, cause = %cause, "encoder run failed");
                if let Err(io_err) = writeln!(out, "{}", e) {
                    warn!(error = %io_err, "failed to print error message");
                }
                e.exit_code()
            }
        }
    }
}
