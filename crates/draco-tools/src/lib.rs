//! Draco encoder tool.
//!
//! Loads a mesh or point cloud, turns the user's quantization and
//! compression level choices into [`EncoderOptions`](draco_core::EncoderOptions),
//! encodes the geometry and writes the `.drc` file:
//!
//! ```ignore
//! use draco_tools::{EncoderPipeline, EncodingRequest};
//!
//! let request = EncodingRequest::new("cube.obj").with_compression_level(7);
//! let status = EncoderPipeline::new().run(&request, &mut std::io::stdout());
//! ```
//!
//! The loader and encoder are reached through the [`GeometryLoader`] and
//! [`GeometryEncoder`] traits so the pipeline can run against other
//! backends.

pub mod backend;
pub mod cli;
pub mod config;
pub mod error;
pub mod geometry;
pub mod output;
pub mod pipeline;
pub mod report;
pub mod request;

#[cfg(feature = "c-api")]
pub mod c_api;

pub use backend::{DracoEncoder, FileLoader, GeometryEncoder, GeometryLoader};
pub use cli::Args;
pub use config::build_encoder_options;
pub use error::{EncodeToolError, EXIT_FAILURE, EXIT_SUCCESS};
pub use geometry::{Geometry, GeometryKind};
pub use output::write_output_file;
pub use pipeline::EncoderPipeline;
pub use report::EncodeSummary;
pub use request::{EncodingRequest, DEFAULT_OUTPUT_SUFFIX};
