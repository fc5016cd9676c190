use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use draco_core::encoder_buffer::EncoderBuffer;
use draco_core::encoder_options::{EncoderOptions, QUANTIZATION_BITS};
use draco_core::geometry_attribute::{GeometryAttributeType, PointAttribute};
use draco_core::geometry_indices::PointIndex;
use draco_core::mesh::Mesh;
use draco_core::point_cloud::PointCloud;
use draco_core::status::DracoError;
use draco_tools::{
    EncodeToolError, EncoderPipeline, EncodingRequest, GeometryEncoder, GeometryKind, GeometryLoader,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Call {
    LoadMesh,
    LoadPointCloud,
    EncodeMesh,
    EncodePointCloud,
}

#[derive(Default)]
struct FakeLoader {
    mesh: Option<Mesh>,
    point_cloud: Option<PointCloud>,
    calls: RefCell<Vec<Call>>,
}

impl GeometryLoader for FakeLoader {
    fn load_mesh(&self, path: &Path) -> io::Result<Mesh> {
        self.calls.borrow_mut().push(Call::LoadMesh);
        self.mesh
            .clone()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, format!("File not found: {}", path.display())))
    }

    fn load_point_cloud(&self, path: &Path) -> io::Result<PointCloud> {
        self.calls.borrow_mut().push(Call::LoadPointCloud);
        self.point_cloud
            .clone()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, format!("File not found: {}", path.display())))
    }
}

#[derive(Default)]
struct FakeEncoder {
    fail: bool,
    calls: RefCell<Vec<Call>>,
    options: RefCell<Option<EncoderOptions>>,
}

impl FakeEncoder {
    fn failing() -> Self {
        Self { fail: true, ..Self::default() }
    }

    fn output(&self, options: &EncoderOptions, call: Call) -> Result<EncoderBuffer, DracoError> {
        self.calls.borrow_mut().push(call);
        *self.options.borrow_mut() = Some(options.clone());
        if self.fail {
            return Err(DracoError::InvalidParameter("rejected".to_string()));
        }
        let mut buffer = EncoderBuffer::new();
        buffer.encode_data(b"FAKE-DRACO");
        Ok(buffer)
    }
}

impl GeometryEncoder for FakeEncoder {
    fn encode_mesh(&self, _mesh: &Mesh, options: &EncoderOptions) -> Result<EncoderBuffer, DracoError> {
        self.output(options, Call::EncodeMesh)
    }

    fn encode_point_cloud(&self, _pc: &PointCloud, options: &EncoderOptions) -> Result<EncoderBuffer, DracoError> {
        self.output(options, Call::EncodePointCloud)
    }
}

fn positions(n: usize) -> PointAttribute {
    let values: Vec<f32> = (0..n * 3).map(|i| i as f32).collect();
    PointAttribute::from_f32(GeometryAttributeType::Position, 3, &values)
}

/// Mesh with POSITION and NORMAL but no TEX_COORD.
fn cube_like_mesh(num_faces: usize) -> Mesh {
    let mut mesh = Mesh::new();
    mesh.add_attribute(positions(4));
    mesh.add_attribute(PointAttribute::from_f32(GeometryAttributeType::Normal, 3, &[0.0f32, 0.0, 1.0].repeat(4)));
    for _ in 0..num_faces {
        mesh.add_face([PointIndex(0), PointIndex(1), PointIndex(2)]);
    }
    mesh
}

fn request_in(dir: &Path, name: &str) -> EncodingRequest {
    EncodingRequest::new(dir.join(name))
}

fn run(pipeline: &EncoderPipeline<FakeLoader, FakeEncoder>, request: &EncodingRequest) -> (i32, String) {
    let mut out = Vec::new();
    let status = pipeline.run(request, &mut out);
    (status, String::from_utf8(out).unwrap())
}

#[test]
fn test_mesh_with_faces_takes_mesh_path() {
    let dir = tempfile::tempdir().unwrap();
    let loader = FakeLoader { mesh: Some(cube_like_mesh(2)), ..FakeLoader::default() };
    let pipeline = EncoderPipeline::with_backends(loader, FakeEncoder::default());
    let request = request_in(dir.path(), "cube.obj");

    let (status, text) = run(&pipeline, &request);
    assert_eq!(status, 0, "{}", text);

    let output_path = dir.path().join("cube.obj.drc");
    assert_eq!(fs::read(&output_path).unwrap(), b"FAKE-DRACO");
    assert_eq!(*pipeline.loader().calls.borrow(), [Call::LoadMesh]);
    assert_eq!(*pipeline.encoder().calls.borrow(), [Call::EncodeMesh]);

    let options = pipeline.encoder().options.borrow().clone().unwrap();
    assert_eq!(options.quantization_bits(0), 14);
    assert_eq!(options.quantization_bits(1), 10);
    assert!(!options.is_attribute_option_set(2, QUANTIZATION_BITS));
    assert_eq!(options.get_encoding_speed(), 5);
    assert_eq!(options.get_decoding_speed(), 5);

    assert!(text.starts_with(
        "Encoder options:\n  Compression level = 5\n  Positions: Quantization = 14 bits\n  Normals: Quantization = 10 bits\n\n"
    ));
    assert!(!text.contains("Texture coordinates"));
    assert!(text.contains(&format!("Encoded mesh saved to {} (", output_path.display())));
    assert!(text.ends_with("Encoded size = 10 bytes\n\n"));
}

#[test]
fn test_faceless_mesh_takes_point_cloud_path() {
    let dir = tempfile::tempdir().unwrap();
    let loader = FakeLoader { mesh: Some(cube_like_mesh(0)), ..FakeLoader::default() };
    let pipeline = EncoderPipeline::with_backends(loader, FakeEncoder::default());

    let mut out = Vec::new();
    let summary = pipeline.encode(&request_in(dir.path(), "points.obj"), &mut out).unwrap();

    assert_eq!(summary.kind, GeometryKind::PointCloud);
    assert_eq!(*pipeline.loader().calls.borrow(), [Call::LoadMesh]);
    assert_eq!(*pipeline.encoder().calls.borrow(), [Call::EncodePointCloud]);
    assert!(String::from_utf8(out).unwrap().contains("Encoded point cloud saved to"));
}

#[test]
fn test_point_cloud_request_uses_point_cloud_loader() {
    let dir = tempfile::tempdir().unwrap();
    let mut pc = PointCloud::new();
    pc.add_attribute(positions(5));
    let loader = FakeLoader { point_cloud: Some(pc), ..FakeLoader::default() };
    let pipeline = EncoderPipeline::with_backends(loader, FakeEncoder::default());
    let request = request_in(dir.path(), "scan.ply").with_point_cloud(true);

    let mut out = Vec::new();
    let summary = pipeline.encode(&request, &mut out).unwrap();

    assert_eq!(summary.kind, GeometryKind::PointCloud);
    assert_eq!(summary.encoded_size, 10);
    assert_eq!(summary.output_path, dir.path().join("scan.ply.drc"));
    assert!(summary.output_path.exists());
    assert_eq!(*pipeline.loader().calls.borrow(), [Call::LoadPointCloud]);
    assert_eq!(*pipeline.encoder().calls.borrow(), [Call::EncodePointCloud]);
}

#[test]
fn test_missing_mesh_source_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let pipeline = EncoderPipeline::with_backends(FakeLoader::default(), FakeEncoder::default());
    let request = request_in(dir.path(), "cube.obj");

    let (status, text) = run(&pipeline, &request);
    assert_ne!(status, 0);
    assert_eq!(text, "Failed loading the input mesh.\n");
    assert!(pipeline.encoder().calls.borrow().is_empty());
    assert!(!dir.path().join("cube.obj.drc").exists());
}

#[test]
fn test_missing_point_cloud_source_message() {
    let dir = tempfile::tempdir().unwrap();
    let pipeline = EncoderPipeline::with_backends(FakeLoader::default(), FakeEncoder::default());
    let request = request_in(dir.path(), "scan.ply").with_point_cloud(true);

    let (status, text) = run(&pipeline, &request);
    assert_eq!(status, -1);
    assert_eq!(text, "Failed loading the input point cloud.\n");
}

#[test]
fn test_encoder_failure_is_kind_specific() {
    let dir = tempfile::tempdir().unwrap();

    let loader = FakeLoader { mesh: Some(cube_like_mesh(1)), ..FakeLoader::default() };
    let pipeline = EncoderPipeline::with_backends(loader, FakeEncoder::failing());
    let (status, text) = run(&pipeline, &request_in(dir.path(), "cube.obj"));
    assert_eq!(status, -1);
    assert!(text.ends_with("Failed to encode the mesh.\n"));
    assert!(!dir.path().join("cube.obj.drc").exists());

    let loader = FakeLoader { mesh: Some(cube_like_mesh(0)), ..FakeLoader::default() };
    let pipeline = EncoderPipeline::with_backends(loader, FakeEncoder::failing());
    let mut out = Vec::new();
    let err = pipeline.encode(&request_in(dir.path(), "cube.obj"), &mut out).unwrap_err();
    assert!(matches!(err, EncodeToolError::EncodePointCloud(_)));
}

#[test]
fn test_unwritable_output_path() {
    let dir = tempfile::tempdir().unwrap();
    let loader = FakeLoader { mesh: Some(cube_like_mesh(1)), ..FakeLoader::default() };
    let pipeline = EncoderPipeline::with_backends(loader, FakeEncoder::default());
    let output: PathBuf = dir.path().join("no_such_dir").join("cube.drc");
    let request = request_in(dir.path(), "cube.obj").with_output_path(&output);

    let (status, text) = run(&pipeline, &request);
    assert_eq!(status, -1);
    assert!(text.ends_with("Failed to create the output file.\n"));
    assert!(!output.exists());
}

#[test]
fn test_disabled_quantization_is_reported_and_not_configured() {
    let dir = tempfile::tempdir().unwrap();
    let loader = FakeLoader { mesh: Some(cube_like_mesh(1)), ..FakeLoader::default() };
    let pipeline = EncoderPipeline::with_backends(loader, FakeEncoder::default());
    let request = request_in(dir.path(), "cube.obj")
        .with_quantization_bits(0, 12, 10)
        .with_compression_level(10);

    let (status, text) = run(&pipeline, &request);
    assert_eq!(status, 0);
    assert!(text.contains("  Positions: No quantization\n"));
    assert!(text.contains("  Compression level = 10\n"));

    let options = pipeline.encoder().options.borrow().clone().unwrap();
    assert!(!options.is_attribute_option_set(0, QUANTIZATION_BITS));
    assert_eq!(options.get_encoding_speed(), 0);
}
