use crate::compression_config::{EncodedGeometryType, IndexCoding};
use crate::encoder_buffer::EncoderBuffer;
use crate::encoder_options::EncoderOptions;
use crate::geometry_indices::PointIndex;
use crate::mesh::Mesh;
use crate::point_cloud_encoder::encode_header;
use crate::sequential_attribute_encoder::encode_attributes;
use crate::status::{error_status, invalid_parameter, Status};
use crate::version::DEFAULT_MESH_VERSION;

/// Sequential triangle mesh encoder.
///
/// Layout: header, number of faces (varint), number of points (varint),
/// index coding id, face indices, attributes.
pub struct MeshEncoder<'a> {
    mesh: Option<&'a Mesh>,
}

impl<'a> Default for MeshEncoder<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> MeshEncoder<'a> {
    pub fn new() -> Self {
        Self { mesh: None }
    }

    pub fn set_mesh(&mut self, mesh: &'a Mesh) {
        self.mesh = Some(mesh);
    }

    pub fn encode(&self, options: &EncoderOptions, out_buffer: &mut EncoderBuffer) -> Status {
        let mesh = self.mesh.ok_or_else(|| error_status("Mesh not set"))?;
        if mesh.num_attributes() == 0 {
            return Err(error_status("Mesh has no attributes"));
        }

        encode_header(out_buffer, EncodedGeometryType::TriangularMesh, DEFAULT_MESH_VERSION);
        self.encode_connectivity(mesh, options, out_buffer)?;

        let point_ids: Vec<PointIndex> = (0..mesh.num_points()).map(PointIndex::from).collect();
        encode_attributes(mesh, &point_ids, options, out_buffer)
    }

    fn encode_connectivity(&self, mesh: &Mesh, options: &EncoderOptions, out_buffer: &mut EncoderBuffer) -> Status {
        let num_points = mesh.num_points();
        if let Some(face) = mesh
            .faces()
            .iter()
            .find(|face| face.iter().any(|p| p.0 as usize >= num_points))
        {
            return Err(invalid_parameter(format!(
                "Face {:?} references a point outside [0, {})",
                face, num_points
            )));
        }

        out_buffer.encode_varint(mesh.num_faces() as u64);
        out_buffer.encode_varint(num_points as u64);

        let coding = IndexCoding::for_speed(options.get_encoding_speed());
        out_buffer.encode_u8(coding as u8);

        let indices = mesh.faces().iter().flat_map(|face| face.iter().map(|p| p.0));
        match coding {
            IndexCoding::Raw => {
                for index in indices {
                    out_buffer.encode_u32(index);
                }
            }
            IndexCoding::DeltaVarint => {
                let mut last = 0i64;
                for index in indices {
                    let delta = index as i64 - last;
                    out_buffer.encode_varint(zigzag(delta));
                    last = index as i64;
                }
            }
        }
        Ok(())
    }
}

fn zigzag(value: i64) -> u64 {
    ((value << 1) ^ (value >> 63)) as u64
}
