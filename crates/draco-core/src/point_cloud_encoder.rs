use crate::compression_config::EncodedGeometryType;
use crate::encoder_buffer::EncoderBuffer;
use crate::encoder_options::EncoderOptions;
use crate::geometry_indices::PointIndex;
use crate::point_cloud::PointCloud;
use crate::sequential_attribute_encoder::encode_attributes;
use crate::status::{error_status, Status};
use crate::version::{DEFAULT_POINT_CLOUD_SEQUENTIAL_VERSION, DRACO_MAGIC, SEQUENTIAL_ENCODING_METHOD};

/// Sequential point cloud encoder.
///
/// Layout: header, number of points (varint), attributes.
pub struct PointCloudEncoder<'a> {
    point_cloud: Option<&'a PointCloud>,
}

impl<'a> Default for PointCloudEncoder<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> PointCloudEncoder<'a> {
    pub fn new() -> Self {
        Self { point_cloud: None }
    }

    pub fn set_point_cloud(&mut self, pc: &'a PointCloud) {
        self.point_cloud = Some(pc);
    }

    pub fn encode(&self, options: &EncoderOptions, out_buffer: &mut EncoderBuffer) -> Status {
        let pc = self
            .point_cloud
            .ok_or_else(|| error_status("Point cloud not set"))?;
        if pc.num_attributes() == 0 {
            return Err(error_status("Point cloud has no attributes"));
        }

        encode_header(out_buffer, EncodedGeometryType::PointCloud, DEFAULT_POINT_CLOUD_SEQUENTIAL_VERSION);
        out_buffer.encode_varint(pc.num_points() as u64);

        let point_ids: Vec<PointIndex> = (0..pc.num_points()).map(PointIndex::from).collect();
        encode_attributes(pc, &point_ids, options, out_buffer)
    }
}

pub(crate) fn encode_header(buffer: &mut EncoderBuffer, geometry_type: EncodedGeometryType, version: (u8, u8)) {
    let (major, minor) = version;
    buffer.encode_data(DRACO_MAGIC);
    buffer.encode_u8(major);
    buffer.encode_u8(minor);
    buffer.set_version(major, minor);
    buffer.encode_u8(geometry_type as u8);
    buffer.encode_u8(SEQUENTIAL_ENCODING_METHOD);
    buffer.encode_u16(0); // Flags
}
