use crate::draco_types::DataType;
use crate::geometry_indices::PointIndex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryAttributeType {
    Invalid = -1,
    Position = 0,
    Normal,
    Color,
    TexCoord,
    Generic,
}

impl GeometryAttributeType {
    pub const fn name(self) -> &'static str {
        match self {
            GeometryAttributeType::Invalid => "INVALID",
            GeometryAttributeType::Position => "POSITION",
            GeometryAttributeType::Normal => "NORMAL",
            GeometryAttributeType::Color => "COLOR",
            GeometryAttributeType::TexCoord => "TEX_COORD",
            GeometryAttributeType::Generic => "GENERIC",
        }
    }
}

/// Per-point attribute storage.
///
/// Values are stored tightly packed in little-endian byte order, one entry
/// per point (identity mapping between points and attribute values).
#[derive(Debug, Clone)]
pub struct PointAttribute {
    attribute_type: GeometryAttributeType,
    data_type: DataType,
    num_components: u8,
    normalized: bool,
    unique_id: u32,
    buffer: Vec<u8>,
    num_values: usize,
}

impl Default for PointAttribute {
    fn default() -> Self {
        Self {
            attribute_type: GeometryAttributeType::Invalid,
            data_type: DataType::Invalid,
            num_components: 0,
            normalized: false,
            unique_id: 0,
            buffer: Vec::new(),
            num_values: 0,
        }
    }
}

impl PointAttribute {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn init(
        &mut self,
        attribute_type: GeometryAttributeType,
        num_components: u8,
        data_type: DataType,
        normalized: bool,
        num_attribute_values: usize,
    ) {
        self.attribute_type = attribute_type;
        self.num_components = num_components;
        self.data_type = data_type;
        self.normalized = normalized;
        self.num_values = num_attribute_values;
        self.buffer.clear();
        self.buffer.resize(num_attribute_values * self.byte_stride(), 0);
    }

    /// Builds a float attribute from `values`, grouped into entries of
    /// `num_components` floats.
    pub fn from_f32(attribute_type: GeometryAttributeType, num_components: u8, values: &[f32]) -> Self {
        let mut att = Self::new();
        let num_values = if num_components == 0 {
            0
        } else {
            values.len() / num_components as usize
        };
        att.init(attribute_type, num_components, DataType::Float32, false, num_values);
        for (i, v) in values.iter().take(num_values * num_components as usize).enumerate() {
            att.buffer[i * 4..i * 4 + 4].copy_from_slice(&v.to_le_bytes());
        }
        att
    }

    pub fn attribute_type(&self) -> GeometryAttributeType {
        self.attribute_type
    }

    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    pub fn num_components(&self) -> u8 {
        self.num_components
    }

    pub fn normalized(&self) -> bool {
        self.normalized
    }

    pub fn unique_id(&self) -> u32 {
        self.unique_id
    }

    pub fn set_unique_id(&mut self, id: u32) {
        self.unique_id = id;
    }

    pub fn byte_stride(&self) -> usize {
        self.num_components as usize * self.data_type.byte_length()
    }

    /// Number of stored attribute values.
    pub fn size(&self) -> usize {
        self.num_values
    }

    pub fn data(&self) -> &[u8] {
        &self.buffer
    }

    /// Raw bytes of the value mapped to `point`.
    pub fn value_bytes(&self, point: PointIndex) -> &[u8] {
        let stride = self.byte_stride();
        let start = point.0 as usize * stride;
        &self.buffer[start..start + stride]
    }

    /// Reads the value mapped to `point` as floats. Returns `None` for
    /// non-float attributes or if `out` is shorter than the component count.
    pub fn value_f32(&self, point: PointIndex, out: &mut [f32]) -> Option<()> {
        let n = self.num_components as usize;
        if out.len() < n || (point.0 as usize) >= self.num_values {
            return None;
        }
        let bytes = self.value_bytes(point);
        match self.data_type {
            DataType::Float32 => {
                for (c, chunk) in bytes.chunks_exact(4).enumerate() {
                    out[c] = f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
                }
                Some(())
            }
            DataType::Float64 => {
                for (c, chunk) in bytes.chunks_exact(8).enumerate() {
                    let mut raw = [0u8; 8];
                    raw.copy_from_slice(chunk);
                    out[c] = f64::from_le_bytes(raw) as f32;
                }
                Some(())
            }
            _ => None,
        }
    }
}
