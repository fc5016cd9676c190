#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodedGeometryType {
    PointCloud = 0,
    TriangularMesh = 1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequentialAttributeEncoderType {
    Generic = 0,
    Quantization = 2,
}

/// How face indices are written by the sequential mesh encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexCoding {
    /// Fixed-width u32 indices.
    Raw = 0,
    /// Zig-zag deltas between consecutive indices, varint coded.
    DeltaVarint = 1,
}

impl IndexCoding {
    /// Fastest speed skips delta coding entirely.
    pub fn for_speed(encoding_speed: i32) -> Self {
        if encoding_speed >= 10 {
            IndexCoding::Raw
        } else {
            IndexCoding::DeltaVarint
        }
    }
}
