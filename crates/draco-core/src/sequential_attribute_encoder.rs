use crate::compression_config::SequentialAttributeEncoderType;
use crate::encoder_buffer::EncoderBuffer;
use crate::encoder_options::EncoderOptions;
use crate::geometry_indices::PointIndex;
use crate::point_cloud::PointCloud;
use crate::quantization_utils::{compute_quantization_range, Quantizer};
use crate::status::{invalid_parameter, DracoError, Status};
use crate::version::MAX_QUANTIZATION_BITS;

/// Encodes the values of one attribute in point order.
///
/// Attributes with a quantization bit depth are written as packed unsigned
/// integers followed by their dequantization data (per-component minimum,
/// range, bit depth). All others are written as raw bytes.
#[derive(Debug, Clone)]
pub struct SequentialAttributeEncoder {
    att_id: i32,
    quantization_bits: i32,
    min_values: Vec<f32>,
    range: f32,
}

impl SequentialAttributeEncoder {
    pub fn init(pc: &PointCloud, att_id: i32, options: &EncoderOptions) -> Result<Self, DracoError> {
        let att = pc.attribute(att_id);
        if att.size() < pc.num_points() {
            return Err(invalid_parameter(format!(
                "Attribute {} has {} values for {} points",
                att_id,
                att.size(),
                pc.num_points()
            )));
        }

        let quantization_bits = options.quantization_bits(att_id);
        if quantization_bits != 0 {
            if !(1..=MAX_QUANTIZATION_BITS).contains(&quantization_bits) {
                return Err(invalid_parameter(format!(
                    "Quantization bits {} for attribute {} outside [1, {}]",
                    quantization_bits, att_id, MAX_QUANTIZATION_BITS
                )));
            }
            if !att.data_type().is_float() {
                return Err(DracoError::UnsupportedFeature(format!(
                    "Quantization of non-float attribute {} ({:?})",
                    att_id,
                    att.data_type()
                )));
            }
        }

        Ok(Self {
            att_id,
            quantization_bits,
            min_values: Vec::new(),
            range: 0.0,
        })
    }

    pub fn attribute_id(&self) -> i32 {
        self.att_id
    }

    pub fn encoder_type(&self) -> SequentialAttributeEncoderType {
        if self.quantization_bits > 0 {
            SequentialAttributeEncoderType::Quantization
        } else {
            SequentialAttributeEncoderType::Generic
        }
    }

    pub fn encode_values(&mut self, pc: &PointCloud, point_ids: &[PointIndex], out_buffer: &mut EncoderBuffer) -> Status {
        let att = pc.attribute(self.att_id);
        if self.quantization_bits == 0 {
            for &point in point_ids {
                out_buffer.encode_data(att.value_bytes(point));
            }
            return Ok(());
        }

        let num_components = att.num_components() as usize;
        let mut values = vec![0.0f32; point_ids.len() * num_components];
        for (i, &point) in point_ids.iter().enumerate() {
            att.value_f32(point, &mut values[i * num_components..(i + 1) * num_components])
                .ok_or_else(|| invalid_parameter(format!("Cannot read attribute {} value", self.att_id)))?;
        }
        if values.iter().any(|v| !v.is_finite()) {
            return Err(invalid_parameter(format!(
                "Attribute {} contains non-finite values",
                self.att_id
            )));
        }

        let (min_values, range) = compute_quantization_range(&values, num_components);
        let max_quantized_value = ((1u64 << self.quantization_bits) - 1) as i32;
        let mut quantizer = Quantizer::new();
        quantizer.init(range, max_quantized_value);

        let quantized: Vec<u32> = values
            .iter()
            .enumerate()
            .map(|(i, v)| {
                let q = quantizer.quantize_float(v - min_values[i % num_components]);
                q.clamp(0, max_quantized_value) as u32
            })
            .collect();
        out_buffer.encode_packed_bits(&quantized, self.quantization_bits as u8);

        self.min_values = min_values;
        self.range = range;
        Ok(())
    }

    /// Writes what a decoder needs to undo quantization. No-op for raw
    /// attributes.
    pub fn encode_data_needed_by_portable_transform(&self, out_buffer: &mut EncoderBuffer) -> Status {
        if self.quantization_bits == 0 {
            return Ok(());
        }
        for &v in &self.min_values {
            out_buffer.encode_f32(v);
        }
        out_buffer.encode_f32(self.range);
        out_buffer.encode_u8(self.quantization_bits as u8);
        Ok(())
    }
}

/// Writes attribute metadata, values and transform data for every
/// attribute of `pc`, visiting points in `point_ids` order.
pub(crate) fn encode_attributes(
    pc: &PointCloud,
    point_ids: &[PointIndex],
    options: &EncoderOptions,
    out_buffer: &mut EncoderBuffer,
) -> Status {
    let num_attributes = pc.num_attributes();
    out_buffer.encode_varint(num_attributes as u64);

    let mut encoders = Vec::with_capacity(num_attributes as usize);
    for i in 0..num_attributes {
        encoders.push(SequentialAttributeEncoder::init(pc, i, options)?);
    }

    for (att, encoder) in pc.attributes().zip(&encoders) {
        out_buffer.encode_u8(att.attribute_type() as u8);
        out_buffer.encode_u8(att.data_type() as u8);
        out_buffer.encode_u8(att.num_components());
        out_buffer.encode_u8(u8::from(att.normalized()));
        out_buffer.encode_varint(att.unique_id() as u64);
        out_buffer.encode_u8(encoder.encoder_type() as u8);
    }

    for encoder in encoders.iter_mut() {
        encoder.encode_values(pc, point_ids, out_buffer)?;
    }
    for encoder in &encoders {
        encoder.encode_data_needed_by_portable_transform(out_buffer)?;
    }
    Ok(())
}
