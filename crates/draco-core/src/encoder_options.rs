use std::collections::HashMap;

use crate::geometry_attribute::GeometryAttributeType;
use crate::point_cloud::PointCloud;

pub const ENCODING_SPEED: &str = "encoding_speed";
pub const DECODING_SPEED: &str = "decoding_speed";
pub const QUANTIZATION_BITS: &str = "quantization_bits";

/// Default speed used when no speed option has been set.
pub const DEFAULT_SPEED: i32 = 5;

/// Global and per-attribute integer options consumed by the encoders.
///
/// Attribute options are keyed by attribute id. Lookups that miss on the
/// attribute fall back to the global option of the same name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EncoderOptions {
    global_options: HashMap<String, i32>,
    attribute_options: HashMap<i32, HashMap<String, i32>>,
}

impl EncoderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_encoding_speed(&self) -> i32 {
        self.get_global_int(ENCODING_SPEED, DEFAULT_SPEED)
    }

    pub fn get_decoding_speed(&self) -> i32 {
        self.get_global_int(DECODING_SPEED, DEFAULT_SPEED)
    }

    pub fn set_speed(&mut self, encoding_speed: i32, decoding_speed: i32) {
        self.set_global_int(ENCODING_SPEED, encoding_speed);
        self.set_global_int(DECODING_SPEED, decoding_speed);
    }

    pub fn set_global_int(&mut self, key: &str, value: i32) {
        self.global_options.insert(key.to_string(), value);
    }

    pub fn get_global_int(&self, key: &str, default_val: i32) -> i32 {
        *self.global_options.get(key).unwrap_or(&default_val)
    }

    pub fn set_attribute_int(&mut self, att_id: i32, key: &str, value: i32) {
        self.attribute_options
            .entry(att_id)
            .or_default()
            .insert(key.to_string(), value);
    }

    pub fn get_attribute_int(&self, att_id: i32, key: &str, default_val: i32) -> i32 {
        if let Some(val) = self.attribute_options.get(&att_id).and_then(|opts| opts.get(key)) {
            return *val;
        }
        self.get_global_int(key, default_val)
    }

    /// True if `key` was set explicitly for `att_id`.
    pub fn is_attribute_option_set(&self, att_id: i32, key: &str) -> bool {
        self.attribute_options
            .get(&att_id)
            .map_or(false, |opts| opts.contains_key(key))
    }

    /// Quantization bits configured for `att_id`, 0 when unset.
    pub fn quantization_bits(&self, att_id: i32) -> i32 {
        self.get_attribute_int(att_id, QUANTIZATION_BITS, 0)
    }
}

pub fn create_default_encoder_options() -> EncoderOptions {
    EncoderOptions::new()
}

/// Sets quantization for the first attribute of `att_type` on `pc`.
///
/// Returns false and leaves `options` untouched when `pc` has no such
/// attribute.
pub fn set_named_attribute_quantization(
    options: &mut EncoderOptions,
    pc: &PointCloud,
    att_type: GeometryAttributeType,
    quantization_bits: i32,
) -> bool {
    match pc.named_attribute_id(att_type) {
        Some(att_id) => {
            options.set_attribute_int(att_id, QUANTIZATION_BITS, quantization_bits);
            true
        }
        None => false,
    }
}

/// Sets encoding and decoding speed, each clamped into [0, 10].
pub fn set_speed_options(options: &mut EncoderOptions, encoding_speed: i32, decoding_speed: i32) {
    options.set_speed(encoding_speed.clamp(0, 10), decoding_speed.clamp(0, 10));
}
