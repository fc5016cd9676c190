//! Translates an [`EncodingRequest`] into [`EncoderOptions`].

use draco_core::encoder_options::{
    create_default_encoder_options, set_named_attribute_quantization, set_speed_options, EncoderOptions,
};
use draco_core::point_cloud::PointCloud;
use tracing::debug;

use crate::request::EncodingRequest;

/// Builds the encoder options for `pc`.
///
/// Quantization is set only for attributes present on `pc` whose requested
/// bit depth is positive; missing attributes are skipped. Encoding and
/// decoding speed are both `10 - compression_level`.
pub fn build_encoder_options(pc: &PointCloud, request: &EncodingRequest) -> EncoderOptions {
    let mut options = create_default_encoder_options();

    for (att_type, bits) in request.quantization_bits() {
        if bits <= 0 {
            continue;
        }
        if set_named_attribute_quantization(&mut options, pc, att_type, bits) {
            debug!(attribute = att_type.name(), bits, "quantization set");
        } else {
            debug!(attribute = att_type.name(), "attribute not present, quantization skipped");
        }
    }

    let speed = request.encoding_speed();
    set_speed_options(&mut options, speed, speed);
    options
}
