#[derive(Debug, Default, Clone, Copy)]
pub struct Quantizer {
    inverse_delta: f32,
}

impl Quantizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn init(&mut self, range: f32, max_quantized_value: i32) {
        if range > 0.0 {
            self.inverse_delta = max_quantized_value as f32 / range;
        } else {
            self.inverse_delta = 0.0;
        }
    }

    pub fn quantize_float(&self, val: f32) -> i32 {
        let val = val * self.inverse_delta;
        (val + 0.5).floor() as i32
    }
}

/// Per-component minimum and the largest component extent of a set of
/// values laid out as `num_components`-wide entries.
pub fn compute_quantization_range(values: &[f32], num_components: usize) -> (Vec<f32>, f32) {
    if num_components == 0 || values.is_empty() {
        return (vec![0.0; num_components], 0.0);
    }
    let mut min_values = values[..num_components].to_vec();
    let mut max_values = min_values.clone();
    for entry in values.chunks_exact(num_components) {
        for (c, &v) in entry.iter().enumerate() {
            min_values[c] = min_values[c].min(v);
            max_values[c] = max_values[c].max(v);
        }
    }
    let range = min_values
        .iter()
        .zip(&max_values)
        .map(|(lo, hi)| hi - lo)
        .fold(0.0f32, f32::max);
    (min_values, range)
}
