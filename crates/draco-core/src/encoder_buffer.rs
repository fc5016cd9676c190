// Copyright 2022 The Draco Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use byteorder::{ByteOrder, LittleEndian};

/// Growable output buffer for the encoders.
///
/// All multi-byte values are little endian.
#[derive(Debug, Clone, Default)]
pub struct EncoderBuffer {
    buffer: Vec<u8>,
    version_major: u8,
    version_minor: u8,
}

impl EncoderBuffer {
    /// Create a new empty encoder buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer with initial capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
            ..Self::default()
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    pub fn data(&self) -> &[u8] {
        &self.buffer
    }

    pub fn size(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Consumes the buffer and returns the encoded bytes.
    pub fn into_data(self) -> Vec<u8> {
        self.buffer
    }

    /// Bitstream version recorded by the header writer.
    pub fn set_version(&mut self, major: u8, minor: u8) {
        self.version_major = major;
        self.version_minor = minor;
    }

    pub fn version_major(&self) -> u8 {
        self.version_major
    }

    pub fn version_minor(&self) -> u8 {
        self.version_minor
    }

    pub fn encode_data(&mut self, data: &[u8]) {
        self.buffer.extend_from_slice(data);
    }

    pub fn encode_u8(&mut self, value: u8) {
        self.buffer.push(value);
    }

    pub fn encode_u16(&mut self, value: u16) {
        let mut bytes = [0u8; 2];
        LittleEndian::write_u16(&mut bytes, value);
        self.buffer.extend_from_slice(&bytes);
    }

    pub fn encode_u32(&mut self, value: u32) {
        let mut bytes = [0u8; 4];
        LittleEndian::write_u32(&mut bytes, value);
        self.buffer.extend_from_slice(&bytes);
    }

    pub fn encode_f32(&mut self, value: f32) {
        let mut bytes = [0u8; 4];
        LittleEndian::write_f32(&mut bytes, value);
        self.buffer.extend_from_slice(&bytes);
    }

    /// LEB128 style variable length unsigned integer.
    pub fn encode_varint(&mut self, mut value: u64) {
        loop {
            let mut byte = (value & 0x7f) as u8;
            value >>= 7;
            if value != 0 {
                byte |= 0x80;
            }
            self.buffer.push(byte);
            if value == 0 {
                break;
            }
        }
    }

    /// Packs the `nbits` least significant bits of each value, LSB first,
    /// preceded by the packed byte length as a varint.
    pub fn encode_packed_bits(&mut self, values: &[u32], nbits: u8) {
        let total_bits = values.len() * nbits as usize;
        let num_bytes = (total_bits + 7) / 8;
        self.encode_varint(num_bytes as u64);

        let start = self.buffer.len();
        self.buffer.resize(start + num_bytes, 0);
        let packed = &mut self.buffer[start..];

        let mut bit_offset = 0usize;
        for &value in values {
            for bit in 0..nbits as usize {
                if (value >> bit) & 1 == 1 {
                    let pos = bit_offset + bit;
                    packed[pos / 8] |= 1 << (pos % 8);
                }
            }
            bit_offset += nbits as usize;
        }
    }
}
