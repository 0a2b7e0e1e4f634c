// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! ROS encoder for writing serialized data.

use byteorder::{ByteOrder, LittleEndian};

use crate::core::{CodecError, Result};

/// Default initial capacity for the encoder buffer.
const DEFAULT_CAPACITY: usize = 16;

/// Writes ROS serialization format to an owned buffer.
///
/// The default encoder grows as needed; [`RosEncoder::fixed`] creates
/// an encoder with a hard capacity that fails writes with `Overflow`
/// instead of growing. All scalars are fixed-width little-endian.
///
/// # Example
///
/// ```
/// use protoros::encoding::ros::RosEncoder;
///
/// let mut encoder = RosEncoder::new();
/// encoder.int32(1234).unwrap();
/// encoder.string(b"hi").unwrap();
/// assert_eq!(encoder.data(), &[0xD2, 0x04, 0x00, 0x00, 0x02, 0x00, 0x00, 0x00, b'h', b'i']);
/// ```
pub struct RosEncoder {
    buffer: Vec<u8>,
    limit: Option<usize>,
}

impl Default for RosEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl RosEncoder {
    /// Create a growing encoder.
    pub fn new() -> Self {
        Self {
            buffer: Vec::with_capacity(DEFAULT_CAPACITY),
            limit: None,
        }
    }

    /// Create an encoder with a hard capacity limit.
    ///
    /// Writes past the limit fail with `Overflow`.
    pub fn fixed(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
            limit: Some(capacity),
        }
    }

    /// Number of bytes written so far.
    #[inline]
    pub fn size(&self) -> usize {
        self.buffer.len()
    }

    /// Check whether nothing has been written yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// The bytes written so far.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.buffer
    }

    /// Consume the encoder and return the written bytes.
    pub fn finish(self) -> Vec<u8> {
        self.buffer
    }

    /// Write a bool as a single byte.
    pub fn boolean(&mut self, value: bool) -> Result<()> {
        self.reserve(1)?;
        self.buffer.push(value as u8);
        Ok(())
    }

    /// Write a u32 value.
    pub fn uint32(&mut self, value: u32) -> Result<()> {
        let start = self.grow(4)?;
        LittleEndian::write_u32(&mut self.buffer[start..], value);
        Ok(())
    }

    /// Write an i32 value.
    pub fn int32(&mut self, value: i32) -> Result<()> {
        let start = self.grow(4)?;
        LittleEndian::write_i32(&mut self.buffer[start..], value);
        Ok(())
    }

    /// Write a u64 value.
    pub fn uint64(&mut self, value: u64) -> Result<()> {
        let start = self.grow(8)?;
        LittleEndian::write_u64(&mut self.buffer[start..], value);
        Ok(())
    }

    /// Write an i64 value.
    pub fn int64(&mut self, value: i64) -> Result<()> {
        let start = self.grow(8)?;
        LittleEndian::write_i64(&mut self.buffer[start..], value);
        Ok(())
    }

    /// Write an f32 value. The bit pattern is preserved exactly.
    pub fn float32(&mut self, value: f32) -> Result<()> {
        self.uint32(value.to_bits())
    }

    /// Write an f64 value. The bit pattern is preserved exactly.
    pub fn float64(&mut self, value: f64) -> Result<()> {
        self.uint64(value.to_bits())
    }

    /// Write a 4-byte length prefix followed by raw bytes.
    pub fn string(&mut self, bytes: &[u8]) -> Result<()> {
        self.uint32(bytes.len() as u32)?;
        self.put_bytes(bytes)
    }

    /// Write a 4-byte sequence element count.
    pub fn count(&mut self, count: u32) -> Result<()> {
        self.uint32(count)
    }

    /// Append raw bytes.
    pub fn put_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.reserve(bytes.len())?;
        self.buffer.extend_from_slice(bytes);
        Ok(())
    }

    /// Extend the buffer by `additional` zeroed bytes, returning the
    /// offset where they start.
    fn grow(&mut self, additional: usize) -> Result<usize> {
        self.reserve(additional)?;
        let start = self.buffer.len();
        self.buffer.resize(start + additional, 0);
        Ok(start)
    }

    fn reserve(&mut self, additional: usize) -> Result<()> {
        let needed = self.buffer.len() + additional;
        if let Some(limit) = self.limit {
            if needed > limit {
                return Err(CodecError::overflow(limit, needed));
            }
        }
        self.buffer
            .try_reserve(additional)
            .map_err(|_| CodecError::allocation(additional))
    }
}
