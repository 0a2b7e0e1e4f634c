// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! ROS cursor for reading serialized data from a borrowed slice.

use byteorder::{ByteOrder, LittleEndian};

use crate::core::{CodecError, Result};

/// Reads ROS serialization format from a borrowed byte slice.
///
/// All reads are positional: the caller must issue them in the field
/// order the message was written with. A short read fails with
/// `Truncated`.
///
/// # Example
///
/// ```
/// use protoros::encoding::ros::RosCursor;
///
/// let data = [0xD2, 0x04, 0x00, 0x00]; // int32 1234
/// let mut cursor = RosCursor::new(&data);
/// assert_eq!(cursor.read_i32().unwrap(), 1234);
/// assert!(cursor.at_end());
/// ```
pub struct RosCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> RosCursor<'a> {
    /// Create a cursor over a byte slice.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Current read position.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Remaining bytes available to read.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Check if the cursor has consumed the whole buffer.
    #[inline]
    pub fn at_end(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Read a single byte as a bool (0 = false, anything else = true).
    pub fn read_bool(&mut self) -> Result<bool> {
        Ok(self.take(1)?[0] != 0)
    }

    /// Read a u32 value.
    pub fn read_u32(&mut self) -> Result<u32> {
        Ok(LittleEndian::read_u32(self.take(4)?))
    }

    /// Read an i32 value.
    pub fn read_i32(&mut self) -> Result<i32> {
        Ok(LittleEndian::read_i32(self.take(4)?))
    }

    /// Read a u64 value.
    pub fn read_u64(&mut self) -> Result<u64> {
        Ok(LittleEndian::read_u64(self.take(8)?))
    }

    /// Read an i64 value.
    pub fn read_i64(&mut self) -> Result<i64> {
        Ok(LittleEndian::read_i64(self.take(8)?))
    }

    /// Read an f32 value. The bit pattern is preserved exactly.
    pub fn read_f32(&mut self) -> Result<f32> {
        Ok(f32::from_bits(self.read_u32()?))
    }

    /// Read an f64 value. The bit pattern is preserved exactly.
    pub fn read_f64(&mut self) -> Result<f64> {
        Ok(f64::from_bits(self.read_u64()?))
    }

    /// Read a 4-byte length prefix followed by that many raw bytes.
    ///
    /// Returns a sub-slice of the source buffer.
    pub fn read_string(&mut self) -> Result<&'a [u8]> {
        let len = self.read_u32()? as usize;
        self.take(len)
    }

    /// Read a 4-byte element count (sequence prefix).
    pub fn read_count(&mut self) -> Result<u32> {
        self.read_u32()
    }

    /// Consume `count` bytes and return them as a sub-slice.
    pub fn take(&mut self, count: usize) -> Result<&'a [u8]> {
        if count > self.remaining() {
            return Err(CodecError::truncated(count, self.remaining(), self.pos));
        }
        let start = self.pos;
        self.pos += count;
        Ok(&self.data[start..self.pos])
    }
}
