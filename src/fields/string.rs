// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! String and bytes field slots.
//!
//! Parsed values are copied into owned storage; a message never
//! borrows from the buffer it was parsed from.

use crate::core::Result;
use crate::encoding::protobuf::{length_delimited_len, ProtoCursor, ProtoEncoder};
use crate::encoding::ros::{RosCursor, RosEncoder, LENGTH_PREFIX_SIZE};

/// A singular string or bytes field slot.
///
/// Protobuf encodes the value length-delimited; ROS encodes it as a
/// 4-byte little-endian length followed by the raw bytes. An empty
/// string is absent in Protobuf terms but still occupies the 4-byte
/// zero length on the ROS wire.
#[derive(Debug, Clone, Default)]
pub struct StringField {
    number: u32,
    value: Vec<u8>,
    present: bool,
}

impl StringField {
    /// Create an empty field.
    pub fn new(number: u32) -> Self {
        Self {
            number,
            value: Vec::new(),
            present: false,
        }
    }

    /// The schema-declared field number.
    #[inline]
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Whether the field has been set or parsed as present.
    #[inline]
    pub fn is_present(&self) -> bool {
        self.present
    }

    /// The value bytes.
    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.value
    }

    /// The value as UTF-8, or `""` if it is not valid UTF-8.
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.value).unwrap_or("")
    }

    /// Length of the value in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.value.len()
    }

    /// Check if the value is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Set the value and mark the field present.
    pub fn set(&mut self, value: impl Into<Vec<u8>>) {
        self.value = value.into();
        self.present = true;
    }

    /// Reset to the empty state, keeping the field number.
    pub fn clear(&mut self) {
        self.value.clear();
        self.present = false;
    }

    /// Exact Protobuf wire size including the tag.
    ///
    /// The caller gates on [`is_present`](StringField::is_present).
    pub fn serialized_proto_size(&self) -> usize {
        length_delimited_len(self.number, self.value.len())
    }

    /// Write tag, length, and bytes in Protobuf wire format.
    pub fn write_proto(&self, encoder: &mut ProtoEncoder) -> Result<()> {
        encoder.length_delimited(self.number, &self.value)
    }

    /// Parse one Protobuf value occurrence and mark the field present.
    pub fn parse_proto(&mut self, cursor: &mut ProtoCursor<'_>) -> Result<()> {
        self.value = cursor.read_length_delimited()?.to_vec();
        self.present = true;
        Ok(())
    }

    /// ROS wire size: 4-byte length prefix plus the bytes.
    #[inline]
    pub fn serialized_ros_size(&self) -> usize {
        LENGTH_PREFIX_SIZE + self.value.len()
    }

    /// Write the ROS length-prefixed encoding, unconditionally.
    pub fn write_ros(&self, encoder: &mut RosEncoder) -> Result<()> {
        encoder.string(&self.value)
    }

    /// Read this field's ROS slot positionally.
    ///
    /// Presence becomes true iff the string is non-empty.
    pub fn parse_ros(&mut self, cursor: &mut RosCursor<'_>) -> Result<()> {
        self.value = cursor.read_string()?.to_vec();
        self.present = !self.value.is_empty();
        Ok(())
    }
}

/// Bytes fields share the string slot; only the schema type differs.
pub type BytesField = StringField;
