// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Embedded message field slots.

use crate::core::{CodecError, Result, Transcode};
use crate::encoding::protobuf::{length_delimited_len, ProtoCursor, ProtoEncoder};
use crate::encoding::ros::{RosCursor, RosEncoder, LENGTH_PREFIX_SIZE};

/// A singular embedded message field slot.
///
/// The inner message is exclusively owned. On the Protobuf wire the
/// message is a length-delimited envelope whose size is queried before
/// writing; on the ROS wire the inner fields are written positionally
/// in place.
///
/// Inside a oneof, message members use the `*_optional` variants: the
/// ROS convention wraps them in a 0/1-length array so that an inactive
/// arm occupies only the 4-byte count.
#[derive(Debug, Clone)]
pub struct MessageField<M> {
    number: u32,
    message: M,
    present: bool,
}

impl<M: Transcode + Default> MessageField<M> {
    /// Create a field holding an empty inner message.
    pub fn new(number: u32) -> Self {
        Self {
            number,
            message: M::default(),
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

    /// Borrow the inner message.
    #[inline]
    pub fn get(&self) -> &M {
        &self.message
    }

    /// Mutably borrow the inner message, marking the field present.
    pub fn get_mut(&mut self) -> &mut M {
        self.present = true;
        &mut self.message
    }

    /// Reset to an empty inner message, keeping the field number.
    pub fn clear(&mut self) {
        self.message = M::default();
        self.present = false;
    }

    /// Exact Protobuf wire size: tag, length varint, and inner body.
    ///
    /// The caller gates on [`is_present`](MessageField::is_present).
    pub fn serialized_proto_size(&self) -> usize {
        length_delimited_len(self.number, self.message.serialized_proto_size())
    }

    /// Write the length-delimited envelope and inner body.
    pub fn write_proto(&self, encoder: &mut ProtoEncoder) -> Result<()> {
        let size = self.message.serialized_proto_size();
        encoder.length_delimited_header(self.number, size)?;
        self.message.write_proto(encoder)
    }

    /// Parse one length-delimited occurrence into the inner message.
    pub fn parse_proto(&mut self, cursor: &mut ProtoCursor<'_>) -> Result<()> {
        let body = cursor.read_length_delimited()?;
        let mut sub = ProtoCursor::new(body);
        self.message.parse_proto(&mut sub)?;
        self.present = true;
        Ok(())
    }

    /// ROS wire size of the inner message, unconditionally.
    #[inline]
    pub fn serialized_ros_size(&self) -> usize {
        self.message.serialized_ros_size()
    }

    /// Write the inner message's fields positionally.
    pub fn write_ros(&self, encoder: &mut RosEncoder) -> Result<()> {
        self.message.write_ros(encoder)
    }

    /// Read the inner message's ROS slot positionally.
    pub fn parse_ros(&mut self, cursor: &mut RosCursor<'_>) -> Result<()> {
        self.message.parse_ros(cursor)?;
        self.present = true;
        Ok(())
    }

    /// ROS wire size inside a oneof: 4-byte count plus the body when
    /// this arm is active.
    pub fn serialized_ros_size_optional(&self, active: bool) -> usize {
        LENGTH_PREFIX_SIZE + if active { self.message.serialized_ros_size() } else { 0 }
    }

    /// Write the 0/1-length array wrapper used for oneof members.
    pub fn write_ros_optional(&self, active: bool, encoder: &mut RosEncoder) -> Result<()> {
        encoder.count(active as u32)?;
        if active {
            self.message.write_ros(encoder)?;
        }
        Ok(())
    }

    /// Read the 0/1-length array wrapper used for oneof members.
    pub fn parse_ros_optional(&mut self, cursor: &mut RosCursor<'_>) -> Result<()> {
        match cursor.read_count()? {
            0 => Ok(()),
            1 => {
                self.message.parse_ros(cursor)?;
                self.present = true;
                Ok(())
            }
            n => Err(CodecError::unsupported(format!(
                "oneof message member with array length {n}"
            ))),
        }
    }
}
