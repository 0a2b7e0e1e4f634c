// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! The [`Transcode`] trait implemented by every generated message type.
//!
//! A message is created empty, populated by exactly one parse in either
//! wire format, and may then be written or sized any number of times.
//! The trait object's vtable is what the global registry dispatches
//! through when decoding `google.protobuf.Any` values.

use crate::core::Result;
use crate::encoding::protobuf::{ProtoCursor, ProtoEncoder};
use crate::encoding::ros::{RosCursor, RosEncoder};

/// Parse, write, and size operations over both wire formats.
///
/// Implementations are generated by the [`codegen`](crate::codegen)
/// module; [`AnyMessage`](crate::fields::AnyMessage) is the one
/// hand-written implementation. Parsed strings and bytes are copied
/// into owned storage, so a message never borrows from the buffer it
/// was parsed from.
pub trait Transcode {
    /// Parse the message from Protobuf wire format.
    ///
    /// Fails with [`CodecError::AlreadyPopulated`](crate::CodecError)
    /// if the message has been parsed before. Unknown fields are
    /// skipped.
    fn parse_proto(&mut self, cursor: &mut ProtoCursor<'_>) -> Result<()>;

    /// Write the message in Protobuf wire format.
    ///
    /// Absent singular fields are omitted.
    fn write_proto(&self, encoder: &mut ProtoEncoder) -> Result<()>;

    /// Exact number of bytes [`write_proto`](Transcode::write_proto)
    /// will produce.
    fn serialized_proto_size(&self) -> usize;

    /// Parse the message from ROS serialization format.
    ///
    /// Reads are purely positional in declared field order.
    fn parse_ros(&mut self, cursor: &mut RosCursor<'_>) -> Result<()>;

    /// Write the message in ROS serialization format.
    ///
    /// Every declared field is written; ROS has no optional concept.
    fn write_ros(&self, encoder: &mut RosEncoder) -> Result<()>;

    /// Exact number of bytes [`write_ros`](Transcode::write_ros) will
    /// produce.
    fn serialized_ros_size(&self) -> usize;

    /// Fully qualified message name, e.g. `foo.bar.TestMessage`.
    fn full_name(&self) -> &'static str;

    /// Short message name, e.g. `TestMessage`.
    fn short_name(&self) -> &'static str;

    /// Parse from Protobuf and re-emit as ROS in one call.
    fn proto_to_ros(
        &mut self,
        cursor: &mut ProtoCursor<'_>,
        encoder: &mut RosEncoder,
    ) -> Result<()> {
        self.parse_proto(cursor)?;
        self.write_ros(encoder)
    }

    /// Parse from ROS and re-emit as Protobuf in one call.
    fn ros_to_proto(
        &mut self,
        cursor: &mut RosCursor<'_>,
        encoder: &mut ProtoEncoder,
    ) -> Result<()> {
        self.parse_ros(cursor)?;
        self.write_proto(encoder)
    }
}

impl std::fmt::Debug for dyn Transcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transcode").field("full_name", &self.full_name()).finish()
    }
}
