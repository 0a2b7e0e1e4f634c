// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! `google.protobuf.Any` support.
//!
//! An `Any` carries a `type_url` of the form
//! `type.googleapis.com/<fully.qualified.Name>` and a `value` that on
//! the Protobuf wire is a bytes field holding the inner message's
//! serialized form. The concrete inner type is resolved at parse time
//! through the global registry, so every type that can appear inside
//! an `Any` must have been registered before decoding starts.
//!
//! On the ROS wire the value is a length-prefixed byte string whose
//! contents are the inner message's own ROS encoding; the length
//! prefix uses ROS sizing.

use tracing::trace;

use super::message::MessageField;
use super::string::StringField;
use crate::core::{registry, CodecError, Result, Transcode};
use crate::encoding::protobuf::{length_delimited_len, ProtoCursor, ProtoEncoder};
use crate::encoding::ros::{RosCursor, RosEncoder, LENGTH_PREFIX_SIZE};

const TYPE_URL_FIELD: u32 = 1;
const VALUE_FIELD: u32 = 2;
const TYPE_URL_PREFIX: &str = "type.googleapis.com/";

/// Hand-coded message type for `google.protobuf.Any`.
///
/// The inner message is owned through a boxed [`Transcode`] object
/// created by the registry factory for the name the `type_url` names.
pub struct AnyMessage {
    populated: bool,
    type_url: StringField,
    value: Option<Box<dyn Transcode>>,
}

impl Default for AnyMessage {
    fn default() -> Self {
        Self::new()
    }
}

impl AnyMessage {
    /// Fully qualified name of this message type.
    pub const FULL_NAME: &'static str = "google.protobuf.Any";
    /// Short name of this message type.
    pub const NAME: &'static str = "Any";

    /// Create an empty `Any`.
    pub fn new() -> Self {
        Self {
            populated: false,
            type_url: StringField::new(TYPE_URL_FIELD),
            value: None,
        }
    }

    /// The type URL, empty when unset.
    pub fn type_url(&self) -> &str {
        self.type_url.as_str()
    }

    /// The inner message, if one has been packed or parsed.
    pub fn value(&self) -> Option<&dyn Transcode> {
        self.value.as_deref()
    }

    /// Whether this `Any` names the given fully qualified type.
    pub fn is_type(&self, full_name: &str) -> bool {
        registry::strip_type_url(self.type_url()) == full_name
    }

    /// Pack a message: sets the type URL from the message's full name
    /// and takes ownership of it.
    pub fn pack(&mut self, message: Box<dyn Transcode>) {
        self.type_url
            .set(format!("{TYPE_URL_PREFIX}{}", message.full_name()));
        self.value = Some(message);
    }
}

impl Transcode for AnyMessage {
    fn parse_proto(&mut self, cursor: &mut ProtoCursor<'_>) -> Result<()> {
        if self.populated {
            return Err(CodecError::already_populated(Self::FULL_NAME));
        }
        self.populated = true;
        while !cursor.at_end() {
            let (number, wire) = cursor.read_tag()?;
            match number {
                TYPE_URL_FIELD => self.type_url.parse_proto(cursor)?,
                VALUE_FIELD => {
                    let body = cursor.read_length_delimited()?;
                    trace!(type_url = self.type_url(), "resolving Any value type");
                    let mut message = registry::create_message(self.type_url())?;
                    let mut sub = ProtoCursor::new(body);
                    message.parse_proto(&mut sub)?;
                    self.value = Some(message);
                }
                _ => cursor.skip_value(wire)?,
            }
        }
        Ok(())
    }

    fn write_proto(&self, encoder: &mut ProtoEncoder) -> Result<()> {
        if self.type_url.is_present() {
            self.type_url.write_proto(encoder)?;
        }
        if let Some(message) = &self.value {
            encoder.length_delimited_header(VALUE_FIELD, message.serialized_proto_size())?;
            message.write_proto(encoder)?;
        }
        Ok(())
    }

    fn serialized_proto_size(&self) -> usize {
        let mut size = 0;
        if self.type_url.is_present() {
            size += self.type_url.serialized_proto_size();
        }
        if let Some(message) = &self.value {
            size += length_delimited_len(VALUE_FIELD, message.serialized_proto_size());
        }
        size
    }

    fn parse_ros(&mut self, cursor: &mut RosCursor<'_>) -> Result<()> {
        if self.populated {
            return Err(CodecError::already_populated(Self::FULL_NAME));
        }
        self.populated = true;
        self.type_url.parse_ros(cursor)?;
        if self.type_url.is_empty() {
            // No inner message; the value slot is a zero-length string.
            cursor.read_count()?;
            return Ok(());
        }
        trace!(type_url = self.type_url(), "resolving Any value type");
        let mut message = registry::create_message(self.type_url())?;
        let body = cursor.read_string()?;
        let mut sub = RosCursor::new(body);
        message.parse_ros(&mut sub)?;
        self.value = Some(message);
        Ok(())
    }

    fn write_ros(&self, encoder: &mut RosEncoder) -> Result<()> {
        self.type_url.write_ros(encoder)?;
        match &self.value {
            Some(message) => {
                let mut inner = RosEncoder::new();
                message.write_ros(&mut inner)?;
                encoder.string(inner.data())
            }
            None => encoder.count(0),
        }
    }

    fn serialized_ros_size(&self) -> usize {
        let inner = match &self.value {
            Some(message) => message.serialized_ros_size(),
            None => 0,
        };
        self.type_url.serialized_ros_size() + LENGTH_PREFIX_SIZE + inner
    }

    fn full_name(&self) -> &'static str {
        Self::FULL_NAME
    }

    fn short_name(&self) -> &'static str {
        Self::NAME
    }
}

/// An `Any`-typed field slot.
pub type AnyField = MessageField<AnyMessage>;
