// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Repeated field slots.
//!
//! On the Protobuf wire, repeated scalars are written either packed
//! (one length-delimited run) or unpacked (one tag per element) as the
//! schema declares, but the parser accepts both forms regardless of
//! the declaration. On the ROS wire every sequence is a 4-byte element
//! count followed by the concatenated element encodings.

use super::scalar::{ScalarEncoding, ScalarValue};
use crate::core::{Result, Transcode};
use crate::encoding::protobuf::{
    length_delimited_len, tag_len, varint_len, ProtoCursor, ProtoEncoder, WireType,
};
use crate::encoding::ros::{RosCursor, RosEncoder, LENGTH_PREFIX_SIZE};

/// A repeated scalar (or enum) field slot.
#[derive(Debug, Clone)]
pub struct ScalarSeqField<T: ScalarValue> {
    number: u32,
    encoding: ScalarEncoding,
    packed: bool,
    values: Vec<T>,
}

impl<T: ScalarValue> ScalarSeqField<T> {
    /// Create an empty sequence with the type's default encoding,
    /// declared packed.
    pub fn new(number: u32) -> Self {
        Self {
            number,
            encoding: T::DEFAULT_ENCODING,
            packed: true,
            values: Vec::new(),
        }
    }

    /// Override the element encoding.
    pub fn with_encoding(mut self, encoding: ScalarEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Override the declared packing, which controls writing only.
    pub fn with_packed(mut self, packed: bool) -> Self {
        self.packed = packed;
        self
    }

    /// The schema-declared field number.
    #[inline]
    pub fn number(&self) -> u32 {
        self.number
    }

    /// A repeated field is present iff it is non-empty.
    #[inline]
    pub fn is_present(&self) -> bool {
        !self.values.is_empty()
    }

    /// The elements parsed or pushed so far.
    #[inline]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the sequence is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Append an element.
    pub fn push(&mut self, value: T) {
        self.values.push(value);
    }

    /// Remove all elements, keeping the field number.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    fn element_wire(&self) -> WireType {
        match self.encoding {
            ScalarEncoding::Fixed => T::FIXED_WIRE,
            _ => WireType::Varint,
        }
    }

    fn element_size(&self, value: T) -> usize {
        match self.encoding {
            ScalarEncoding::Varint => varint_len(value.to_varint()),
            ScalarEncoding::ZigZag => varint_len(value.to_zigzag()),
            ScalarEncoding::Fixed => match T::FIXED_WIRE {
                WireType::Fixed32 => 4,
                WireType::Fixed64 => 8,
                _ => varint_len(value.to_varint()),
            },
        }
    }

    fn write_element(&self, value: T, encoder: &mut ProtoEncoder) -> Result<()> {
        match self.encoding {
            ScalarEncoding::Varint => encoder.raw_varint(value.to_varint()),
            ScalarEncoding::ZigZag => encoder.raw_varint(value.to_zigzag()),
            ScalarEncoding::Fixed => match T::FIXED_WIRE {
                WireType::Fixed32 => encoder.fixed32(value.to_fixed_bits() as u32),
                WireType::Fixed64 => encoder.fixed64(value.to_fixed_bits()),
                _ => encoder.raw_varint(value.to_varint()),
            },
        }
    }

    fn read_element(&self, cursor: &mut ProtoCursor<'_>) -> Result<T> {
        Ok(match self.encoding {
            ScalarEncoding::Varint => T::from_varint(cursor.read_varint()?),
            ScalarEncoding::ZigZag => T::from_zigzag(cursor.read_varint()?),
            ScalarEncoding::Fixed => match T::FIXED_WIRE {
                WireType::Fixed32 => T::from_fixed_bits(cursor.read_fixed32()? as u64),
                WireType::Fixed64 => T::from_fixed_bits(cursor.read_fixed64()?),
                _ => T::from_varint(cursor.read_varint()?),
            },
        })
    }

    /// Exact Protobuf wire size, 0 when empty.
    ///
    /// Packed sizing sums the element sizes in one pass, then adds the
    /// outer tag and length varint.
    pub fn serialized_proto_size(&self) -> usize {
        if self.values.is_empty() {
            return 0;
        }
        let payload: usize = self.values.iter().map(|&v| self.element_size(v)).sum();
        if self.packed {
            length_delimited_len(self.number, payload)
        } else {
            self.values.len() * tag_len(self.number, self.element_wire()) + payload
        }
    }

    /// Write the sequence per the declared packing. Empty sequences
    /// emit nothing.
    pub fn write_proto(&self, encoder: &mut ProtoEncoder) -> Result<()> {
        if self.values.is_empty() {
            return Ok(());
        }
        if self.packed {
            let payload: usize = self.values.iter().map(|&v| self.element_size(v)).sum();
            encoder.length_delimited_header(self.number, payload)?;
            for &value in &self.values {
                self.write_element(value, encoder)?;
            }
        } else {
            for &value in &self.values {
                encoder.tag(self.number, self.element_wire())?;
                self.write_element(value, encoder)?;
            }
        }
        Ok(())
    }

    /// Parse one tag occurrence, appending elements.
    ///
    /// Dispatch is on the encountered wire type, not the declared
    /// packing: a length-delimited occurrence is a packed run, any
    /// other a single element.
    pub fn parse_proto(&mut self, wire: WireType, cursor: &mut ProtoCursor<'_>) -> Result<()> {
        if wire == WireType::LengthDelimited {
            let body = cursor.read_length_delimited()?;
            let mut sub = ProtoCursor::new(body);
            while !sub.at_end() {
                let value = self.read_element(&mut sub)?;
                self.values.push(value);
            }
        } else {
            let value = self.read_element(cursor)?;
            self.values.push(value);
        }
        Ok(())
    }

    /// ROS wire size: count prefix plus fixed-width elements.
    pub fn serialized_ros_size(&self) -> usize {
        LENGTH_PREFIX_SIZE + self.values.len() * T::ROS_SIZE
    }

    /// Write count then each element, fixed-width little-endian.
    pub fn write_ros(&self, encoder: &mut RosEncoder) -> Result<()> {
        encoder.count(self.values.len() as u32)?;
        for &value in &self.values {
            value.write_ros(encoder)?;
        }
        Ok(())
    }

    /// Read count then that many elements.
    pub fn parse_ros(&mut self, cursor: &mut RosCursor<'_>) -> Result<()> {
        let count = cursor.read_count()?;
        self.values.clear();
        for _ in 0..count {
            self.values.push(T::read_ros(cursor)?);
        }
        Ok(())
    }
}

/// repeated int32 / sint32 / sfixed32 field.
pub type Int32SeqField = ScalarSeqField<i32>;
/// repeated uint32 / fixed32 field.
pub type Uint32SeqField = ScalarSeqField<u32>;
/// repeated int64 / sint64 / sfixed64 field.
pub type Int64SeqField = ScalarSeqField<i64>;
/// repeated uint64 / fixed64 field.
pub type Uint64SeqField = ScalarSeqField<u64>;
/// repeated float field.
pub type FloatSeqField = ScalarSeqField<f32>;
/// repeated double field.
pub type DoubleSeqField = ScalarSeqField<f64>;
/// repeated bool field.
pub type BoolSeqField = ScalarSeqField<bool>;
/// repeated enum field, stored as 32-bit unsigned values.
pub type EnumSeqField = ScalarSeqField<u32>;

/// A repeated string or bytes field slot. Never packed.
#[derive(Debug, Clone, Default)]
pub struct StringSeqField {
    number: u32,
    values: Vec<Vec<u8>>,
}

impl StringSeqField {
    /// Create an empty sequence.
    pub fn new(number: u32) -> Self {
        Self {
            number,
            values: Vec::new(),
        }
    }

    /// The schema-declared field number.
    #[inline]
    pub fn number(&self) -> u32 {
        self.number
    }

    /// A repeated field is present iff it is non-empty.
    #[inline]
    pub fn is_present(&self) -> bool {
        !self.values.is_empty()
    }

    /// The elements parsed or pushed so far.
    #[inline]
    pub fn values(&self) -> &[Vec<u8>] {
        &self.values
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the sequence is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Append an element.
    pub fn push(&mut self, value: impl Into<Vec<u8>>) {
        self.values.push(value.into());
    }

    /// Remove all elements, keeping the field number.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Exact Protobuf wire size: one length-delimited record per
    /// element, 0 when empty.
    pub fn serialized_proto_size(&self) -> usize {
        self.values
            .iter()
            .map(|v| length_delimited_len(self.number, v.len()))
            .sum()
    }

    /// Write one length-delimited record per element.
    pub fn write_proto(&self, encoder: &mut ProtoEncoder) -> Result<()> {
        for value in &self.values {
            encoder.length_delimited(self.number, value)?;
        }
        Ok(())
    }

    /// Parse one tag occurrence, appending one element.
    pub fn parse_proto(&mut self, cursor: &mut ProtoCursor<'_>) -> Result<()> {
        self.values.push(cursor.read_length_delimited()?.to_vec());
        Ok(())
    }

    /// ROS wire size: count prefix plus one length-prefixed string per
    /// element.
    pub fn serialized_ros_size(&self) -> usize {
        LENGTH_PREFIX_SIZE
            + self
                .values
                .iter()
                .map(|v| LENGTH_PREFIX_SIZE + v.len())
                .sum::<usize>()
    }

    /// Write count then each string with its length prefix.
    pub fn write_ros(&self, encoder: &mut RosEncoder) -> Result<()> {
        encoder.count(self.values.len() as u32)?;
        for value in &self.values {
            encoder.string(value)?;
        }
        Ok(())
    }

    /// Read count then that many length-prefixed strings.
    pub fn parse_ros(&mut self, cursor: &mut RosCursor<'_>) -> Result<()> {
        let count = cursor.read_count()?;
        self.values.clear();
        for _ in 0..count {
            self.values.push(cursor.read_string()?.to_vec());
        }
        Ok(())
    }
}

/// A repeated embedded message field slot.
#[derive(Debug, Clone)]
pub struct MessageSeqField<M> {
    number: u32,
    messages: Vec<M>,
}

impl<M: Transcode + Default> MessageSeqField<M> {
    /// Create an empty sequence.
    pub fn new(number: u32) -> Self {
        Self {
            number,
            messages: Vec::new(),
        }
    }

    /// The schema-declared field number.
    #[inline]
    pub fn number(&self) -> u32 {
        self.number
    }

    /// A repeated field is present iff it is non-empty.
    #[inline]
    pub fn is_present(&self) -> bool {
        !self.messages.is_empty()
    }

    /// The elements parsed or added so far.
    #[inline]
    pub fn values(&self) -> &[M] {
        &self.messages
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Check if the sequence is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Append an empty message and return a mutable borrow of it.
    pub fn add(&mut self) -> &mut M {
        self.messages.push(M::default());
        let last = self.messages.len() - 1;
        &mut self.messages[last]
    }

    /// Remove all elements, keeping the field number.
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// Exact Protobuf wire size: one length-delimited envelope per
    /// element, 0 when empty.
    pub fn serialized_proto_size(&self) -> usize {
        self.messages
            .iter()
            .map(|m| length_delimited_len(self.number, m.serialized_proto_size()))
            .sum()
    }

    /// Write one length-delimited envelope per element.
    pub fn write_proto(&self, encoder: &mut ProtoEncoder) -> Result<()> {
        for message in &self.messages {
            encoder.length_delimited_header(self.number, message.serialized_proto_size())?;
            message.write_proto(encoder)?;
        }
        Ok(())
    }

    /// Parse one tag occurrence, appending one element.
    pub fn parse_proto(&mut self, cursor: &mut ProtoCursor<'_>) -> Result<()> {
        let body = cursor.read_length_delimited()?;
        let mut sub = ProtoCursor::new(body);
        let mut message = M::default();
        message.parse_proto(&mut sub)?;
        self.messages.push(message);
        Ok(())
    }

    /// ROS wire size: count prefix plus each inner message's
    /// field-by-field encoding.
    pub fn serialized_ros_size(&self) -> usize {
        LENGTH_PREFIX_SIZE
            + self
                .messages
                .iter()
                .map(|m| m.serialized_ros_size())
                .sum::<usize>()
    }

    /// Write count then each inner message positionally.
    pub fn write_ros(&self, encoder: &mut RosEncoder) -> Result<()> {
        encoder.count(self.messages.len() as u32)?;
        for message in &self.messages {
            message.write_ros(encoder)?;
        }
        Ok(())
    }

    /// Read count then that many inner messages positionally.
    pub fn parse_ros(&mut self, cursor: &mut RosCursor<'_>) -> Result<()> {
        let count = cursor.read_count()?;
        self.messages.clear();
        for _ in 0..count {
            let mut message = M::default();
            message.parse_ros(cursor)?;
            self.messages.push(message);
        }
        Ok(())
    }
}
