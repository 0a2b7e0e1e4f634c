// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Fixture message types for the integration suites, written in the
//! exact shape the emitter produces for this schema:
//!
//! ```proto
//! syntax = "proto3";
//! package foo.bar;
//!
//! enum E { DEFAULT = 0; FOO = 1; BAR = 2; }
//!
//! message InnerMessage {
//!   string str = 1;
//!   uint64 f = 2;
//! }
//!
//! message ScalarsMessage {
//!   int32 x = 1;
//!   int32 y = 2;
//!   string s = 3;
//! }
//!
//! message VecMessage {
//!   repeated int32 vi32 = 4;
//! }
//!
//! message StrVecMessage {
//!   repeated string vstr = 5;
//! }
//!
//! message UnionMessage {
//!   oneof u {
//!     int32 u1a = 6;
//!     string u1b = 7;
//!   }
//! }
//!
//! message TestMessage {
//!   int32 x = 1;
//!   int32 y = 2;
//!   string s = 3;
//!   repeated int32 vi32 = 4;
//!   repeated string vstr = 5;
//!   oneof u {
//!     int32 u1a = 6;
//!     string u1b = 7;
//!   }
//!   InnerMessage m = 8;
//!   repeated InnerMessage vm = 9;
//!   E e = 10;
//! }
//!
//! message AnyCarrier {
//!   google.protobuf.Any payload = 1;
//! }
//! ```

#![allow(dead_code)]

use protoros::core::{registry, CodecError, Result, Transcode};
use protoros::encoding::protobuf::{ProtoCursor, ProtoEncoder};
use protoros::encoding::ros::{RosCursor, RosEncoder};
use protoros::fields::*;

/// Constants of the `E` enum.
pub struct E;

impl E {
    pub const DEFAULT: u32 = 0;
    pub const FOO: u32 = 1;
    pub const BAR: u32 = 2;
}

pub struct InnerMessage {
    populated: bool,
    pub str_: StringField,
    pub f: Uint64Field,
}

impl InnerMessage {
    pub const FULL_NAME: &'static str = "foo.bar.InnerMessage";
    pub const NAME: &'static str = "InnerMessage";

    pub fn new() -> Self {
        Self {
            populated: false,
            str_: StringField::new(1),
            f: Uint64Field::new(2),
        }
    }

    pub fn is_populated(&self) -> bool {
        self.populated
    }
}

impl Default for InnerMessage {
    fn default() -> Self {
        Self::new()
    }
}

impl Transcode for InnerMessage {
    fn parse_proto(&mut self, cursor: &mut ProtoCursor<'_>) -> Result<()> {
        if self.populated {
            return Err(CodecError::already_populated(Self::FULL_NAME));
        }
        self.populated = true;
        while !cursor.at_end() {
            let (number, wire) = cursor.read_tag()?;
            match number {
                1 => self.str_.parse_proto(cursor)?,
                2 => self.f.parse_proto(cursor)?,
                _ => cursor.skip_value(wire)?,
            }
        }
        Ok(())
    }

    fn write_proto(&self, encoder: &mut ProtoEncoder) -> Result<()> {
        if self.str_.is_present() {
            self.str_.write_proto(encoder)?;
        }
        if self.f.is_present() {
            self.f.write_proto(encoder)?;
        }
        Ok(())
    }

    fn serialized_proto_size(&self) -> usize {
        let mut size = 0;
        if self.str_.is_present() {
            size += self.str_.serialized_proto_size();
        }
        if self.f.is_present() {
            size += self.f.serialized_proto_size();
        }
        size
    }

    fn parse_ros(&mut self, cursor: &mut RosCursor<'_>) -> Result<()> {
        if self.populated {
            return Err(CodecError::already_populated(Self::FULL_NAME));
        }
        self.populated = true;
        self.str_.parse_ros(cursor)?;
        self.f.parse_ros(cursor)?;
        Ok(())
    }

    fn write_ros(&self, encoder: &mut RosEncoder) -> Result<()> {
        self.str_.write_ros(encoder)?;
        self.f.write_ros(encoder)?;
        Ok(())
    }

    fn serialized_ros_size(&self) -> usize {
        let mut size = 0;
        size += self.str_.serialized_ros_size();
        size += self.f.serialized_ros_size();
        size
    }

    fn full_name(&self) -> &'static str {
        Self::FULL_NAME
    }

    fn short_name(&self) -> &'static str {
        Self::NAME
    }
}

pub struct ScalarsMessage {
    populated: bool,
    pub x: Int32Field,
    pub y: Int32Field,
    pub s: StringField,
}

impl ScalarsMessage {
    pub const FULL_NAME: &'static str = "foo.bar.ScalarsMessage";
    pub const NAME: &'static str = "ScalarsMessage";

    pub fn new() -> Self {
        Self {
            populated: false,
            x: Int32Field::new(1),
            y: Int32Field::new(2),
            s: StringField::new(3),
        }
    }

    pub fn is_populated(&self) -> bool {
        self.populated
    }
}

impl Default for ScalarsMessage {
    fn default() -> Self {
        Self::new()
    }
}

impl Transcode for ScalarsMessage {
    fn parse_proto(&mut self, cursor: &mut ProtoCursor<'_>) -> Result<()> {
        if self.populated {
            return Err(CodecError::already_populated(Self::FULL_NAME));
        }
        self.populated = true;
        while !cursor.at_end() {
            let (number, wire) = cursor.read_tag()?;
            match number {
                1 => self.x.parse_proto(cursor)?,
                2 => self.y.parse_proto(cursor)?,
                3 => self.s.parse_proto(cursor)?,
                _ => cursor.skip_value(wire)?,
            }
        }
        Ok(())
    }

    fn write_proto(&self, encoder: &mut ProtoEncoder) -> Result<()> {
        if self.x.is_present() {
            self.x.write_proto(encoder)?;
        }
        if self.y.is_present() {
            self.y.write_proto(encoder)?;
        }
        if self.s.is_present() {
            self.s.write_proto(encoder)?;
        }
        Ok(())
    }

    fn serialized_proto_size(&self) -> usize {
        let mut size = 0;
        if self.x.is_present() {
            size += self.x.serialized_proto_size();
        }
        if self.y.is_present() {
            size += self.y.serialized_proto_size();
        }
        if self.s.is_present() {
            size += self.s.serialized_proto_size();
        }
        size
    }

    fn parse_ros(&mut self, cursor: &mut RosCursor<'_>) -> Result<()> {
        if self.populated {
            return Err(CodecError::already_populated(Self::FULL_NAME));
        }
        self.populated = true;
        self.x.parse_ros(cursor)?;
        self.y.parse_ros(cursor)?;
        self.s.parse_ros(cursor)?;
        Ok(())
    }

    fn write_ros(&self, encoder: &mut RosEncoder) -> Result<()> {
        self.x.write_ros(encoder)?;
        self.y.write_ros(encoder)?;
        self.s.write_ros(encoder)?;
        Ok(())
    }

    fn serialized_ros_size(&self) -> usize {
        let mut size = 0;
        size += self.x.serialized_ros_size();
        size += self.y.serialized_ros_size();
        size += self.s.serialized_ros_size();
        size
    }

    fn full_name(&self) -> &'static str {
        Self::FULL_NAME
    }

    fn short_name(&self) -> &'static str {
        Self::NAME
    }
}

pub struct VecMessage {
    populated: bool,
    pub vi32: Int32SeqField,
}

impl VecMessage {
    pub const FULL_NAME: &'static str = "foo.bar.VecMessage";
    pub const NAME: &'static str = "VecMessage";

    pub fn new() -> Self {
        Self {
            populated: false,
            vi32: Int32SeqField::new(4),
        }
    }

    pub fn is_populated(&self) -> bool {
        self.populated
    }
}

impl Default for VecMessage {
    fn default() -> Self {
        Self::new()
    }
}

impl Transcode for VecMessage {
    fn parse_proto(&mut self, cursor: &mut ProtoCursor<'_>) -> Result<()> {
        if self.populated {
            return Err(CodecError::already_populated(Self::FULL_NAME));
        }
        self.populated = true;
        while !cursor.at_end() {
            let (number, wire) = cursor.read_tag()?;
            match number {
                4 => self.vi32.parse_proto(wire, cursor)?,
                _ => cursor.skip_value(wire)?,
            }
        }
        Ok(())
    }

    fn write_proto(&self, encoder: &mut ProtoEncoder) -> Result<()> {
        self.vi32.write_proto(encoder)?;
        Ok(())
    }

    fn serialized_proto_size(&self) -> usize {
        let mut size = 0;
        size += self.vi32.serialized_proto_size();
        size
    }

    fn parse_ros(&mut self, cursor: &mut RosCursor<'_>) -> Result<()> {
        if self.populated {
            return Err(CodecError::already_populated(Self::FULL_NAME));
        }
        self.populated = true;
        self.vi32.parse_ros(cursor)?;
        Ok(())
    }

    fn write_ros(&self, encoder: &mut RosEncoder) -> Result<()> {
        self.vi32.write_ros(encoder)?;
        Ok(())
    }

    fn serialized_ros_size(&self) -> usize {
        let mut size = 0;
        size += self.vi32.serialized_ros_size();
        size
    }

    fn full_name(&self) -> &'static str {
        Self::FULL_NAME
    }

    fn short_name(&self) -> &'static str {
        Self::NAME
    }
}

pub struct StrVecMessage {
    populated: bool,
    pub vstr: StringSeqField,
}

impl StrVecMessage {
    pub const FULL_NAME: &'static str = "foo.bar.StrVecMessage";
    pub const NAME: &'static str = "StrVecMessage";

    pub fn new() -> Self {
        Self {
            populated: false,
            vstr: StringSeqField::new(5),
        }
    }

    pub fn is_populated(&self) -> bool {
        self.populated
    }
}

impl Default for StrVecMessage {
    fn default() -> Self {
        Self::new()
    }
}

impl Transcode for StrVecMessage {
    fn parse_proto(&mut self, cursor: &mut ProtoCursor<'_>) -> Result<()> {
        if self.populated {
            return Err(CodecError::already_populated(Self::FULL_NAME));
        }
        self.populated = true;
        while !cursor.at_end() {
            let (number, wire) = cursor.read_tag()?;
            match number {
                5 => self.vstr.parse_proto(cursor)?,
                _ => cursor.skip_value(wire)?,
            }
        }
        Ok(())
    }

    fn write_proto(&self, encoder: &mut ProtoEncoder) -> Result<()> {
        self.vstr.write_proto(encoder)?;
        Ok(())
    }

    fn serialized_proto_size(&self) -> usize {
        let mut size = 0;
        size += self.vstr.serialized_proto_size();
        size
    }

    fn parse_ros(&mut self, cursor: &mut RosCursor<'_>) -> Result<()> {
        if self.populated {
            return Err(CodecError::already_populated(Self::FULL_NAME));
        }
        self.populated = true;
        self.vstr.parse_ros(cursor)?;
        Ok(())
    }

    fn write_ros(&self, encoder: &mut RosEncoder) -> Result<()> {
        self.vstr.write_ros(encoder)?;
        Ok(())
    }

    fn serialized_ros_size(&self) -> usize {
        let mut size = 0;
        size += self.vstr.serialized_ros_size();
        size
    }

    fn full_name(&self) -> &'static str {
        Self::FULL_NAME
    }

    fn short_name(&self) -> &'static str {
        Self::NAME
    }
}

pub struct UnionMessageU {
    pub discriminator: u32,
    pub u1a: Int32Field,
    pub u1b: StringField,
}

impl UnionMessageU {
    pub fn new() -> Self {
        Self {
            discriminator: 0,
            u1a: Int32Field::new(6),
            u1b: StringField::new(7),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }

    pub fn serialized_proto_size(&self) -> usize {
        match self.discriminator {
            6 => self.u1a.serialized_proto_size(),
            7 => self.u1b.serialized_proto_size(),
            _ => 0,
        }
    }

    pub fn write_proto(&self, encoder: &mut ProtoEncoder) -> Result<()> {
        match self.discriminator {
            6 => self.u1a.write_proto(encoder),
            7 => self.u1b.write_proto(encoder),
            _ => Ok(()),
        }
    }

    pub fn serialized_ros_size(&self) -> usize {
        let mut size = 4;
        size += self.u1a.serialized_ros_size();
        size += self.u1b.serialized_ros_size();
        size
    }

    pub fn write_ros(&self, encoder: &mut RosEncoder) -> Result<()> {
        encoder.int32(self.discriminator as i32)?;
        self.u1a.write_ros(encoder)?;
        self.u1b.write_ros(encoder)?;
        Ok(())
    }

    pub fn parse_ros(&mut self, cursor: &mut RosCursor<'_>) -> Result<()> {
        self.discriminator = cursor.read_i32()? as u32;
        self.u1a.parse_ros(cursor)?;
        self.u1b.parse_ros(cursor)?;
        Ok(())
    }
}

impl Default for UnionMessageU {
    fn default() -> Self {
        Self::new()
    }
}

pub struct UnionMessage {
    populated: bool,
    pub u: UnionMessageU,
}

impl UnionMessage {
    pub const FULL_NAME: &'static str = "foo.bar.UnionMessage";
    pub const NAME: &'static str = "UnionMessage";

    pub fn new() -> Self {
        Self {
            populated: false,
            u: UnionMessageU::new(),
        }
    }

    pub fn is_populated(&self) -> bool {
        self.populated
    }
}

impl Default for UnionMessage {
    fn default() -> Self {
        Self::new()
    }
}

impl Transcode for UnionMessage {
    fn parse_proto(&mut self, cursor: &mut ProtoCursor<'_>) -> Result<()> {
        if self.populated {
            return Err(CodecError::already_populated(Self::FULL_NAME));
        }
        self.populated = true;
        while !cursor.at_end() {
            let (number, wire) = cursor.read_tag()?;
            match number {
                6 => {
                    self.u.clear();
                    self.u.u1a.parse_proto(cursor)?;
                    self.u.discriminator = 6;
                }
                7 => {
                    self.u.clear();
                    self.u.u1b.parse_proto(cursor)?;
                    self.u.discriminator = 7;
                }
                _ => cursor.skip_value(wire)?,
            }
        }
        Ok(())
    }

    fn write_proto(&self, encoder: &mut ProtoEncoder) -> Result<()> {
        self.u.write_proto(encoder)?;
        Ok(())
    }

    fn serialized_proto_size(&self) -> usize {
        let mut size = 0;
        size += self.u.serialized_proto_size();
        size
    }

    fn parse_ros(&mut self, cursor: &mut RosCursor<'_>) -> Result<()> {
        if self.populated {
            return Err(CodecError::already_populated(Self::FULL_NAME));
        }
        self.populated = true;
        self.u.parse_ros(cursor)?;
        Ok(())
    }

    fn write_ros(&self, encoder: &mut RosEncoder) -> Result<()> {
        self.u.write_ros(encoder)?;
        Ok(())
    }

    fn serialized_ros_size(&self) -> usize {
        let mut size = 0;
        size += self.u.serialized_ros_size();
        size
    }

    fn full_name(&self) -> &'static str {
        Self::FULL_NAME
    }

    fn short_name(&self) -> &'static str {
        Self::NAME
    }
}

pub struct TestMessageU {
    pub discriminator: u32,
    pub u1a: Int32Field,
    pub u1b: StringField,
}

impl TestMessageU {
    pub fn new() -> Self {
        Self {
            discriminator: 0,
            u1a: Int32Field::new(6),
            u1b: StringField::new(7),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }

    pub fn serialized_proto_size(&self) -> usize {
        match self.discriminator {
            6 => self.u1a.serialized_proto_size(),
            7 => self.u1b.serialized_proto_size(),
            _ => 0,
        }
    }

    pub fn write_proto(&self, encoder: &mut ProtoEncoder) -> Result<()> {
        match self.discriminator {
            6 => self.u1a.write_proto(encoder),
            7 => self.u1b.write_proto(encoder),
            _ => Ok(()),
        }
    }

    pub fn serialized_ros_size(&self) -> usize {
        let mut size = 4;
        size += self.u1a.serialized_ros_size();
        size += self.u1b.serialized_ros_size();
        size
    }

    pub fn write_ros(&self, encoder: &mut RosEncoder) -> Result<()> {
        encoder.int32(self.discriminator as i32)?;
        self.u1a.write_ros(encoder)?;
        self.u1b.write_ros(encoder)?;
        Ok(())
    }

    pub fn parse_ros(&mut self, cursor: &mut RosCursor<'_>) -> Result<()> {
        self.discriminator = cursor.read_i32()? as u32;
        self.u1a.parse_ros(cursor)?;
        self.u1b.parse_ros(cursor)?;
        Ok(())
    }
}

impl Default for TestMessageU {
    fn default() -> Self {
        Self::new()
    }
}

pub struct TestMessage {
    populated: bool,
    pub x: Int32Field,
    pub y: Int32Field,
    pub s: StringField,
    pub vi32: Int32SeqField,
    pub vstr: StringSeqField,
    pub u: TestMessageU,
    pub m: MessageField<InnerMessage>,
    pub vm: MessageSeqField<InnerMessage>,
    pub e: EnumField,
}

impl TestMessage {
    pub const FULL_NAME: &'static str = "foo.bar.TestMessage";
    pub const NAME: &'static str = "TestMessage";

    pub fn new() -> Self {
        Self {
            populated: false,
            x: Int32Field::new(1),
            y: Int32Field::new(2),
            s: StringField::new(3),
            vi32: Int32SeqField::new(4),
            vstr: StringSeqField::new(5),
            u: TestMessageU::new(),
            m: MessageField::new(8),
            vm: MessageSeqField::new(9),
            e: EnumField::new(10),
        }
    }

    pub fn is_populated(&self) -> bool {
        self.populated
    }
}

impl Default for TestMessage {
    fn default() -> Self {
        Self::new()
    }
}

impl Transcode for TestMessage {
    fn parse_proto(&mut self, cursor: &mut ProtoCursor<'_>) -> Result<()> {
        if self.populated {
            return Err(CodecError::already_populated(Self::FULL_NAME));
        }
        self.populated = true;
        while !cursor.at_end() {
            let (number, wire) = cursor.read_tag()?;
            match number {
                1 => self.x.parse_proto(cursor)?,
                2 => self.y.parse_proto(cursor)?,
                3 => self.s.parse_proto(cursor)?,
                4 => self.vi32.parse_proto(wire, cursor)?,
                5 => self.vstr.parse_proto(cursor)?,
                6 => {
                    self.u.clear();
                    self.u.u1a.parse_proto(cursor)?;
                    self.u.discriminator = 6;
                }
                7 => {
                    self.u.clear();
                    self.u.u1b.parse_proto(cursor)?;
                    self.u.discriminator = 7;
                }
                8 => self.m.parse_proto(cursor)?,
                9 => self.vm.parse_proto(cursor)?,
                10 => self.e.parse_proto(cursor)?,
                _ => cursor.skip_value(wire)?,
            }
        }
        Ok(())
    }

    fn write_proto(&self, encoder: &mut ProtoEncoder) -> Result<()> {
        if self.x.is_present() {
            self.x.write_proto(encoder)?;
        }
        if self.y.is_present() {
            self.y.write_proto(encoder)?;
        }
        if self.s.is_present() {
            self.s.write_proto(encoder)?;
        }
        self.vi32.write_proto(encoder)?;
        self.vstr.write_proto(encoder)?;
        self.u.write_proto(encoder)?;
        if self.m.is_present() {
            self.m.write_proto(encoder)?;
        }
        self.vm.write_proto(encoder)?;
        if self.e.is_present() {
            self.e.write_proto(encoder)?;
        }
        Ok(())
    }

    fn serialized_proto_size(&self) -> usize {
        let mut size = 0;
        if self.x.is_present() {
            size += self.x.serialized_proto_size();
        }
        if self.y.is_present() {
            size += self.y.serialized_proto_size();
        }
        if self.s.is_present() {
            size += self.s.serialized_proto_size();
        }
        size += self.vi32.serialized_proto_size();
        size += self.vstr.serialized_proto_size();
        size += self.u.serialized_proto_size();
        if self.m.is_present() {
            size += self.m.serialized_proto_size();
        }
        size += self.vm.serialized_proto_size();
        if self.e.is_present() {
            size += self.e.serialized_proto_size();
        }
        size
    }

    fn parse_ros(&mut self, cursor: &mut RosCursor<'_>) -> Result<()> {
        if self.populated {
            return Err(CodecError::already_populated(Self::FULL_NAME));
        }
        self.populated = true;
        self.x.parse_ros(cursor)?;
        self.y.parse_ros(cursor)?;
        self.s.parse_ros(cursor)?;
        self.vi32.parse_ros(cursor)?;
        self.vstr.parse_ros(cursor)?;
        self.u.parse_ros(cursor)?;
        self.m.parse_ros(cursor)?;
        self.vm.parse_ros(cursor)?;
        self.e.parse_ros(cursor)?;
        Ok(())
    }

    fn write_ros(&self, encoder: &mut RosEncoder) -> Result<()> {
        self.x.write_ros(encoder)?;
        self.y.write_ros(encoder)?;
        self.s.write_ros(encoder)?;
        self.vi32.write_ros(encoder)?;
        self.vstr.write_ros(encoder)?;
        self.u.write_ros(encoder)?;
        self.m.write_ros(encoder)?;
        self.vm.write_ros(encoder)?;
        self.e.write_ros(encoder)?;
        Ok(())
    }

    fn serialized_ros_size(&self) -> usize {
        let mut size = 0;
        size += self.x.serialized_ros_size();
        size += self.y.serialized_ros_size();
        size += self.s.serialized_ros_size();
        size += self.vi32.serialized_ros_size();
        size += self.vstr.serialized_ros_size();
        size += self.u.serialized_ros_size();
        size += self.m.serialized_ros_size();
        size += self.vm.serialized_ros_size();
        size += self.e.serialized_ros_size();
        size
    }

    fn full_name(&self) -> &'static str {
        Self::FULL_NAME
    }

    fn short_name(&self) -> &'static str {
        Self::NAME
    }
}

pub struct AnyCarrier {
    populated: bool,
    pub payload: AnyField,
}

impl AnyCarrier {
    pub const FULL_NAME: &'static str = "foo.bar.AnyCarrier";
    pub const NAME: &'static str = "AnyCarrier";

    pub fn new() -> Self {
        Self {
            populated: false,
            payload: AnyField::new(1),
        }
    }

    pub fn is_populated(&self) -> bool {
        self.populated
    }
}

impl Default for AnyCarrier {
    fn default() -> Self {
        Self::new()
    }
}

impl Transcode for AnyCarrier {
    fn parse_proto(&mut self, cursor: &mut ProtoCursor<'_>) -> Result<()> {
        if self.populated {
            return Err(CodecError::already_populated(Self::FULL_NAME));
        }
        self.populated = true;
        while !cursor.at_end() {
            let (number, wire) = cursor.read_tag()?;
            match number {
                1 => self.payload.parse_proto(cursor)?,
                _ => cursor.skip_value(wire)?,
            }
        }
        Ok(())
    }

    fn write_proto(&self, encoder: &mut ProtoEncoder) -> Result<()> {
        if self.payload.is_present() {
            self.payload.write_proto(encoder)?;
        }
        Ok(())
    }

    fn serialized_proto_size(&self) -> usize {
        let mut size = 0;
        if self.payload.is_present() {
            size += self.payload.serialized_proto_size();
        }
        size
    }

    fn parse_ros(&mut self, cursor: &mut RosCursor<'_>) -> Result<()> {
        if self.populated {
            return Err(CodecError::already_populated(Self::FULL_NAME));
        }
        self.populated = true;
        self.payload.parse_ros(cursor)?;
        Ok(())
    }

    fn write_ros(&self, encoder: &mut RosEncoder) -> Result<()> {
        self.payload.write_ros(encoder)?;
        Ok(())
    }

    fn serialized_ros_size(&self) -> usize {
        let mut size = 0;
        size += self.payload.serialized_ros_size();
        size
    }

    fn full_name(&self) -> &'static str {
        Self::FULL_NAME
    }

    fn short_name(&self) -> &'static str {
        Self::NAME
    }
}

/// Publish every message type in this module to the global registry.
pub fn register_types() {
    registry::register_message(InnerMessage::FULL_NAME, || Box::new(InnerMessage::new()));
    registry::register_message(ScalarsMessage::FULL_NAME, || Box::new(ScalarsMessage::new()));
    registry::register_message(VecMessage::FULL_NAME, || Box::new(VecMessage::new()));
    registry::register_message(StrVecMessage::FULL_NAME, || Box::new(StrVecMessage::new()));
    registry::register_message(UnionMessage::FULL_NAME, || Box::new(UnionMessage::new()));
    registry::register_message(TestMessage::FULL_NAME, || Box::new(TestMessage::new()));
    registry::register_message(AnyCarrier::FULL_NAME, || Box::new(AnyCarrier::new()));
}
