// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Singular scalar field slots.
//!
//! [`ScalarField<T>`] carries one primitive value, its field number, a
//! presence bit, and the Protobuf encoding the schema declared for it
//! (plain varint, ZigZag varint, or fixed-width). On the ROS wire all
//! scalars are fixed-width little-endian regardless of the Protobuf
//! encoding.

use crate::core::Result;
use crate::encoding::protobuf::{
    self, tag_len, varint_len, ProtoCursor, ProtoEncoder, WireType,
};
use crate::encoding::ros::{RosCursor, RosEncoder};

/// How a scalar is encoded on the Protobuf wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarEncoding {
    /// Plain base-128 varint (int32, int64, uint32, uint64, bool, enum)
    Varint,
    /// ZigZag-mapped varint (sint32, sint64)
    ZigZag,
    /// Raw little-endian bytes (fixed32/64, sfixed32/64, float, double)
    Fixed,
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for i32 {}
    impl Sealed for u32 {}
    impl Sealed for i64 {}
    impl Sealed for u64 {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
    impl Sealed for bool {}
}

/// Primitive value types storable in a [`ScalarField`].
///
/// Sealed: the set of scalars is fixed by the wire formats.
pub trait ScalarValue: Copy + Default + PartialEq + sealed::Sealed {
    /// Fixed width on the ROS wire.
    const ROS_SIZE: usize;
    /// Wire type used when the encoding is `Fixed`.
    const FIXED_WIRE: WireType;
    /// Encoding a plain schema declaration of this type uses.
    const DEFAULT_ENCODING: ScalarEncoding;

    /// Value as a varint payload (sign-extended for signed types).
    fn to_varint(self) -> u64;
    /// Inverse of [`to_varint`](ScalarValue::to_varint).
    fn from_varint(raw: u64) -> Self;
    /// Value as a ZigZag varint payload.
    fn to_zigzag(self) -> u64;
    /// Inverse of [`to_zigzag`](ScalarValue::to_zigzag).
    fn from_zigzag(raw: u64) -> Self;
    /// Raw bit pattern for fixed-width encoding.
    fn to_fixed_bits(self) -> u64;
    /// Inverse of [`to_fixed_bits`](ScalarValue::to_fixed_bits).
    fn from_fixed_bits(raw: u64) -> Self;

    /// Write the ROS fixed-width encoding.
    fn write_ros(self, encoder: &mut RosEncoder) -> Result<()>;
    /// Read the ROS fixed-width encoding.
    fn read_ros(cursor: &mut RosCursor<'_>) -> Result<Self>;
}

macro_rules! impl_int_scalar {
    ($ty:ty, $ros_size:expr, $fixed_wire:expr, $wide:ty,
     $zz_enc:path, $zz_dec:path, $zz_mid:ty,
     $write:ident, $read:ident) => {
        impl ScalarValue for $ty {
            const ROS_SIZE: usize = $ros_size;
            const FIXED_WIRE: WireType = $fixed_wire;
            const DEFAULT_ENCODING: ScalarEncoding = ScalarEncoding::Varint;

            #[inline]
            fn to_varint(self) -> u64 {
                self as $wide as u64
            }
            #[inline]
            fn from_varint(raw: u64) -> Self {
                raw as $ty
            }
            #[inline]
            fn to_zigzag(self) -> u64 {
                $zz_enc(self as $zz_mid) as u64
            }
            #[inline]
            fn from_zigzag(raw: u64) -> Self {
                $zz_dec(raw as _) as $ty
            }
            #[inline]
            fn to_fixed_bits(self) -> u64 {
                self as $wide as u64
            }
            #[inline]
            fn from_fixed_bits(raw: u64) -> Self {
                raw as $ty
            }

            fn write_ros(self, encoder: &mut RosEncoder) -> Result<()> {
                encoder.$write(self)
            }
            fn read_ros(cursor: &mut RosCursor<'_>) -> Result<Self> {
                cursor.$read()
            }
        }
    };
}

impl_int_scalar!(
    i32, 4, WireType::Fixed32, i64,
    protobuf::zigzag_encode32, protobuf::zigzag_decode32, i32,
    int32, read_i32
);
impl_int_scalar!(
    u32, 4, WireType::Fixed32, u32,
    protobuf::zigzag_encode32, protobuf::zigzag_decode32, i32,
    uint32, read_u32
);
impl_int_scalar!(
    i64, 8, WireType::Fixed64, i64,
    protobuf::zigzag_encode64, protobuf::zigzag_decode64, i64,
    int64, read_i64
);
impl_int_scalar!(
    u64, 8, WireType::Fixed64, u64,
    protobuf::zigzag_encode64, protobuf::zigzag_decode64, i64,
    uint64, read_u64
);

impl ScalarValue for f32 {
    const ROS_SIZE: usize = 4;
    const FIXED_WIRE: WireType = WireType::Fixed32;
    const DEFAULT_ENCODING: ScalarEncoding = ScalarEncoding::Fixed;

    #[inline]
    fn to_varint(self) -> u64 {
        self.to_bits() as u64
    }
    #[inline]
    fn from_varint(raw: u64) -> Self {
        f32::from_bits(raw as u32)
    }
    #[inline]
    fn to_zigzag(self) -> u64 {
        self.to_varint()
    }
    #[inline]
    fn from_zigzag(raw: u64) -> Self {
        Self::from_varint(raw)
    }
    #[inline]
    fn to_fixed_bits(self) -> u64 {
        self.to_bits() as u64
    }
    #[inline]
    fn from_fixed_bits(raw: u64) -> Self {
        f32::from_bits(raw as u32)
    }

    fn write_ros(self, encoder: &mut RosEncoder) -> Result<()> {
        encoder.float32(self)
    }
    fn read_ros(cursor: &mut RosCursor<'_>) -> Result<Self> {
        cursor.read_f32()
    }
}

impl ScalarValue for f64 {
    const ROS_SIZE: usize = 8;
    const FIXED_WIRE: WireType = WireType::Fixed64;
    const DEFAULT_ENCODING: ScalarEncoding = ScalarEncoding::Fixed;

    #[inline]
    fn to_varint(self) -> u64 {
        self.to_bits()
    }
    #[inline]
    fn from_varint(raw: u64) -> Self {
        f64::from_bits(raw)
    }
    #[inline]
    fn to_zigzag(self) -> u64 {
        self.to_varint()
    }
    #[inline]
    fn from_zigzag(raw: u64) -> Self {
        Self::from_varint(raw)
    }
    #[inline]
    fn to_fixed_bits(self) -> u64 {
        self.to_bits()
    }
    #[inline]
    fn from_fixed_bits(raw: u64) -> Self {
        f64::from_bits(raw)
    }

    fn write_ros(self, encoder: &mut RosEncoder) -> Result<()> {
        encoder.float64(self)
    }
    fn read_ros(cursor: &mut RosCursor<'_>) -> Result<Self> {
        cursor.read_f64()
    }
}

impl ScalarValue for bool {
    const ROS_SIZE: usize = 1;
    // Protobuf has no fixed-width bool; the fixed path falls back to
    // the varint form.
    const FIXED_WIRE: WireType = WireType::Varint;
    const DEFAULT_ENCODING: ScalarEncoding = ScalarEncoding::Varint;

    #[inline]
    fn to_varint(self) -> u64 {
        self as u64
    }
    #[inline]
    fn from_varint(raw: u64) -> Self {
        raw != 0
    }
    #[inline]
    fn to_zigzag(self) -> u64 {
        self as u64
    }
    #[inline]
    fn from_zigzag(raw: u64) -> Self {
        raw != 0
    }
    #[inline]
    fn to_fixed_bits(self) -> u64 {
        self as u64
    }
    #[inline]
    fn from_fixed_bits(raw: u64) -> Self {
        raw != 0
    }

    fn write_ros(self, encoder: &mut RosEncoder) -> Result<()> {
        encoder.boolean(self)
    }
    fn read_ros(cursor: &mut RosCursor<'_>) -> Result<Self> {
        cursor.read_bool()
    }
}

/// A singular scalar field slot.
#[derive(Debug, Clone)]
pub struct ScalarField<T: ScalarValue> {
    number: u32,
    encoding: ScalarEncoding,
    value: T,
    present: bool,
}

impl<T: ScalarValue> ScalarField<T> {
    /// Create a field with the type's default Protobuf encoding.
    pub fn new(number: u32) -> Self {
        Self::with_encoding(number, T::DEFAULT_ENCODING)
    }

    /// Create a fixed-width field (fixed32/64, sfixed32/64).
    pub fn fixed(number: u32) -> Self {
        Self::with_encoding(number, ScalarEncoding::Fixed)
    }

    /// Create a ZigZag varint field (sint32/64).
    pub fn zigzag(number: u32) -> Self {
        Self::with_encoding(number, ScalarEncoding::ZigZag)
    }

    /// Create a field with an explicit encoding.
    pub fn with_encoding(number: u32, encoding: ScalarEncoding) -> Self {
        Self {
            number,
            encoding,
            value: T::default(),
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

    /// Current value (the type default when absent).
    #[inline]
    pub fn get(&self) -> T {
        self.value
    }

    /// Set the value and mark the field present.
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.present = true;
    }

    /// Reset to the empty state, keeping the field number.
    pub fn clear(&mut self) {
        self.value = T::default();
        self.present = false;
    }

    fn wire_type(&self) -> WireType {
        match self.encoding {
            ScalarEncoding::Fixed => T::FIXED_WIRE,
            _ => WireType::Varint,
        }
    }

    fn payload_size(&self) -> usize {
        match self.encoding {
            ScalarEncoding::Varint => varint_len(self.value.to_varint()),
            ScalarEncoding::ZigZag => varint_len(self.value.to_zigzag()),
            ScalarEncoding::Fixed => match T::FIXED_WIRE {
                WireType::Fixed32 => 4,
                WireType::Fixed64 => 8,
                _ => varint_len(self.value.to_varint()),
            },
        }
    }

    /// Exact Protobuf wire size including the tag.
    ///
    /// The caller gates on [`is_present`](ScalarField::is_present);
    /// absent singular fields are simply not sized or written.
    pub fn serialized_proto_size(&self) -> usize {
        tag_len(self.number, self.wire_type()) + self.payload_size()
    }

    /// Write tag and value in Protobuf wire format.
    pub fn write_proto(&self, encoder: &mut ProtoEncoder) -> Result<()> {
        encoder.tag(self.number, self.wire_type())?;
        match self.encoding {
            ScalarEncoding::Varint => encoder.raw_varint(self.value.to_varint()),
            ScalarEncoding::ZigZag => encoder.raw_varint(self.value.to_zigzag()),
            ScalarEncoding::Fixed => match T::FIXED_WIRE {
                WireType::Fixed32 => encoder.fixed32(self.value.to_fixed_bits() as u32),
                WireType::Fixed64 => encoder.fixed64(self.value.to_fixed_bits()),
                _ => encoder.raw_varint(self.value.to_varint()),
            },
        }
    }

    /// Parse one Protobuf value occurrence and mark the field present.
    pub fn parse_proto(&mut self, cursor: &mut ProtoCursor<'_>) -> Result<()> {
        self.value = match self.encoding {
            ScalarEncoding::Varint => T::from_varint(cursor.read_varint()?),
            ScalarEncoding::ZigZag => T::from_zigzag(cursor.read_varint()?),
            ScalarEncoding::Fixed => match T::FIXED_WIRE {
                WireType::Fixed32 => T::from_fixed_bits(cursor.read_fixed32()? as u64),
                WireType::Fixed64 => T::from_fixed_bits(cursor.read_fixed64()?),
                _ => T::from_varint(cursor.read_varint()?),
            },
        };
        self.present = true;
        Ok(())
    }

    /// ROS wire size, unconditionally.
    #[inline]
    pub fn serialized_ros_size(&self) -> usize {
        T::ROS_SIZE
    }

    /// Write the ROS fixed-width encoding, unconditionally.
    pub fn write_ros(&self, encoder: &mut RosEncoder) -> Result<()> {
        self.value.write_ros(encoder)
    }

    /// Read this field's ROS slot positionally.
    ///
    /// Presence becomes true iff the value is non-default, so a
    /// default value written for an absent field stays absent after
    /// the round trip.
    pub fn parse_ros(&mut self, cursor: &mut RosCursor<'_>) -> Result<()> {
        self.value = T::read_ros(cursor)?;
        self.present = self.value != T::default();
        Ok(())
    }
}

/// int32 / sint32 / sfixed32 field.
pub type Int32Field = ScalarField<i32>;
/// uint32 / fixed32 field.
pub type Uint32Field = ScalarField<u32>;
/// int64 / sint64 / sfixed64 field.
pub type Int64Field = ScalarField<i64>;
/// uint64 / fixed64 field.
pub type Uint64Field = ScalarField<u64>;
/// float field.
pub type FloatField = ScalarField<f32>;
/// double field.
pub type DoubleField = ScalarField<f64>;
/// bool field.
pub type BoolField = ScalarField<bool>;
/// Enum field; the underlying value is stored as a 32-bit unsigned.
pub type EnumField = ScalarField<u32>;
