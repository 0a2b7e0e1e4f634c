// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Typed field slots composed into generated message types.
//!
//! Every slot exposes the same operation set: exact Protobuf and ROS
//! sizing, writes in both formats, parse-one-occurrence for Protobuf,
//! positional parse for ROS, plus presence and field number queries.
//! Generated aggregators own their slots exclusively and drive them in
//! schema declaration order.

pub mod any;
pub mod message;
pub mod repeated;
pub mod scalar;
pub mod string;

pub use any::{AnyField, AnyMessage};
pub use message::MessageField;
pub use repeated::{
    BoolSeqField, DoubleSeqField, EnumSeqField, FloatSeqField, Int32SeqField, Int64SeqField,
    MessageSeqField, ScalarSeqField, StringSeqField, Uint32SeqField, Uint64SeqField,
};
pub use scalar::{
    BoolField, DoubleField, EnumField, FloatField, Int32Field, Int64Field, ScalarEncoding,
    ScalarField, ScalarValue, Uint32Field, Uint64Field,
};
pub use string::{BytesField, StringField};
