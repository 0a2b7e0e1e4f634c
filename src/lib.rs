// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # protoros
//!
//! Bidirectional transcoder between Protobuf wire format and ROS
//! message serialization.
//!
//! Given a schema described by Protobuf message descriptors, the
//! [`codegen`] module emits, per message type, an aggregator that can
//! parse either format in memory and re-emit the equivalent payload in
//! the other, byte-for-byte faithful to what the native runtimes
//! produce. The emitted code is built from this crate's runtime
//! layers:
//!
//! - [`encoding::protobuf`] — varints, tags, fixed-width values, and
//!   length-delimited payloads
//! - [`encoding::ros`] — fixed little-endian scalars and
//!   length-prefixed strings and sequences
//! - [`fields`] — typed field slots exposing uniform parse/write/size
//!   operations over both formats
//! - [`core`] — errors, the [`Transcode`] trait, and the process-wide
//!   registry that resolves `google.protobuf.Any` values by type name
//!
//! ## Example: transcoding Protobuf bytes to ROS
//!
//! ```ignore
//! use protoros::core::Transcode;
//! use protoros::encoding::protobuf::ProtoCursor;
//! use protoros::encoding::ros::RosEncoder;
//!
//! // `TestMessage` is a type emitted by `protoros::codegen`.
//! let mut message = TestMessage::new();
//! let mut cursor = ProtoCursor::new(&proto_bytes);
//! let mut encoder = RosEncoder::new();
//! message.proto_to_ros(&mut cursor, &mut encoder)?;
//! let ros_bytes = encoder.finish();
//! ```
//!
//! ## String ownership
//!
//! Parsed strings and bytes are copied into owned storage during
//! parse; messages never borrow from their source buffer.
//!
//! ## Registration
//!
//! Rust has no life-before-main, so each emitted module exposes a
//! `register_types()` function. Call it once during startup before
//! decoding any `google.protobuf.Any`; lookups afterwards are
//! read-only and thread-safe.

pub mod codegen;
pub mod core;
pub mod encoding;
pub mod fields;

pub use core::{CodecError, Result, Transcode};
