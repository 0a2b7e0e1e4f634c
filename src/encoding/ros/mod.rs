// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! ROS serialization format: fixed-width little-endian scalars and
//! length-prefixed strings and sequences.
//!
//! The format is structural, not self-describing: there are no tags,
//! only a fixed field order agreed by sender and receiver. Strings and
//! sequences carry a 4-byte little-endian length/count prefix.

pub mod cursor;
pub mod encoder;

pub use cursor::RosCursor;
pub use encoder::RosEncoder;

/// Size of the length prefix on strings and sequences.
pub const LENGTH_PREFIX_SIZE: usize = 4;
