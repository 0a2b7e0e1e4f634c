// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core types shared by every layer: errors, the [`Transcode`] trait,
//! and the process-wide message registry.

pub mod error;
pub mod message;
pub mod registry;

pub use error::{CodecError, Result};
pub use message::Transcode;
pub use registry::{MessageFactory, TypeRegistry};
