// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core error types for protoros.
//!
//! Provides error types for transcoding operations:
//! - Buffer reads and writes in either wire format
//! - Message lifecycle violations
//! - Registry lookups for `google.protobuf.Any`

use std::fmt;

/// Errors that can occur during transcoding operations.
#[derive(Debug, Clone)]
pub enum CodecError {
    /// Buffer ended in the middle of a field
    Truncated {
        /// Requested bytes
        requested: usize,
        /// Available bytes
        available: usize,
        /// Cursor position when the error occurred
        position: usize,
    },

    /// Varint continuation bytes exceed the type limit
    MalformedVarint {
        /// Maximum encoded length for the type
        max_bytes: usize,
        /// Cursor position when the error occurred
        position: usize,
    },

    /// Unsupported wire feature (groups, unknown wire types)
    Unsupported {
        /// What is not supported
        feature: String,
    },

    /// Parse called on a message that has already been populated
    AlreadyPopulated {
        /// Full name of the message type
        message: String,
    },

    /// `Any` refers to a type name not in the registry
    UnknownType {
        /// Type name that was not found
        type_name: String,
    },

    /// A fixed-size output buffer cannot accept the write
    Overflow {
        /// Buffer capacity
        capacity: usize,
        /// Total bytes the write would require
        needed: usize,
    },

    /// Dynamic allocation failed
    Allocation {
        /// Bytes that could not be allocated
        bytes: usize,
    },

    /// A file sink operation failed
    Io {
        /// Underlying error message
        message: String,
    },
}

impl CodecError {
    /// Create a truncated-buffer error.
    pub fn truncated(requested: usize, available: usize, position: usize) -> Self {
        CodecError::Truncated {
            requested,
            available,
            position,
        }
    }

    /// Create a malformed-varint error.
    pub fn malformed_varint(max_bytes: usize, position: usize) -> Self {
        CodecError::MalformedVarint {
            max_bytes,
            position,
        }
    }

    /// Create an unsupported-feature error.
    pub fn unsupported(feature: impl Into<String>) -> Self {
        CodecError::Unsupported {
            feature: feature.into(),
        }
    }

    /// Create an already-populated error.
    pub fn already_populated(message: impl Into<String>) -> Self {
        CodecError::AlreadyPopulated {
            message: message.into(),
        }
    }

    /// Create an unknown-type error.
    pub fn unknown_type(type_name: impl Into<String>) -> Self {
        CodecError::UnknownType {
            type_name: type_name.into(),
        }
    }

    /// Create an overflow error.
    pub fn overflow(capacity: usize, needed: usize) -> Self {
        CodecError::Overflow { capacity, needed }
    }

    /// Create an allocation-failure error.
    pub fn allocation(bytes: usize) -> Self {
        CodecError::Allocation { bytes }
    }

    /// Get structured fields for logging.
    pub fn log_fields(&self) -> Vec<(&'static str, String)> {
        match self {
            CodecError::Truncated {
                requested,
                available,
                position,
            } => vec![
                ("requested", requested.to_string()),
                ("available", available.to_string()),
                ("position", position.to_string()),
            ],
            CodecError::MalformedVarint {
                max_bytes,
                position,
            } => vec![
                ("max_bytes", max_bytes.to_string()),
                ("position", position.to_string()),
            ],
            CodecError::Unsupported { feature } => vec![("feature", feature.clone())],
            CodecError::AlreadyPopulated { message } => vec![("message", message.clone())],
            CodecError::UnknownType { type_name } => vec![("type", type_name.clone())],
            CodecError::Overflow { capacity, needed } => vec![
                ("capacity", capacity.to_string()),
                ("needed", needed.to_string()),
            ],
            CodecError::Allocation { bytes } => vec![("bytes", bytes.to_string())],
            CodecError::Io { message } => vec![("message", message.clone())],
        }
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::Truncated {
                requested,
                available,
                position,
            } => write!(
                f,
                "Buffer truncated: requested {requested} bytes at position {position}, but only {available} bytes available"
            ),
            CodecError::MalformedVarint {
                max_bytes,
                position,
            } => write!(
                f,
                "Malformed varint at position {position}: exceeds maximum length of {max_bytes} bytes"
            ),
            CodecError::Unsupported { feature } => {
                write!(f, "Unsupported feature: '{feature}'")
            }
            CodecError::AlreadyPopulated { message } => {
                write!(f, "Message '{message}' has already been parsed")
            }
            CodecError::UnknownType { type_name } => {
                write!(f, "Unknown message type: '{type_name}'")
            }
            CodecError::Overflow { capacity, needed } => write!(
                f,
                "Buffer overflow: capacity is {capacity} bytes, write requires {needed}"
            ),
            CodecError::Allocation { bytes } => {
                write!(f, "Allocation of {bytes} bytes failed")
            }
            CodecError::Io { message } => {
                write!(f, "I/O error: {message}")
            }
        }
    }
}

impl std::error::Error for CodecError {}

impl From<std::io::Error> for CodecError {
    fn from(err: std::io::Error) -> Self {
        CodecError::Io {
            message: err.to_string(),
        }
    }
}

/// Result type for protoros operations.
pub type Result<T> = std::result::Result<T, CodecError>;
