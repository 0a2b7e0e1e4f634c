// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Message type registry.
//!
//! Maps fully qualified message names (e.g. `foo.bar.TestMessage`) to
//! factories producing empty instances. Populated once during startup
//! by each generated module's `register_types()`; read-only afterwards.
//! Decoding a `google.protobuf.Any` resolves its `type_url` here.

use super::error::{CodecError, Result};
use super::message::Transcode;
use std::collections::HashMap;
use std::sync::{OnceLock, RwLock};

use tracing::debug;

/// Factory producing an empty, unpopulated message instance.
pub type MessageFactory = fn() -> Box<dyn Transcode>;

/// Thread-safe registry mapping names to values.
///
/// Uses RwLock for concurrent read access with exclusive write access.
/// Writes happen during one-time startup registration; lookups from any
/// thread afterwards observe them (RwLock publication orders the
/// writes before every subsequent read).
pub struct TypeRegistry<T> {
    inner: RwLock<HashMap<String, T>>,
}

impl<T> TypeRegistry<T> {
    /// Create a new empty type registry.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }

    /// Register a value under a name, replacing any previous entry.
    pub fn register(&self, name: impl Into<String>, value: T) -> Result<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|e| CodecError::unsupported(format!("registry lock poisoned: {e}")))?;
        inner.insert(name.into(), value);
        Ok(())
    }

    /// Get a value by name.
    pub fn get(&self, name: &str) -> Result<Option<T>>
    where
        T: Clone,
    {
        let inner = self
            .inner
            .read()
            .map_err(|e| CodecError::unsupported(format!("registry lock poisoned: {e}")))?;
        Ok(inner.get(name).cloned())
    }

    /// Check if a name is registered.
    pub fn contains(&self, name: &str) -> Result<bool> {
        let inner = self
            .inner
            .read()
            .map_err(|e| CodecError::unsupported(format!("registry lock poisoned: {e}")))?;
        Ok(inner.contains_key(name))
    }

    /// Get all registered names.
    pub fn names(&self) -> Result<Vec<String>> {
        let inner = self
            .inner
            .read()
            .map_err(|e| CodecError::unsupported(format!("registry lock poisoned: {e}")))?;
        Ok(inner.keys().cloned().collect())
    }

    /// Get the number of registered entries.
    pub fn len(&self) -> Result<usize> {
        let inner = self
            .inner
            .read()
            .map_err(|e| CodecError::unsupported(format!("registry lock poisoned: {e}")))?;
        Ok(inner.len())
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

impl<T> Default for TypeRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// The process-wide message registry, lazily initialized.
fn global() -> &'static TypeRegistry<MessageFactory> {
    static REGISTRY: OnceLock<TypeRegistry<MessageFactory>> = OnceLock::new();
    REGISTRY.get_or_init(TypeRegistry::new)
}

/// Register a message factory under its fully qualified name.
///
/// Called from generated `register_types()` functions during startup.
pub fn register_message(full_name: &str, factory: MessageFactory) {
    debug!(message = full_name, "registering message type");
    // The global registry's lock cannot be poisoned by register/lookup.
    let _ = global().register(full_name, factory);
}

/// Strip a type-URL prefix such as `type.googleapis.com/` from a name.
///
/// Everything up to and including the first `/` is removed; a bare
/// fully qualified name passes through unchanged.
pub fn strip_type_url(type_url: &str) -> &str {
    match type_url.find('/') {
        Some(pos) => &type_url[pos + 1..],
        None => type_url,
    }
}

/// Check whether a type is registered, accepting type-URL form.
pub fn is_registered(type_url: &str) -> bool {
    global()
        .contains(strip_type_url(type_url))
        .unwrap_or(false)
}

/// Create an empty instance of a registered message type.
///
/// Accepts either a fully qualified name or a type URL. Fails with
/// `UnknownType` if the name is not registered.
pub fn create_message(type_url: &str) -> Result<Box<dyn Transcode>> {
    let name = strip_type_url(type_url);
    match global().get(name)? {
        Some(factory) => Ok(factory()),
        None => Err(CodecError::unknown_type(name)),
    }
}
