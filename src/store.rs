//! Store Facade Module
//!
//! The small set of operations callers use with their typed keys.
//!
//! ## Responsibilities
//! - Apply each key's bound conversion rules at the substrate boundary
//! - Collapse null writes to removal (the substrate cannot store a null)
//! - Serve the default-value fallback for absent slots
//! - Expose indexed enumeration as freshly typed keys
//!
//! ```
//! use stashkv::{Store, TypedKey};
//!
//! let greeting = TypedKey::new("greeting", String::new());
//! let mut store = Store::in_memory();
//!
//! store.set_item(&greeting, "hello".to_string())?;
//! assert_eq!(store.get_item(&greeting)?.as_deref(), Some("hello"));
//! # Ok::<(), stashkv::StashError>(())
//! ```

use tracing::debug;

use crate::codec::StorageValue;
use crate::config::MemoryConfig;
use crate::error::Result;
use crate::key::TypedKey;
use crate::substrate::{MemoryStore, Substrate};

/// Typed facade over a flat string substrate
///
/// All operations are synchronous direct calls against the substrate; the
/// facade adds no locking, retries, or caching. One logical writer context
/// is assumed.
#[derive(Debug)]
pub struct Store<S: Substrate = MemoryStore> {
    substrate: S,
}

impl Store<MemoryStore> {
    /// Create a store over a fresh unlimited in-memory substrate
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }

    /// Create a store over a fresh in-memory substrate with the given config
    pub fn in_memory_with(config: MemoryConfig) -> Self {
        Self::new(MemoryStore::with_config(config))
    }
}

impl<S: Substrate> Store<S> {
    /// Wrap an existing substrate
    pub fn new(substrate: S) -> Self {
        Self { substrate }
    }

    /// Write a value through `key`, creating or overwriting its slot.
    ///
    /// Passing `None` removes the slot instead: the substrate only models
    /// "absent" or "present string", so an absent value always collapses to
    /// removal rather than some serialized null marker.
    ///
    /// Substrate write failures (e.g. quota exceeded) propagate unchanged.
    pub fn set_item<T>(&mut self, key: &TypedKey<T>, value: impl Into<Option<T>>) -> Result<()> {
        let Some(value) = value.into() else {
            self.remove_item(key);
            return Ok(());
        };

        let raw = key.to_storage(&value)?;
        debug!(key = key.name(), bytes = raw.len(), "set");
        self.substrate.set(key.name(), raw)
    }

    /// Read the value for `key`.
    ///
    /// Absent slot: a clone of the key's sample value when the key opts into
    /// default-value behavior, otherwise `None`. Present slot: the stored
    /// text decoded through the key's bound converter — malformed text is a
    /// decode error, never a silent default.
    pub fn get_item<T: Clone>(&self, key: &TypedKey<T>) -> Result<Option<T>> {
        match self.substrate.get(key.name()) {
            Some(raw) => key.from_storage(raw).map(Some),
            None if key.has_default_value() => Ok(Some(key.sample_value().clone())),
            None => Ok(None),
        }
    }

    /// Delete the slot for `key`; no-op if absent
    pub fn remove_item<T>(&mut self, key: &TypedKey<T>) {
        debug!(key = key.name(), "remove");
        self.substrate.remove(key.name());
    }

    /// Empty the entire substrate — every slot, typed or not
    pub fn clear(&mut self) {
        debug!("clear");
        self.substrate.clear();
    }

    /// Wrap the n-th enumerated key name in a fresh typed key carrying the
    /// caller's sample, or `None` past the end.
    ///
    /// The returned key adopts the caller's type, NOT whatever type the slot
    /// was originally written with — type safety here is asserted by the
    /// caller, not verified.
    pub fn key_at<T: StorageValue + 'static>(&self, index: usize, sample: T) -> Option<TypedKey<T>> {
        let name = self.substrate.key_at(index)?;
        Some(TypedKey::new(name, sample))
    }

    /// Count of key/value pairs currently in the substrate
    pub fn len(&self) -> usize {
        self.substrate.len()
    }

    /// Whether the substrate holds no pairs
    pub fn is_empty(&self) -> bool {
        self.substrate.is_empty()
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Borrow the underlying substrate
    pub fn substrate(&self) -> &S {
        &self.substrate
    }

    /// Consume the store, returning the underlying substrate
    pub fn into_substrate(self) -> S {
        self.substrate
    }
}
