//! Typed Key Module
//!
//! An immutable descriptor binding a raw substrate key name to a native type
//! `T`, together with the conversion rules the facade applies at the
//! substrate boundary.
//!
//! ## Responsibilities
//! - Bind a key name to its type and converter pair at construction
//! - Carry the sample value used as the default-value fallback
//! - Validate custom converter pairs (both or neither)
//!
//! Keys are meant to be declared once per logical storage field and shared:
//!
//! ```
//! use stashkv::TypedKey;
//!
//! let volume = TypedKey::with_default("player.volume", 0.5_f64);
//! assert_eq!(volume.name(), "player.volume");
//! assert!(volume.has_default_value());
//! ```
//!
//! Key-name uniqueness is NOT enforced: two keys with the same name alias
//! the same substrate slot, and aliasing across different types is
//! type-unsafe by design. Callers are responsible for avoiding collisions.

use std::fmt;
use std::sync::Arc;

use tracing::error;

use crate::codec::StorageValue;
use crate::error::{Result, StashError};

/// Bound serializer for a key's value type
type EncodeFn<T> = Arc<dyn Fn(&T) -> Result<String> + Send + Sync>;

/// Bound deserializer for a key's value type
type DecodeFn<T> = Arc<dyn Fn(&str) -> Result<T> + Send + Sync>;

// =============================================================================
// TypedKey
// =============================================================================

/// An immutable descriptor pairing a substrate key name with a value type
/// and its conversion rules.
///
/// Construction binds the converter pair once: either the
/// [`StorageValue`] defaults for `T`, or a caller-supplied custom pair via
/// [`TypedKey::builder`]. Nothing about a key changes afterwards, and a key
/// has no relationship to whether its slot currently holds a value.
pub struct TypedKey<T> {
    /// Raw key name used in the underlying substrate
    name: String,

    /// Never persisted; returned (cloned) as the fallback when
    /// `has_default_value` and the slot is absent
    sample: T,

    has_default_value: bool,
    has_custom_converter: bool,

    encode: EncodeFn<T>,
    decode: DecodeFn<T>,
}

impl<T: StorageValue + 'static> TypedKey<T> {
    /// Create a key with the default conversion rules for `T` and no
    /// default-value behavior.
    pub fn new(name: impl Into<String>, sample: T) -> Self {
        Self::with_parts(name.into(), sample, false, None, None)
    }

    /// Create a key whose `sample` is returned by
    /// [`get_item`](crate::Store::get_item) when the slot is absent.
    pub fn with_default(name: impl Into<String>, sample: T) -> Self {
        Self::with_parts(name.into(), sample, true, None, None)
    }
}

impl<T> TypedKey<T> {
    /// Start building a key with optional parameters (default-value
    /// behavior, custom converter pair).
    pub fn builder(name: impl Into<String>, sample: T) -> TypedKeyBuilder<T> {
        TypedKeyBuilder {
            name: name.into(),
            sample,
            has_default_value: false,
            to_storage: None,
            from_storage: None,
        }
    }

    fn with_parts(
        name: String,
        sample: T,
        has_default_value: bool,
        to_storage: Option<EncodeFn<T>>,
        from_storage: Option<DecodeFn<T>>,
    ) -> Self
    where
        T: StorageValue + 'static,
    {
        let has_custom_converter = to_storage.is_some();
        Self {
            name,
            sample,
            has_default_value,
            has_custom_converter,
            encode: to_storage.unwrap_or_else(|| Arc::new(|value: &T| value.to_storage())),
            decode: from_storage.unwrap_or_else(|| Arc::new(T::from_storage)),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The raw key name used in the underlying substrate
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The sample value carried by this key (never itself persisted)
    pub fn sample_value(&self) -> &T {
        &self.sample
    }

    /// Whether an absent slot yields the sample value instead of `None`
    pub fn has_default_value(&self) -> bool {
        self.has_default_value
    }

    /// Whether a custom converter pair was supplied at construction
    pub fn has_custom_converter(&self) -> bool {
        self.has_custom_converter
    }

    // =========================================================================
    // Bound Converters
    // =========================================================================

    /// Serialize a value with this key's bound converter.
    pub fn to_storage(&self, value: &T) -> Result<String> {
        (self.encode)(value)
    }

    /// Reconstruct a value with this key's bound converter.
    pub fn from_storage(&self, raw: &str) -> Result<T> {
        (self.decode)(raw)
    }
}

impl<T: Clone> Clone for TypedKey<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            sample: self.sample.clone(),
            has_default_value: self.has_default_value,
            has_custom_converter: self.has_custom_converter,
            encode: Arc::clone(&self.encode),
            decode: Arc::clone(&self.decode),
        }
    }
}

impl<T> fmt::Debug for TypedKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedKey")
            .field("name", &self.name)
            .field("has_default_value", &self.has_default_value)
            .field("has_custom_converter", &self.has_custom_converter)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// TypedKeyBuilder
// =============================================================================

/// Builder for [`TypedKey`] with optional parameters.
///
/// The converter setters are independent, mirroring the optional parameter
/// pair they model; [`build`](TypedKeyBuilder::build) rejects a lone
/// override with [`StashError::InconsistentConverter`].
pub struct TypedKeyBuilder<T> {
    name: String,
    sample: T,
    has_default_value: bool,
    to_storage: Option<EncodeFn<T>>,
    from_storage: Option<DecodeFn<T>>,
}

impl<T> TypedKeyBuilder<T> {
    /// Enable or disable default-value behavior (off by default)
    pub fn default_value(mut self, enabled: bool) -> Self {
        self.has_default_value = enabled;
        self
    }

    /// Supply a custom serializer. Must be paired with
    /// [`from_storage`](Self::from_storage).
    pub fn to_storage(
        mut self,
        f: impl Fn(&T) -> Result<String> + Send + Sync + 'static,
    ) -> Self {
        self.to_storage = Some(Arc::new(f));
        self
    }

    /// Supply a custom deserializer. Must be paired with
    /// [`to_storage`](Self::to_storage).
    pub fn from_storage(
        mut self,
        f: impl Fn(&str) -> Result<T> + Send + Sync + 'static,
    ) -> Self {
        self.from_storage = Some(Arc::new(f));
        self
    }

    /// Build a key for a type with no [`StorageValue`] impl. Requires the
    /// full custom converter pair; there are no defaults to fall back on.
    pub fn build_custom(self) -> Result<TypedKey<T>> {
        match (self.to_storage, self.from_storage) {
            (Some(encode), Some(decode)) => Ok(TypedKey {
                name: self.name,
                sample: self.sample,
                has_default_value: self.has_default_value,
                has_custom_converter: true,
                encode,
                decode,
            }),
            (to_storage, from_storage) => Err(inconsistent_converter(
                &self.name,
                to_storage.is_some(),
                from_storage.is_some(),
            )),
        }
    }
}

impl<T: StorageValue + 'static> TypedKeyBuilder<T> {
    /// Build the key, validating the converter pair: both supplied binds the
    /// custom pair, neither binds the defaults for `T`, and exactly one
    /// fails with [`StashError::InconsistentConverter`].
    pub fn build(self) -> Result<TypedKey<T>> {
        let has_to_storage = self.to_storage.is_some();
        let has_from_storage = self.from_storage.is_some();
        if has_to_storage != has_from_storage {
            return Err(inconsistent_converter(
                &self.name,
                has_to_storage,
                has_from_storage,
            ));
        }
        Ok(TypedKey::with_parts(
            self.name,
            self.sample,
            self.has_default_value,
            self.to_storage,
            self.from_storage,
        ))
    }
}

/// Diagnostic emission paired with the validation failure, in addition to
/// failing and never instead of it.
fn inconsistent_converter(name: &str, has_to_storage: bool, has_from_storage: bool) -> StashError {
    error!(
        key = name,
        has_to_storage, has_from_storage, "rejected typed key: converter pair is incomplete"
    );
    StashError::InconsistentConverter
}

// =============================================================================
// Tests
// =============================================================================
