//! Boxed wrapper strategies
//!
//! Newtype wrappers over the primitive categories, for callers who need a
//! distinct boxed identity in their data model. The boxed categories carry
//! conversion rules that differ from their primitive counterparts:
//!
//! - `BoxedBool` and `BoxedNumber` are NOT special-cased on write — they
//!   serialize through the structured encoder as their primitive JSON form.
//!   On read each gets a dedicated whole-text parse.
//! - `BoxedString` unwraps unchanged on write and wraps the text on read.

use crate::error::Result;

use super::structured::encode_json;
use super::StorageValue;

// =============================================================================
// BoxedBool
// =============================================================================

/// Boxed boolean wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BoxedBool(pub bool);

impl BoxedBool {
    /// Unwrap to the primitive boolean
    pub fn into_inner(self) -> bool {
        self.0
    }
}

impl From<bool> for BoxedBool {
    fn from(value: bool) -> Self {
        Self(value)
    }
}

impl StorageValue for BoxedBool {
    /// Falls through to the structured encoder: the stored text is the
    /// primitive JSON form (`"true"` / `"false"`), not a wrapper object.
    fn to_storage(&self) -> Result<String> {
        encode_json(&self.0)
    }

    /// Whole-text boolean parse, case-insensitive. Anything other than
    /// `"true"` / `"false"` is a decode error, never a truthy coercion.
    fn from_storage(raw: &str) -> Result<Self> {
        Ok(Self(serde_json::from_str(&raw.to_lowercase())?))
    }
}

// =============================================================================
// BoxedNumber
// =============================================================================

/// Boxed number wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoxedNumber(pub f64);

impl BoxedNumber {
    /// Unwrap to the primitive number
    pub fn into_inner(self) -> f64 {
        self.0
    }
}

impl From<f64> for BoxedNumber {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl StorageValue for BoxedNumber {
    /// Falls through to the structured encoder. Note that the structured
    /// encoding of a non-finite number is `"null"`, which reads back as NaN.
    fn to_storage(&self) -> Result<String> {
        encode_json(&self.0)
    }

    /// Whole-text parse with NaN on failure — unlike the primitive number
    /// path, trailing garbage is NOT ignored: `"0.1abc"` reads back as NaN
    /// here but as `0.1` through an `f64` key.
    fn from_storage(raw: &str) -> Result<Self> {
        Ok(Self(raw.trim().parse().unwrap_or(f64::NAN)))
    }
}

// =============================================================================
// BoxedString
// =============================================================================

/// Boxed string wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct BoxedString(pub String);

impl BoxedString {
    /// Unwrap to the primitive string
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for BoxedString {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for BoxedString {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl StorageValue for BoxedString {
    /// Unwraps to the primitive string, stored unchanged (no quoting).
    fn to_storage(&self) -> Result<String> {
        Ok(self.0.clone())
    }

    fn from_storage(raw: &str) -> Result<Self> {
        Ok(Self(raw.to_string()))
    }
}

// =============================================================================
// Tests
// =============================================================================
