//! Primitive conversion strategies
//!
//! Booleans, numbers, and strings — the fast paths that bypass the
//! structured encoder entirely.

use crate::error::{Result, StashError};

use super::StorageValue;

// =============================================================================
// Boolean
// =============================================================================

impl StorageValue for bool {
    /// Produces `"true"` / `"false"`.
    fn to_storage(&self) -> Result<String> {
        Ok(self.to_string())
    }

    /// Lowercases the text, then decodes it as a JSON boolean literal, so
    /// `"TRUE"` and `"True"` round-trip but `"1"` or `"yes"` fail with a
    /// decode error rather than being coerced.
    fn from_storage(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(&raw.to_lowercase())?)
    }
}

// =============================================================================
// Numbers
// =============================================================================

macro_rules! float_storage_value {
    ($($t:ty),* $(,)?) => {$(
        impl StorageValue for $t {
            fn to_storage(&self) -> Result<String> {
                Ok(self.to_string())
            }

            /// Permissive float-prefix parse: trailing non-numeric text is
            /// ignored, and text with no numeric prefix yields NaN rather
            /// than an error.
            fn from_storage(raw: &str) -> Result<Self> {
                Ok(parse_float_prefix(raw) as $t)
            }
        }
    )*};
}

float_storage_value!(f32, f64);

macro_rules! int_storage_value {
    ($($t:ty),* $(,)?) => {$(
        impl StorageValue for $t {
            fn to_storage(&self) -> Result<String> {
                Ok(self.to_string())
            }

            /// Prefix parse like the float path, but integers have no NaN:
            /// text without a leading integer fails with
            /// [`StashError::ParseNumber`].
            fn from_storage(raw: &str) -> Result<Self> {
                let prefix = int_prefix(raw);
                if prefix.is_empty() {
                    return Err(StashError::ParseNumber {
                        text: raw.to_string(),
                    });
                }
                prefix.parse().map_err(|_| StashError::ParseNumber {
                    text: raw.to_string(),
                })
            }
        }
    )*};
}

int_storage_value!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// =============================================================================
// String
// =============================================================================

impl StorageValue for String {
    /// Stored unchanged — no quoting.
    fn to_storage(&self) -> Result<String> {
        Ok(self.clone())
    }

    fn from_storage(raw: &str) -> Result<Self> {
        Ok(raw.to_string())
    }
}

// =============================================================================
// Prefix Parsers
// =============================================================================

/// Parse the longest leading float out of `raw`, ignoring whatever follows.
///
/// Mirrors the permissive `parseFloat` contract: leading whitespace is
/// skipped, a literal `Infinity` prefix (optionally signed) is honored, and
/// text with no numeric prefix at all yields NaN.
pub(crate) fn parse_float_prefix(raw: &str) -> f64 {
    let text = raw.trim_start();

    if let Some(rest) = text.strip_prefix('-') {
        if rest.starts_with("Infinity") {
            return f64::NEG_INFINITY;
        }
    }
    if text.strip_prefix('+').unwrap_or(text).starts_with("Infinity") {
        return f64::INFINITY;
    }

    let bytes = text.as_bytes();
    let mut end = 0;
    let mut digits = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    while bytes.get(end).is_some_and(|b| b.is_ascii_digit()) {
        end += 1;
        digits += 1;
    }
    if bytes.get(end) == Some(&b'.') {
        end += 1;
        while bytes.get(end).is_some_and(|b| b.is_ascii_digit()) {
            end += 1;
            digits += 1;
        }
    }
    if digits == 0 {
        return f64::NAN;
    }

    // An exponent only counts if at least one exponent digit follows.
    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut cursor = end + 1;
        if matches!(bytes.get(cursor), Some(b'+') | Some(b'-')) {
            cursor += 1;
        }
        let mut exp_digits = 0;
        while bytes.get(cursor).is_some_and(|b| b.is_ascii_digit()) {
            cursor += 1;
            exp_digits += 1;
        }
        if exp_digits > 0 {
            end = cursor;
        }
    }

    text[..end].parse().unwrap_or(f64::NAN)
}

/// The longest leading integer slice of `raw` (optional sign + digits),
/// after skipping leading whitespace. Empty when there is none.
fn int_prefix(raw: &str) -> &str {
    let text = raw.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let sign_only = end;
    while bytes.get(end).is_some_and(|b| b.is_ascii_digit()) {
        end += 1;
    }
    if end == sign_only {
        return "";
    }
    &text[..end]
}

// =============================================================================
// Tests
// =============================================================================
