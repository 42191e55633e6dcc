//! Codec Module
//!
//! Default conversion strategies between native values and the substrate's
//! string representation.
//!
//! ## Responsibilities
//! - Define the [`StorageValue`] trait (one impl per supported type)
//! - Primitive strategies: booleans, numbers, strings
//! - Boxed wrapper strategies with their read/write quirks
//! - Map and timestamp strategies
//! - The generic structured (JSON) fallback
//!
//! ## Dispatch Model
//!
//! Each supported type carries its own impl and the compiler does the
//! dispatch; a key's static type is the ground truth for which strategy
//! applies. Per-category behavior, including the write/read asymmetry of the
//! boxed wrappers, is deliberate:
//!
//! | Type                   | to_storage                    | from_storage                     |
//! |------------------------|-------------------------------|----------------------------------|
//! | `bool`                 | `"true"` / `"false"`          | lowercase, JSON boolean literal  |
//! | numeric primitives     | `to_string()`                 | float-prefix parse (permissive)  |
//! | `String`               | unchanged                     | unchanged                        |
//! | `BoxedBool`            | JSON primitive form           | whole-text boolean parse         |
//! | `BoxedNumber`          | JSON primitive form           | whole-text parse, NaN on failure |
//! | `BoxedString`          | unwrap, unchanged             | wrap the text                    |
//! | `BTreeMap` / `HashMap` | JSON array of `[k, v]` pairs  | decode pairs, rebuild map        |
//! | `DateTime<Utc>`        | ISO-8601, millis, `Z` suffix  | RFC 3339 parse, normalize to UTC |
//! | `Json<T>` / `Vec<T>`   | structured (JSON) encode      | structured decode                |

mod primitives;
mod boxed;
mod structured;
mod timestamp;

pub use boxed::{BoxedBool, BoxedNumber, BoxedString};
pub use structured::{decode_json, encode_json, Json};

use crate::error::Result;

/// Default bidirectional conversion between a native value and the
/// substrate's string representation.
///
/// A [`TypedKey`](crate::TypedKey) constructed without a custom converter
/// pair binds these functions as its conversion rules. Types outside the
/// built-in set can opt into the structured fallback with
/// [`json_storage!`](crate::json_storage) or the [`Json`] wrapper, or supply
/// a custom pair on the key instead.
///
/// Function and closure types deliberately have no impl: a callable cannot
/// round-trip through string storage without executing stored text on read.
pub trait StorageValue: Sized {
    /// Serialize a native value to its stored string form.
    fn to_storage(&self) -> Result<String>;

    /// Reconstruct a native value from its stored string form.
    fn from_storage(raw: &str) -> Result<Self>;
}
