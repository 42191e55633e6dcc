//! Structured (JSON) fallback strategies
//!
//! The generic encoder/decoder used when no fast-path strategy applies:
//! arbitrarily nested plain data (objects, arrays, primitives) as JSON text.
//! Malformed stored text surfaces as a decode error, never as a silent
//! default.

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::Result;

use super::StorageValue;

// =============================================================================
// Encoder / Decoder
// =============================================================================

/// Encode any serializable value as structured (JSON) text.
pub fn encode_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

/// Decode structured (JSON) text into any deserializable value.
pub fn decode_json<T: DeserializeOwned>(raw: &str) -> Result<T> {
    Ok(serde_json::from_str(raw)?)
}

// =============================================================================
// Json<T> Wrapper
// =============================================================================

/// Opts an arbitrary serde type into the structured fallback strategy.
///
/// For types you own, [`json_storage!`](crate::json_storage) avoids the
/// wrapper entirely.
///
/// ```
/// use serde::{Deserialize, Serialize};
/// use stashkv::{Json, Store, TypedKey};
///
/// #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// struct Settings { dark_mode: bool, columns: Vec<String> }
///
/// let key = TypedKey::new("settings", Json(Settings { dark_mode: false, columns: vec![] }));
/// let mut store = Store::in_memory();
/// store.set_item(&key, Json(Settings { dark_mode: true, columns: vec!["a".into()] }))?;
/// assert!(store.get_item(&key)?.unwrap().0.dark_mode);
/// # Ok::<(), stashkv::StashError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Json<T>(pub T);

impl<T> Json<T> {
    /// Unwrap to the inner value
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: Serialize + DeserializeOwned> StorageValue for Json<T> {
    fn to_storage(&self) -> Result<String> {
        encode_json(&self.0)
    }

    fn from_storage(raw: &str) -> Result<Self> {
        Ok(Self(decode_json(raw)?))
    }
}

// =============================================================================
// Sequences
// =============================================================================

impl<T: Serialize + DeserializeOwned> StorageValue for Vec<T> {
    fn to_storage(&self) -> Result<String> {
        encode_json(self)
    }

    fn from_storage(raw: &str) -> Result<Self> {
        decode_json(raw)
    }
}

// =============================================================================
// Maps
// =============================================================================

// Maps are stored as an ordered sequence of [key, value] pairs rather than a
// JSON object, so non-string keys survive the round trip.

impl<K, V> StorageValue for BTreeMap<K, V>
where
    K: Serialize + DeserializeOwned + Ord,
    V: Serialize + DeserializeOwned,
{
    fn to_storage(&self) -> Result<String> {
        let pairs: Vec<(&K, &V)> = self.iter().collect();
        encode_json(&pairs)
    }

    fn from_storage(raw: &str) -> Result<Self> {
        let pairs: Vec<(K, V)> = decode_json(raw)?;
        Ok(pairs.into_iter().collect())
    }
}

impl<K, V> StorageValue for HashMap<K, V>
where
    K: Serialize + DeserializeOwned + Eq + Hash,
    V: Serialize + DeserializeOwned,
{
    fn to_storage(&self) -> Result<String> {
        let pairs: Vec<(&K, &V)> = self.iter().collect();
        encode_json(&pairs)
    }

    fn from_storage(raw: &str) -> Result<Self> {
        let pairs: Vec<(K, V)> = decode_json(raw)?;
        Ok(pairs.into_iter().collect())
    }
}

// =============================================================================
// Opt-in Macro
// =============================================================================

/// Implement [`StorageValue`](crate::StorageValue) for one or more serde
/// types via the structured fallback strategy.
///
/// ```
/// use serde::{Deserialize, Serialize};
/// use stashkv::json_storage;
///
/// #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// struct Profile { name: String, logins: u32 }
///
/// json_storage!(Profile);
/// ```
#[macro_export]
macro_rules! json_storage {
    ($($t:ty),* $(,)?) => {$(
        impl $crate::StorageValue for $t {
            fn to_storage(&self) -> $crate::Result<String> {
                $crate::codec::encode_json(self)
            }

            fn from_storage(raw: &str) -> $crate::Result<Self> {
                $crate::codec::decode_json(raw)
            }
        }
    )*};
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_stored_as_pairs() {
        let mut map = BTreeMap::new();
        map.insert(1_i64, "one".to_string());
        map.insert(2_i64, "two".to_string());

        let raw = map.to_storage().unwrap();
        assert_eq!(raw, r#"[[1,"one"],[2,"two"]]"#);
        assert_eq!(BTreeMap::from_storage(&raw).unwrap(), map);
    }

    #[test]
    fn test_hash_map_round_trip() {
        let mut map = HashMap::new();
        map.insert("a".to_string(), 1_u32);
        map.insert("b".to_string(), 2_u32);

        let raw = map.to_storage().unwrap();
        assert_eq!(HashMap::from_storage(&raw).unwrap(), map);
    }

    #[test]
    fn test_malformed_structured_text_is_an_error() {
        assert!(Vec::<u32>::from_storage("not json").is_err());
        assert!(Json::<Vec<u32>>::from_storage("{oops").is_err());
    }

    #[test]
    fn test_json_wrapper_nested_shape() {
        let value = Json(vec![(1_u8, "x".to_string()), (2, "y".to_string())]);
        let raw = value.to_storage().unwrap();
        assert_eq!(Json::from_storage(&raw).unwrap(), value);
    }
}
