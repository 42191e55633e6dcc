//! In-memory substrate
//!
//! Insertion-ordered string map with an optional byte quota. Serves as the
//! bundled reference substrate and the test double for the facade.
//!
//! ## Enumeration Order
//! Insertion order: overwriting a key keeps its position, removing a key
//! compacts the order. Stable within a session, as the contract requires.

use crate::config::MemoryConfig;
use crate::error::{Result, StashError};

use super::Substrate;

/// Insertion-ordered in-memory substrate with optional quota enforcement
///
/// Usage is counted as key bytes + value bytes across all slots, the same
/// accounting browsers apply to their string storage quotas.
#[derive(Debug, Default)]
pub struct MemoryStore {
    /// Slots in enumeration (insertion) order
    slots: Vec<(String, String)>,

    /// Current usage in bytes (key bytes + value bytes)
    used_bytes: usize,

    config: MemoryConfig,
}

impl MemoryStore {
    /// Create an unlimited in-memory substrate
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an in-memory substrate with the given config
    pub fn with_config(config: MemoryConfig) -> Self {
        Self {
            slots: Vec::new(),
            used_bytes: 0,
            config,
        }
    }

    /// Current usage in bytes (key bytes + value bytes)
    pub fn used_bytes(&self) -> usize {
        self.used_bytes
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.slots.iter().position(|(key, _)| key == name)
    }

    fn check_quota(&self, new_used: usize, requested: usize) -> Result<()> {
        if let Some(quota) = self.config.quota_bytes {
            if new_used > quota {
                return Err(StashError::QuotaExceeded {
                    used: self.used_bytes,
                    requested,
                    quota,
                });
            }
        }
        Ok(())
    }
}

impl Substrate for MemoryStore {
    fn get(&self, name: &str) -> Option<&str> {
        self.slots
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    fn set(&mut self, name: &str, value: String) -> Result<()> {
        match self.position(name) {
            // Overwrite: only the value delta counts, position is kept
            Some(index) => {
                let new_used = self.used_bytes - self.slots[index].1.len() + value.len();
                self.check_quota(new_used, value.len())?;
                self.used_bytes = new_used;
                self.slots[index].1 = value;
            }
            // New slot: key bytes count too
            None => {
                let requested = name.len() + value.len();
                let new_used = self.used_bytes + requested;
                self.check_quota(new_used, requested)?;
                self.used_bytes = new_used;
                self.slots.push((name.to_string(), value));
            }
        }
        Ok(())
    }

    fn remove(&mut self, name: &str) {
        if let Some(index) = self.position(name) {
            let (key, value) = self.slots.remove(index);
            self.used_bytes -= key.len() + value.len();
        }
    }

    fn clear(&mut self) {
        self.slots.clear();
        self.used_bytes = 0;
    }

    fn key_at(&self, index: usize) -> Option<&str> {
        self.slots.get(index).map(|(key, _)| key.as_str())
    }

    fn len(&self) -> usize {
        self.slots.len()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_stable_across_overwrite() {
        let mut store = MemoryStore::new();
        store.set("a", "1".into()).unwrap();
        store.set("b", "2".into()).unwrap();
        store.set("a", "333".into()).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.key_at(0), Some("a"));
        assert_eq!(store.key_at(1), Some("b"));
        assert_eq!(store.get("a"), Some("333"));
    }

    #[test]
    fn test_removal_compacts_order() {
        let mut store = MemoryStore::new();
        store.set("a", "1".into()).unwrap();
        store.set("b", "2".into()).unwrap();
        store.set("c", "3".into()).unwrap();
        store.remove("b");

        assert_eq!(store.key_at(0), Some("a"));
        assert_eq!(store.key_at(1), Some("c"));
        assert_eq!(store.key_at(2), None);
    }

    #[test]
    fn test_quota_rejects_without_mutating() {
        let mut store = MemoryStore::with_config(MemoryConfig::builder().quota_bytes(8).build());
        store.set("ab", "cd".into()).unwrap(); // 4 bytes
        let err = store.set("xy", "too long".into()).unwrap_err();

        assert!(matches!(err, StashError::QuotaExceeded { used: 4, .. }));
        assert_eq!(store.len(), 1);
        assert_eq!(store.used_bytes(), 4);
    }

    #[test]
    fn test_overwrite_counts_value_delta_only() {
        let mut store = MemoryStore::with_config(MemoryConfig::builder().quota_bytes(8).build());
        store.set("key", "12345".into()).unwrap(); // 8 bytes, at quota
        store.set("key", "12".into()).unwrap(); // shrinks to 5
        assert_eq!(store.used_bytes(), 5);
        assert!(store.set("key", "123456".into()).is_err()); // would be 9
        assert_eq!(store.get("key"), Some("12"));
    }

    #[test]
    fn test_byte_accounting_tracks_removal_and_clear() {
        let mut store = MemoryStore::new();
        store.set("a", "12".into()).unwrap();
        store.set("b", "3".into()).unwrap();
        assert_eq!(store.used_bytes(), 5);

        store.remove("a");
        assert_eq!(store.used_bytes(), 2);

        store.clear();
        assert_eq!(store.used_bytes(), 0);
        assert!(store.is_empty());
    }
}
