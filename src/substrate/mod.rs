//! Substrate Module
//!
//! The underlying flat string-keyed mapping this crate wraps. The substrate
//! is an external collaborator: its contract is consumed here, not designed.
//!
//! ## Contract
//! - Absence is the only "empty" state — there is no representable stored
//!   null, which is why the facade collapses null writes to removal
//! - `set` may fail (e.g. a quota-exceeded condition); failures propagate
//!   unchanged to the caller with no retry or partial-write recovery
//! - Enumeration order is implementation-defined but stable within a session
//!
//! [`MemoryStore`] is the bundled reference implementation.

mod memory;

pub use memory::MemoryStore;

use crate::error::Result;

/// A flat, insertion-enumerable mapping from string keys to string values.
///
/// All operations are synchronous and single-context: one logical writer
/// owns the substrate, and races with other contexts sharing the same
/// physical storage are out of scope.
pub trait Substrate {
    /// The stored string for `name`, or `None` if the slot is absent
    fn get(&self, name: &str) -> Option<&str>;

    /// Write `name -> value`, creating or overwriting the slot.
    ///
    /// May fail with a quota-exceeded condition; implementations must leave
    /// the substrate unchanged on failure.
    fn set(&mut self, name: &str, value: String) -> Result<()>;

    /// Delete the slot for `name`; no-op if absent
    fn remove(&mut self, name: &str);

    /// Delete every slot
    fn clear(&mut self);

    /// The n-th key name in enumeration order, or `None` past the end
    fn key_at(&self, index: usize) -> Option<&str>;

    /// Count of key/value pairs currently present
    fn len(&self) -> usize;

    /// Whether the substrate holds no pairs
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
