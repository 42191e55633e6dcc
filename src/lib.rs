//! # stashkv
//!
//! A typed key-value persistence layer over a flat, string-only storage
//! substrate, with:
//! - Strongly-typed keys declared once, reused everywhere
//! - Per-type default serialization with custom converter overrides
//! - Default-value fallback for absent slots
//! - Null-as-delete write semantics
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Caller                                │
//! │            (holds long-lived TypedKey<T> values)             │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                     Store Facade                             │
//! │        set_item / get_item / remove_item / clear /           │
//! │                    key_at / len                              │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │ StorageValue│          │  Substrate  │
//!   │  (codecs)   │          │ (string map)│
//!   └─────────────┘          └─────────────┘
//! ```
//!
//! The facade never touches native values directly: each [`TypedKey`] carries
//! a bound encoder/decoder pair (either the [`StorageValue`] defaults for its
//! type, or a caller-supplied custom pair), and the facade applies that pair
//! at the substrate boundary.
//!
//! ## Quick Start
//!
//! ```
//! use stashkv::{Store, TypedKey};
//!
//! let volume = TypedKey::new("volume", 0.5_f64);
//! let mut store = Store::in_memory();
//!
//! store.set_item(&volume, 0.8)?;
//! assert_eq!(store.get_item(&volume)?, Some(0.8));
//!
//! store.set_item(&volume, None)?; // null collapses to delete
//! assert_eq!(store.get_item(&volume)?, None);
//! # Ok::<(), stashkv::StashError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod codec;
pub mod key;
pub mod substrate;
pub mod store;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Result, StashError};
pub use config::MemoryConfig;
pub use codec::{BoxedBool, BoxedNumber, BoxedString, Json, StorageValue};
pub use key::{TypedKey, TypedKeyBuilder};
pub use store::Store;
pub use substrate::{MemoryStore, Substrate};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of stashkv
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
