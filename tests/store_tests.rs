//! Store Facade Tests
//!
//! Facade semantics: null-as-delete, default-value fallback, indexed
//! enumeration, clearing, and substrate failure propagation.

use stashkv::{MemoryConfig, StashError, Store, Substrate, TypedKey};

// =============================================================================
// Set / Get / Remove
// =============================================================================

#[test]
fn test_number_round_trip_is_typed() {
    let key = TypedKey::new("n", 0.0_f64);
    let mut store = Store::in_memory();

    store.set_item(&key, 0.1).unwrap();
    // The stored text is "0.1", but get_item returns the number back.
    assert_eq!(store.substrate().get("n"), Some("0.1"));
    assert_eq!(store.get_item(&key).unwrap(), Some(0.1));

    store.set_item(&key, 5.0).unwrap();
    assert_eq!(store.get_item(&key).unwrap(), Some(5.0));
}

#[test]
fn test_boolean_stored_text_and_round_trip() {
    let key = TypedKey::new("b", false);
    let mut store = Store::in_memory();

    store.set_item(&key, true).unwrap();
    assert_eq!(store.substrate().get("b"), Some("true"));
    assert_eq!(store.get_item(&key).unwrap(), Some(true));

    store.set_item(&key, false).unwrap();
    assert_eq!(store.get_item(&key).unwrap(), Some(false));
}

#[test]
fn test_remove_item_then_absent() {
    let key = TypedKey::new("s", String::new());
    let mut store = Store::in_memory();

    store.set_item(&key, "a".to_string()).unwrap();
    assert_eq!(store.get_item(&key).unwrap().as_deref(), Some("a"));

    store.remove_item(&key);
    assert_eq!(store.get_item(&key).unwrap(), None);

    // Removing an absent slot is a no-op.
    store.remove_item(&key);
    assert_eq!(store.len(), 0);
}

#[test]
fn test_none_write_collapses_to_delete() {
    let key = TypedKey::new("n", 0_i64);
    let mut store = Store::in_memory();

    store.set_item(&key, 7).unwrap();
    assert_eq!(store.len(), 1);

    store.set_item(&key, None).unwrap();
    assert_eq!(store.get_item(&key).unwrap(), None);
    assert_eq!(store.len(), 0);

    // Writing None to an already-absent slot is also fine.
    store.set_item(&key, None).unwrap();
    assert_eq!(store.len(), 0);
}

// =============================================================================
// Default-Value Fallback
// =============================================================================

#[test]
fn test_absent_with_default_yields_sample() {
    let key = TypedKey::with_default("prefs", vec![1_u32, 2, 3]);
    let mut store = Store::in_memory();

    // Absent slot: the sample comes back exactly as declared.
    assert_eq!(store.get_item(&key).unwrap(), Some(vec![1, 2, 3]));

    store.set_item(&key, vec![9]).unwrap();
    assert_eq!(store.get_item(&key).unwrap(), Some(vec![9]));

    store.remove_item(&key);
    assert_eq!(store.get_item(&key).unwrap(), Some(vec![1, 2, 3]));
}

#[test]
fn test_absent_without_default_yields_none() {
    let key = TypedKey::new("absent", 0.0_f64);
    let store = Store::in_memory();
    assert_eq!(store.get_item(&key).unwrap(), None);
}

#[test]
fn test_default_flag_via_builder() {
    let key = TypedKey::builder("lang", "en".to_string())
        .default_value(true)
        .build()
        .unwrap();
    let store = Store::in_memory();
    assert_eq!(store.get_item(&key).unwrap().as_deref(), Some("en"));
}

// =============================================================================
// Enumeration: len / key_at
// =============================================================================

#[test]
fn test_len_counts_distinct_names_only() {
    let key = TypedKey::new("dup", 0_i64);
    let mut store = Store::in_memory();

    store.set_item(&key, 1).unwrap();
    store.set_item(&key, 2).unwrap();
    assert_eq!(store.len(), 1);

    store.set_item(&TypedKey::new("other", 0_i64), 3).unwrap();
    assert_eq!(store.len(), 2);
}

#[test]
fn test_key_at_wraps_enumerated_name() {
    let mut store = Store::in_memory();
    store.set_item(&TypedKey::new("first", 0_i64), 10).unwrap();
    store.set_item(&TypedKey::new("second", 0_i64), 20).unwrap();

    let key = store.key_at(1, 0_i64).unwrap();
    assert_eq!(key.name(), "second");
    assert!(!key.has_default_value());
    assert_eq!(store.get_item(&key).unwrap(), Some(20));
}

#[test]
fn test_key_at_out_of_range() {
    let mut store = Store::in_memory();
    assert!(store.key_at(0, 0_i64).is_none());

    store.set_item(&TypedKey::new("only", 0_i64), 1).unwrap();
    assert!(store.key_at(0, 0_i64).is_some());
    assert!(store.key_at(1, 0_i64).is_none());
}

#[test]
fn test_key_at_adopts_caller_type() {
    // The slot was written as a number; the caller re-types it as a string.
    let mut store = Store::in_memory();
    store.set_item(&TypedKey::new("n", 0_i64), 42).unwrap();

    let as_string = store.key_at(0, String::new()).unwrap();
    assert_eq!(store.get_item(&as_string).unwrap().as_deref(), Some("42"));
}

// =============================================================================
// Clear
// =============================================================================

#[test]
fn test_clear_empties_everything() {
    let mut store = Store::in_memory();
    for i in 0..5 {
        store
            .set_item(&TypedKey::new(format!("k{i}"), 0_i64), i)
            .unwrap();
    }
    assert_eq!(store.len(), 5);

    store.clear();
    assert_eq!(store.len(), 0);
    assert!(store.is_empty());
}

// =============================================================================
// Substrate Failure Propagation
// =============================================================================

#[test]
fn test_quota_error_propagates_unchanged() {
    let key = TypedKey::new("big", String::new());
    let mut store = Store::in_memory_with(MemoryConfig::builder().quota_bytes(16).build());

    let err = store
        .set_item(&key, "a".repeat(64))
        .unwrap_err();
    assert!(matches!(err, StashError::QuotaExceeded { quota: 16, .. }));

    // Failed write left nothing behind.
    assert_eq!(store.get_item(&key).unwrap(), None);
    assert_eq!(store.len(), 0);
}

// =============================================================================
// Key-Name Aliasing (Documented Hazard)
// =============================================================================

#[test]
fn test_colliding_names_alias_the_same_slot() {
    let as_number = TypedKey::new("slot", 0_f64);
    let as_string = TypedKey::new("slot", String::new());
    let mut store = Store::in_memory();

    store.set_item(&as_string, "free text".to_string()).unwrap();

    // Same name, different type: reads go through the other key's rules.
    // The permissive number path turns non-numeric text into NaN.
    assert!(store.get_item(&as_number).unwrap().unwrap().is_nan());
}

#[test]
fn test_type_mismatch_surfaces_as_decode_error() {
    let as_string = TypedKey::new("slot", String::new());
    let as_list = TypedKey::new("slot", Vec::<u32>::new());
    let mut store = Store::in_memory();

    store.set_item(&as_string, "not json".to_string()).unwrap();
    assert!(matches!(
        store.get_item(&as_list),
        Err(StashError::Decode(_))
    ));
}
