//! Integration tests for the core singleton lifecycle.
//!
//! Covers uniqueness, first-write-wins argument semantics, reset behavior,
//! and panic safety of a failing constructor. Every test uses its own
//! concrete types, so no `#[serial]` choreography is needed.

use singleton_base::{singleton, Singleton, SingletonError};
use std::sync::Arc;

#[test]
fn test_get_instance_then_plain_access() {
    struct Settings {
        value: u32,
    }

    singleton!(Settings, u32, |value| Settings { value });

    let created = Settings::get_instance(Some(42)).unwrap();
    let fetched = Settings::get_instance(None).unwrap();

    assert!(Arc::ptr_eq(&created, &fetched));
    assert_eq!(fetched.value, 42);
}

#[test]
fn test_first_write_wins() {
    struct Threshold {
        value: u32,
    }

    singleton!(Threshold, u32, |value| Threshold { value });

    let first = Threshold::construct(42);
    let second = Threshold::construct(100);

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(second.value, 42);
}

#[test]
fn test_mixed_entry_points_converge() {
    struct Endpoint {
        url: String,
    }

    singleton!(Endpoint, String, |url| Endpoint { url });

    let via_construct = Endpoint::construct("https://first".to_string());
    let via_accessor = Endpoint::get_instance(Some("https://second".to_string())).unwrap();

    assert!(Arc::ptr_eq(&via_construct, &via_accessor));
    assert_eq!(via_accessor.url, "https://first");
}

#[test]
fn test_reset_creates_distinct_identity() {
    #[derive(Default)]
    struct Session;

    singleton!(Session);

    let before = Session::construct(());
    Session::reset_instance();
    let after = Session::construct(());

    assert!(!Arc::ptr_eq(&before, &after));
    // The pre-reset Arc stays usable; it is just no longer canonical.
    assert!(Arc::strong_count(&before) >= 1);
}

#[test]
fn test_reset_is_idempotent() {
    #[derive(Default)]
    struct Scratch;

    singleton!(Scratch);

    assert!(!Scratch::has_instance());
    Scratch::reset_instance();
    Scratch::reset_instance();
    assert!(!Scratch::has_instance());

    let _ = Scratch::construct(());
    Scratch::reset_instance();
    Scratch::reset_instance();
    assert!(!Scratch::has_instance());
}

#[test]
fn test_access_after_reset_fails_until_recreated() {
    #[derive(Debug, Default)]
    struct Token;

    singleton!(Token);

    let _ = Token::construct(());
    Token::reset_instance();

    let err = Token::get_instance(None).unwrap_err();
    assert!(matches!(err, SingletonError::Uninitialized { .. }));

    let recreated = Token::get_instance(Some(())).unwrap();
    assert!(Token::has_instance());
    drop(recreated);
}

#[test]
fn test_has_instance_reports_lifecycle() {
    #[derive(Default)]
    struct Probe;

    singleton!(Probe);

    assert!(!Probe::has_instance());
    let _ = Probe::construct(());
    assert!(Probe::has_instance());
    Probe::reset_instance();
    assert!(!Probe::has_instance());
}

#[test]
fn test_panicking_constructor_caches_nothing() {
    struct Fragile;

    // `true` asks the constructor to fail.
    singleton!(Fragile, bool, |fail| {
        if fail {
            panic!("constructor failure");
        }
        Fragile
    });

    let result = std::panic::catch_unwind(|| Fragile::construct(true));
    assert!(result.is_err());

    // The failed construction must not leave a partially-constructed
    // instance cached, and the registry must stay usable.
    assert!(!Fragile::has_instance());

    let recovered = Fragile::construct(false);
    assert!(Fragile::has_instance());
    drop(recovered);
}
