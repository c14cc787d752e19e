//! Tests for durable-store configuration defaults and fail-closed resolution.

use extref_infra::config::{DEFAULT_FSYNC_ON_WRITE, DEFAULT_STORE_CAPACITY, StoreConfig};

#[test]
fn test_default_config_uses_documented_values() {
    let config = StoreConfig::default();
    assert_eq!(config.capacity, DEFAULT_STORE_CAPACITY);
    assert_eq!(config.capacity, 4096);
    assert_eq!(config.fsync_on_write, DEFAULT_FSYNC_ON_WRITE);
    assert!(config.fsync_on_write);
    assert!(config.validate().is_ok());
}

#[test]
fn test_resolve_applies_defaults_for_missing_values() {
    let config = StoreConfig::resolve(None, None).expect("defaults resolve");
    assert_eq!(config, StoreConfig::default());
}

#[test]
fn test_resolve_keeps_explicit_values() {
    let config = StoreConfig::resolve(Some(16), Some(false)).expect("explicit values resolve");
    assert_eq!(config.capacity, 16);
    assert!(!config.fsync_on_write);
}

#[test]
fn test_zero_capacity_fails_closed() {
    let err = StoreConfig::resolve(Some(0), None).expect_err("zero capacity rejected");
    assert_eq!(err.param_name, "store_capacity");

    let msg = format!("{err}");
    assert!(msg.contains("fail-closed"), "error must state fail-closed: {msg}");
    assert!(
        msg.contains("store_capacity"),
        "error must identify the parameter: {msg}"
    );
}

#[test]
fn test_validate_rejects_zero_capacity_config() {
    let config = StoreConfig {
        capacity: 0,
        fsync_on_write: true,
    };
    let err = config.validate().expect_err("zero capacity rejected");
    assert_eq!(err.param_name, "store_capacity");
}
