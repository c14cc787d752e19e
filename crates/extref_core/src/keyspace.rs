//! Deterministic storage-key and token derivation.
//!
//! Pure string formatting over a validated scope: no hashing, no randomness,
//! no clock. The same scope derives byte-identical keys and tokens in every
//! session, which is what lets a retried submission present the same token
//! without any coordination.

use crate::scope::{OperationKind, RefScope};

/// Leading segment of every storage key owned by this crate.
pub const STORAGE_KEY_PREFIX: &str = "extref";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyDecodeError {
    InvalidPrefix,
    InvalidFormat,
    UnknownOperation,
}

/// Storage key for a scope: `extref:<op>:<primary>[:<secondary>]`.
pub fn storage_key(scope: &RefScope) -> String {
    match scope.secondary_id() {
        Some(secondary) => format!(
            "{}:{}:{}:{}",
            STORAGE_KEY_PREFIX,
            scope.operation().as_tag(),
            scope.primary_id(),
            secondary
        ),
        None => format!(
            "{}:{}:{}",
            STORAGE_KEY_PREFIX,
            scope.operation().as_tag(),
            scope.primary_id()
        ),
    }
}

/// Token value for a scope: `<op>-<primary>[-<secondary>]`.
pub fn token_value(scope: &RefScope) -> String {
    match scope.secondary_id() {
        Some(secondary) => format!(
            "{}-{}-{}",
            scope.operation().as_tag(),
            scope.primary_id(),
            secondary
        ),
        None => format!("{}-{}", scope.operation().as_tag(), scope.primary_id()),
    }
}

/// Decode a persisted storage key back into its scope.
///
/// Diagnostics helper for inspecting stored entries; composing `storage_key`
/// with this parser is the identity on valid scopes.
pub fn parse_storage_key(key: &str) -> Result<RefScope, KeyDecodeError> {
    let mut parts = key.split(':');
    let prefix = parts.next().ok_or(KeyDecodeError::InvalidFormat)?;
    if prefix != STORAGE_KEY_PREFIX {
        return Err(KeyDecodeError::InvalidPrefix);
    }
    let tag = parts.next().ok_or(KeyDecodeError::InvalidFormat)?;
    let primary = parts.next().ok_or(KeyDecodeError::InvalidFormat)?;
    let secondary = parts.next();
    if parts.next().is_some() {
        return Err(KeyDecodeError::InvalidFormat);
    }

    let operation = OperationKind::from_tag(tag).ok_or(KeyDecodeError::UnknownOperation)?;
    RefScope::new(operation, primary, secondary).map_err(|_| KeyDecodeError::InvalidFormat)
}
