//! Durable-store configuration defaults with fail-closed resolution.
//!
//! Missing values take the documented default. Explicit values are validated;
//! a value that would leave the store unable to persist anything is rejected
//! rather than applied.

use std::fmt;

/// Default bound on live entries in a durable token store.
pub const DEFAULT_STORE_CAPACITY: usize = 4096;

/// Whether appends are fsynced by default.
pub const DEFAULT_FSYNC_ON_WRITE: bool = true;

/// Error when a configured value cannot produce a working store.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidConfigError {
    pub param_name: &'static str,
    pub reason: &'static str,
}

impl fmt::Display for InvalidConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "config fail-closed: '{}' rejected ({})",
            self.param_name, self.reason
        )
    }
}

impl std::error::Error for InvalidConfigError {}

/// Durable token-store configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    /// Maximum live entries the store admits.
    pub capacity: usize,
    /// Whether each append is fsynced before the write reports success.
    pub fsync_on_write: bool,
}

impl StoreConfig {
    /// Resolve a configuration from optional overrides.
    ///
    /// - If a value is `Some`, it is used (explicit config takes precedence).
    /// - If a value is `None`, the documented default applies.
    /// - A resolved configuration that fails validation is rejected.
    pub fn resolve(
        capacity: Option<usize>,
        fsync_on_write: Option<bool>,
    ) -> Result<StoreConfig, InvalidConfigError> {
        let config = StoreConfig {
            capacity: capacity.unwrap_or(DEFAULT_STORE_CAPACITY),
            fsync_on_write: fsync_on_write.unwrap_or(DEFAULT_FSYNC_ON_WRITE),
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration. Rejects `capacity == 0`: a store that can
    /// never hold an entry would silently disable retry deduplication.
    pub fn validate(&self) -> Result<(), InvalidConfigError> {
        if self.capacity == 0 {
            return Err(InvalidConfigError {
                param_name: "store_capacity",
                reason: "capacity of zero can never persist a token; fail-closed",
            });
        }
        Ok(())
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_STORE_CAPACITY,
            fsync_on_write: DEFAULT_FSYNC_ON_WRITE,
        }
    }
}
