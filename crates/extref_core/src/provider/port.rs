//! Storage port for persisted reference tokens.
//!
//! Call sites depend on this trait rather than on a concrete store, so the
//! same provider runs over the in-memory backend, the durable file backend,
//! or a test double.

use std::collections::HashMap;
use std::fmt;
use std::sync::Mutex;

// --- Store error --------------------------------------------------------

/// Error returned when the backing store cannot serve an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Backing storage could not be read or written.
    Unavailable { reason: String },
    /// Storage quota is full and a new entry cannot be admitted.
    CapacityExhausted,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Unavailable { reason } => write!(f, "storage unavailable: {reason}"),
            StoreError::CapacityExhausted => write!(f, "storage capacity exhausted"),
        }
    }
}

impl std::error::Error for StoreError {}

// --- Token store port ---------------------------------------------------

/// Key-value port the provider persists tokens through.
pub trait TokenStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, overwriting any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove the value stored under `key`. Returns whether a value was
    /// removed; deleting an absent key is a no-op.
    fn delete(&self, key: &str) -> Result<bool, StoreError>;
}

// --- In-memory store ----------------------------------------------------

/// In-process store over a mutex-guarded map.
///
/// Default backend and test double. An optional capacity bounds the number
/// of live entries to model storage quotas; overwriting an existing key is
/// always admitted.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
    capacity: Option<usize>,
}

impl MemoryStore {
    /// Create an unbounded in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an in-memory store holding at most `capacity` live entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            capacity: Some(capacity),
        }
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .expect("token store mutex poisoned")
            .len()
    }

    /// Whether the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TokenStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self
            .entries
            .lock()
            .expect("token store mutex poisoned")
            .get(key)
            .cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().expect("token store mutex poisoned");
        if let Some(capacity) = self.capacity {
            if !entries.contains_key(key) && entries.len() >= capacity {
                return Err(StoreError::CapacityExhausted);
            }
        }
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self
            .entries
            .lock()
            .expect("token store mutex poisoned")
            .remove(key)
            .is_some())
    }
}
