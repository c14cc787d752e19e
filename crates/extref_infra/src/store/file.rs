//! Durable token store: an append-only JSONL event log with replay.
//!
//! Every mutation is one event line. On open, replay reduces the stream into
//! the live key-value view: last write wins, tombstones drop entries. Appends
//! reach the file before the in-memory view updates, so a crash between the
//! two leaves the file ahead of memory, never behind.

use std::collections::HashMap;
use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use extref_core::provider::{StoreError, TokenStore};

use crate::config::StoreConfig;

// --- Store event --------------------------------------------------------

/// Append-only store event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum StoreEvent {
    Set { key: String, value: String },
    Deleted { key: String },
}

// --- File token store ---------------------------------------------------

#[derive(Debug)]
struct FileState {
    entries: HashMap<String, String>,
    file: File,
}

/// Thread-safe token store backed by a JSONL event log.
///
/// Invariants:
/// - A key written before a restart reads the same value after reopen.
/// - A deleted key stays deleted after reopen (tombstone replay).
/// - In-process access is serialized by the store mutex; cross-process
///   writers are not coordinated and resolve last-write-wins at the file
///   level.
#[derive(Debug)]
pub struct FileTokenStore {
    state: Mutex<FileState>,
    config: StoreConfig,
    path: PathBuf,
}

impl FileTokenStore {
    /// Create/load a durable token store backed by a JSONL file.
    ///
    /// Replays any existing event log. Fails with `InvalidData` on an
    /// unparseable line and with `InvalidInput` when the configuration is
    /// invalid or the replayed live entries exceed the configured capacity.
    pub fn open(path: impl AsRef<Path>, config: StoreConfig) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        config
            .validate()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let entries = load_entries(&path)?;
        if entries.len() > config.capacity {
            let reason = format!(
                "token store contains {} live entries but capacity is {}",
                entries.len(),
                config.capacity
            );
            return Err(io::Error::new(io::ErrorKind::InvalidInput, reason));
        }

        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self {
            state: Mutex::new(FileState { entries, file }),
            config,
            path,
        })
    }

    /// Path of the backing event log.
    pub fn storage_path(&self) -> &Path {
        &self.path
    }

    /// Maximum live entries the store admits.
    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.state
            .lock()
            .expect("token store mutex poisoned")
            .entries
            .len()
    }

    /// Whether the store holds no live entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sorted list of live keys, for diagnostics.
    pub fn live_keys(&self) -> Vec<String> {
        let state = self.state.lock().expect("token store mutex poisoned");
        let mut keys: Vec<String> = state.entries.keys().cloned().collect();
        keys.sort();
        keys
    }

    fn append_event(&self, state: &mut FileState, event: &StoreEvent) -> Result<(), StoreError> {
        let line = serde_json::to_string(event).map_err(|e| StoreError::Unavailable {
            reason: format!("failed to encode store event: {e}"),
        })?;
        write_line(&mut state.file, &line, self.config.fsync_on_write).map_err(|e| {
            StoreError::Unavailable {
                reason: format!("failed to append store event {}: {e}", self.path.display()),
            }
        })
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self
            .state
            .lock()
            .expect("token store mutex poisoned")
            .entries
            .get(key)
            .cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut state = self.state.lock().expect("token store mutex poisoned");
        if !state.entries.contains_key(key) && state.entries.len() >= self.config.capacity {
            return Err(StoreError::CapacityExhausted);
        }

        let event = StoreEvent::Set {
            key: key.to_string(),
            value: value.to_string(),
        };
        self.append_event(&mut state, &event)?;
        state.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<bool, StoreError> {
        let mut state = self.state.lock().expect("token store mutex poisoned");
        if !state.entries.contains_key(key) {
            return Ok(false);
        }

        let event = StoreEvent::Deleted {
            key: key.to_string(),
        };
        self.append_event(&mut state, &event)?;
        state.entries.remove(key);
        Ok(true)
    }
}

fn load_entries(path: &Path) -> io::Result<HashMap<String, String>> {
    let file = OpenOptions::new()
        .create(true)
        .read(true)
        .append(true)
        .open(path)?;
    let reader = BufReader::new(file);
    let mut entries = HashMap::new();
    for (index, line_result) in reader.lines().enumerate() {
        let line = line_result?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let event: StoreEvent = serde_json::from_str(trimmed).map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "invalid store event at line {} in {}: {e}",
                    index + 1,
                    path.display()
                ),
            )
        })?;
        apply_event(&mut entries, event);
    }

    Ok(entries)
}

fn apply_event(entries: &mut HashMap<String, String>, event: StoreEvent) {
    match event {
        StoreEvent::Set { key, value } => {
            entries.insert(key, value);
        }
        StoreEvent::Deleted { key } => {
            entries.remove(&key);
        }
    }
}

fn write_line(file: &mut File, line: &str, fsync: bool) -> io::Result<()> {
    file.write_all(line.as_bytes())?;
    file.write_all(b"\n")?;
    if fsync { file.sync_all() } else { file.flush() }
}
