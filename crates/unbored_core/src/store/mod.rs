//! Persistent key-value store adapter.
//!
//! # Responsibility
//! - Load and save whole JSON values under named keys through an injected
//!   backend.
//! - Absorb backend unavailability and malformed stored data so repository
//!   code never branches on the environment.
//!
//! # Invariants
//! - `load` never fails: absent, unavailable or unparseable data yields the
//!   type's default value.
//! - Malformed stored data is self-healed by rewriting a valid default
//!   serialization.
//! - `save` serializes the entire value; there is no partial update.

use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

/// Failure raised by a storage backend. The [`Store`] wrapper downgrades
/// these to logged no-ops; only backend implementors see this type.
#[derive(Debug)]
pub enum BackendError {
    Io(std::io::Error),
    Poisoned,
}

impl Display for BackendError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Poisoned => write!(f, "backend lock poisoned"),
        }
    }
}

impl Error for BackendError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Poisoned => None,
        }
    }
}

impl From<std::io::Error> for BackendError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

pub type BackendResult<T> = Result<T, BackendError>;

/// Raw string storage under named keys.
///
/// Availability is encoded in the implementing type: callers never
/// feature-detect the environment. A permanently unavailable backend simply
/// returns `None` from `get` and accepts `put` as a no-op.
pub trait StorageBackend {
    /// Returns the stored value for `key`, or `None` when absent.
    fn get(&self, key: &str) -> BackendResult<Option<String>>;
    /// Stores `value` under `key`, replacing any previous value.
    fn put(&self, key: &str, value: &str) -> BackendResult<()>;
}

/// Adapter giving repositories typed load/save over a [`StorageBackend`].
pub struct Store<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> Store<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Loads the value stored under `key`.
    ///
    /// # Contract
    /// - Absent key, unavailable backend, or malformed content all yield
    ///   `T::default()`; none of these raise.
    /// - Malformed content is additionally replaced with a serialized
    ///   default, so the next load parses cleanly.
    pub fn load<T>(&self, key: &str) -> T
    where
        T: DeserializeOwned + Serialize + Default,
    {
        let raw = match self.backend.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return T::default(),
            Err(err) => {
                warn!("event=store_load module=store status=unavailable key={key} error={err}");
                return T::default();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                warn!("event=store_load module=store status=malformed key={key} error={err}");
                let fresh = T::default();
                self.save(key, &fresh);
                fresh
            }
        }
    }

    /// Persists `value` under `key`. Backend failure is logged and dropped.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) {
        let serialized = match serde_json::to_string(value) {
            Ok(serialized) => serialized,
            Err(err) => {
                warn!("event=store_save module=store status=serialize_failed key={key} error={err}");
                return;
            }
        };
        if let Err(err) = self.backend.put(key, &serialized) {
            warn!("event=store_save module=store status=unavailable key={key} error={err}");
        }
    }
}

/// Always-available in-process backend. The default for tests and for
/// sessions that should not touch disk.
#[derive(Default)]
pub struct MemoryBackend {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> BackendResult<Option<String>> {
        let entries = self.entries.lock().map_err(|_| BackendError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> BackendResult<()> {
        let mut entries = self.entries.lock().map_err(|_| BackendError::Poisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-per-key backend rooted at a data directory.
///
/// Each key maps to `<dir>/<key>.json`. The directory is created on first
/// write.
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StorageBackend for FileBackend {
    fn get(&self, key: &str) -> BackendResult<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn put(&self, key: &str, value: &str) -> BackendResult<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }
}

/// Backend for execution contexts with no storage at all. Reads see an
/// empty store and writes vanish, matching the degraded contract exactly.
#[derive(Default)]
pub struct UnavailableBackend;

impl StorageBackend for UnavailableBackend {
    fn get(&self, _key: &str) -> BackendResult<Option<String>> {
        Ok(None)
    }

    fn put(&self, _key: &str, _value: &str) -> BackendResult<()> {
        Ok(())
    }
}
