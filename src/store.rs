// ABOUTME: Thin persistence boundary with in-memory and JSON-file backends
// ABOUTME: Loads never fail; absent or malformed data substitutes the caller's default
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! # Store
//!
//! The engine has no I/O of its own; it reads and writes structured records
//! through this boundary. `load` substitutes the given default for absent or
//! malformed data, so corrupted local state never blocks startup. Writes do
//! surface errors.
//!
//! Two backends ship with the crate: [`MemoryStore`] for tests and ephemeral
//! use, and [`JsonFileStore`] persisting one JSON document for all keys.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::errors::{EngineError, Result};

/// Key-value persistence contract the engine reads from and writes to.
pub trait Store {
    /// Load the value at `key`, substituting `default` when the key is absent
    /// or its data does not deserialize.
    fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> T;

    /// Persist `value` at `key`.
    fn save<T: Serialize>(&mut self, key: &str, value: &T) -> Result<()>;

    /// Remove `key`; absent keys are a no-op.
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Decode a stored JSON value, falling back to the default on shape mismatch.
fn decode_or_default<T: DeserializeOwned>(key: &str, raw: Option<&Value>, default: T) -> T {
    match raw {
        None => default,
        Some(value) => match serde_json::from_value(value.clone()) {
            Ok(decoded) => decoded,
            Err(err) => {
                warn!(key, %err, "malformed stored value, substituting default");
                default
            }
        },
    }
}

/// Volatile store backed by a map; state lives only as long as the value.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, Value>,
}

impl MemoryStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        decode_or_default(key, self.entries.get(key), default)
    }

    fn save<T: Serialize>(&mut self, key: &str, value: &T) -> Result<()> {
        let encoded = serde_json::to_value(value)?;
        self.entries.insert(key.to_owned(), encoded);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// File-backed store keeping every key in one pretty-printed JSON document.
///
/// The document is read once at open and rewritten on every save; a single
/// writer is assumed, per the engine's concurrency model.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: HashMap<String, Value>,
}

impl JsonFileStore {
    /// Open a store at `path`, reading any existing document.
    ///
    /// A missing file starts empty; an unreadable or malformed file is logged
    /// and treated as empty rather than failing the open.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(entries) => entries,
                Err(err) => {
                    warn!(path = %path.display(), %err, "malformed store file, starting empty");
                    HashMap::new()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(err) => {
                warn!(path = %path.display(), %err, "unreadable store file, starting empty");
                HashMap::new()
            }
        };
        Self { path, entries }
    }

    /// Filesystem location of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, key: &str) -> Result<()> {
        let doc = serde_json::to_string_pretty(&self.entries)?;
        // Write then rename: an interrupted write leaves the previous
        // document intact instead of a half-written one.
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, doc).map_err(|err| EngineError::storage(key, err))?;
        fs::rename(&tmp, &self.path).map_err(|err| EngineError::storage(key, err))
    }
}

impl Store for JsonFileStore {
    fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        decode_or_default(key, self.entries.get(key), default)
    }

    fn save<T: Serialize>(&mut self, key: &str, value: &T) -> Result<()> {
        let encoded = serde_json::to_value(value)?;
        self.entries.insert(key.to_owned(), encoded);
        self.flush(key)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.entries.remove(key).is_some() {
            self.flush(key)?;
        }
        Ok(())
    }
}
