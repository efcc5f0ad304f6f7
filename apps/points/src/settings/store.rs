//! Key-value backends for persisted preferences.

use std::collections::HashMap;
use std::fmt::Debug;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use serde_json::{Map, Value};
use tracing::warn;

use crate::error::AppError;

/// Opaque key-value persistence. Values are JSON documents.
pub trait SettingsStore: Debug + Send + Sync {
    fn load(&self, key: &str) -> Result<Option<Value>, AppError>;
    fn save(&self, key: &str, value: Value) -> Result<(), AppError>;
}

/// In-process store; contents live as long as the store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<Value>, AppError> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn save(&self, key: &str, value: Value) -> Result<(), AppError> {
        self.entries.lock().insert(key.to_string(), value);
        Ok(())
    }
}

/// All keys in one JSON object file.
///
/// Writes go to a sibling temp file first and are renamed into place, so a
/// crash mid-write leaves the previous file intact.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current file contents. A missing file is empty; a corrupt or
    /// non-object file is logged and treated as empty, so the next save
    /// replaces it.
    fn read_all(&self) -> Result<Map<String, Value>, AppError> {
        let raw = match fs::read(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(e.into()),
        };
        match serde_json::from_slice::<Value>(&raw) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(other) => {
                warn!(
                    path = %self.path.display(),
                    found = json_kind(&other),
                    "settings file is not an object, using defaults"
                );
                Ok(Map::new())
            }
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "settings file unreadable, using defaults"
                );
                Ok(Map::new())
            }
        }
    }
}

impl SettingsStore for JsonFileStore {
    fn load(&self, key: &str) -> Result<Option<Value>, AppError> {
        Ok(self.read_all()?.remove(key))
    }

    fn save(&self, key: &str, value: Value) -> Result<(), AppError> {
        let _guard = self.write_lock.lock();
        let mut all = self.read_all()?;
        all.insert(key.to_string(), value);

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(&Value::Object(all))?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a bool",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
