use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Minimal key-value persistence for reader preferences.
///
/// Writes are last-write-wins; no locking is performed.
pub trait PreferenceStore {
    fn read(&self, key: &str) -> Result<Option<String>, PreferenceError>;

    fn write(&mut self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    values: BTreeMap<String, String>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn read(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.values.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// On-disk layout of the preference file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreferenceFile {
    pub updated_at: DateTime<Utc>, // informational only
    pub values: BTreeMap<String, String>,
}

/// Preferences kept in a single JSON file on this device.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Unique per write, so concurrent writers never share a temp file.
    fn temp_path(&self) -> PathBuf {
        static WRITES: AtomicU64 = AtomicU64::new(0);

        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "preferences".to_string());
        let suffix = format!(
            "tmp.{}.{}.{}",
            std::process::id(),
            Utc::now().timestamp_nanos_opt().unwrap_or_default(),
            WRITES.fetch_add(1, Ordering::Relaxed),
        );
        self.path.with_file_name(format!("{file_name}.{suffix}"))
    }

    fn load(&self) -> Result<BTreeMap<String, String>, PreferenceError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let f = fs::File::open(&self.path)?;
        let file: PreferenceFile = serde_json::from_reader(f)?;
        Ok(file.values)
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn read(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.load()?.remove(key))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let mut values = match self.load() {
            Ok(values) => values,
            Err(PreferenceError::Serialization(err)) => {
                warn!(path = %self.path.display(), error = %err, "replacing unreadable preference file");
                BTreeMap::new()
            }
            Err(err) => return Err(err),
        };
        values.insert(key.to_string(), value.to_string());

        let file = PreferenceFile {
            updated_at: Utc::now(),
            values,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        // Write beside the target, then rename over it. Last rename wins.
        let temp_path = self.temp_path();
        let f = fs::File::create(&temp_path)?;
        if let Err(err) = serde_json::to_writer_pretty(&f, &file)
            .map_err(PreferenceError::from)
            .and_then(|_| f.sync_all().map_err(PreferenceError::from))
            .and_then(|_| fs::rename(&temp_path, &self.path).map_err(PreferenceError::from))
        {
            let _ = fs::remove_file(&temp_path);
            return Err(err);
        }

        debug!(path = %self.path.display(), key, "wrote preference");
        Ok(())
    }
}
