//! JSON data files
//!
//! Each repository owns one [`DataFile`]. Errors name the collection
//! ("vehicles", "customers") so a broken file is easy to locate.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{FleetError, FleetResult};

/// A JSON file holding one collection
#[derive(Debug, Clone)]
pub struct DataFile {
    path: PathBuf,
    label: &'static str,
}

impl DataFile {
    pub fn new(path: PathBuf, label: &'static str) -> Self {
        Self { path, label }
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Parse the file, or return `T::default()` when it has not been written yet
    pub fn load<T>(&self) -> FleetResult<T>
    where
        T: DeserializeOwned + Default,
    {
        let contents = match fs::read(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(T::default()),
            Err(e) => return Err(self.error("read", e)),
        };

        serde_json::from_slice(&contents).map_err(|e| self.error("parse", e))
    }

    /// Replace the file contents; a crash mid-write leaves the old file intact
    pub fn store<T>(&self, data: &T) -> FleetResult<()>
    where
        T: Serialize,
    {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.error("create directory for", e))?;
        }

        let bytes = serde_json::to_vec_pretty(data).map_err(|e| self.error("serialize", e))?;

        // Same directory, so the rename below cannot cross filesystems
        let temp_path = self.path.with_extension("json.tmp");
        let mut file = fs::File::create(&temp_path).map_err(|e| self.error("create temp file for", e))?;
        file.write_all(&bytes)
            .and_then(|_| file.sync_all())
            .map_err(|e| self.error("write", e))?;

        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            self.error("replace", e)
        })
    }

    fn error(&self, action: &str, cause: impl std::fmt::Display) -> FleetError {
        FleetError::Storage(format!(
            "Failed to {} {} file {}: {}",
            action,
            self.label,
            self.path.display(),
            cause
        ))
    }
}
