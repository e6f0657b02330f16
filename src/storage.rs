// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client-local persisted state.
//!
//! One JSON file per key inside the configured state directory. The
//! session and theme snapshots are keyed independently so clearing one
//! never touches the other.

use crate::error::AppError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

/// File-backed key/value storage for persisted snapshots.
#[derive(Clone, Debug)]
pub struct Storage {
    dir: PathBuf,
}

impl Storage {
    /// Open storage rooted at `dir`, creating the directory if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, AppError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .map_err(|e| AppError::Storage(format!("Failed to create {}: {}", dir.display(), e)))?;
        Ok(Self { dir })
    }

    /// Load the snapshot stored under `key`, if any.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, AppError> {
        let path = self.path_for(key);
        let data = match fs::read(&path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(AppError::Storage(format!(
                    "Failed to read {}: {}",
                    path.display(),
                    e
                )))
            }
        };

        serde_json::from_slice(&data)
            .map(Some)
            .map_err(|e| AppError::Storage(format!("Corrupt snapshot {}: {}", key, e)))
    }

    /// Write the snapshot stored under `key`.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), AppError> {
        let path = self.path_for(key);
        let data = serde_json::to_vec_pretty(value)
            .map_err(|e| AppError::Storage(format!("Failed to serialize {}: {}", key, e)))?;
        fs::write(&path, data)
            .map_err(|e| AppError::Storage(format!("Failed to write {}: {}", path.display(), e)))
    }

    /// Remove the snapshot stored under `key`. Missing keys are fine.
    pub fn remove(&self, key: &str) -> Result<(), AppError> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::Storage(format!(
                "Failed to remove {}: {}",
                path.display(),
                e
            ))),
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}
