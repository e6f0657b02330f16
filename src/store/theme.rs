// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Persisted theme preference, kept independent of the session.

use crate::storage::Storage;
use serde::{Deserialize, Serialize};

const THEME_STORAGE_KEY: &str = "theme-storage";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThemeSnapshot {
    is_dark_mode: bool,
}

/// Store for the dark/light preference. Defaults to light.
pub struct ThemeStore {
    storage: Storage,
    is_dark_mode: bool,
}

impl ThemeStore {
    pub fn new(storage: Storage) -> Self {
        let is_dark_mode = storage
            .load::<ThemeSnapshot>(THEME_STORAGE_KEY)
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Discarding unreadable theme snapshot");
                None
            })
            .map(|snapshot| snapshot.is_dark_mode)
            .unwrap_or(false);

        Self {
            storage,
            is_dark_mode,
        }
    }

    pub fn is_dark_mode(&self) -> bool {
        self.is_dark_mode
    }

    /// Flip the preference and return the new value.
    pub fn toggle(&mut self) -> bool {
        self.set(!self.is_dark_mode);
        self.is_dark_mode
    }

    pub fn set(&mut self, is_dark: bool) {
        self.is_dark_mode = is_dark;
        let snapshot = ThemeSnapshot {
            is_dark_mode: self.is_dark_mode,
        };
        if let Err(e) = self.storage.save(THEME_STORAGE_KEY, &snapshot) {
            tracing::warn!(error = %e, "Failed to persist theme snapshot");
        }
    }
}
