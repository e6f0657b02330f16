// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Auth/session store.
//!
//! Owns the authentication lifecycle and the session owner's mutable
//! profile copy. The session survives restarts via a persisted snapshot.
//!
//! An expired token surfaces as `AppError::Auth` on the next gateway
//! call; the store never transitions back to anonymous on its own, the
//! composition root decides whether to call `logout`.

use crate::error::Result;
use crate::gateway::ApiClient;
use crate::models::{User, UserPatch};
use crate::storage::Storage;
use serde::{Deserialize, Serialize};

/// Storage key for the persisted session snapshot.
const AUTH_STORAGE_KEY: &str = "auth-storage";

/// Persisted session snapshot, matching the wire session shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionSnapshot {
    user: Option<User>,
    token: Option<String>,
    is_authenticated: bool,
}

/// Store for the authenticated actor.
pub struct AuthStore {
    gateway: ApiClient,
    storage: Storage,
    user: Option<User>,
    token: Option<String>,
}

impl AuthStore {
    /// Build the store, restoring a persisted session if one exists.
    /// A corrupt snapshot is discarded with a warning rather than
    /// blocking startup.
    pub fn new(gateway: ApiClient, storage: Storage) -> Self {
        let (user, token) = match storage.load::<SessionSnapshot>(AUTH_STORAGE_KEY) {
            Ok(Some(snapshot)) => (snapshot.user, snapshot.token),
            Ok(None) => (None, None),
            Err(e) => {
                tracing::warn!(error = %e, "Discarding unreadable session snapshot");
                (None, None)
            }
        };

        if user.is_some() && token.is_some() {
            tracing::debug!("Restored persisted session");
        }

        Self {
            gateway,
            storage,
            user,
            token,
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// True iff both the user and the token are present.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }

    /// Exchange credentials for a session. On failure (invalid
    /// credentials surface as `AppError::Auth`) the current state is
    /// left untouched.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<()> {
        let session = self.gateway.login(email, password).await?;
        tracing::info!(user_id = %session.user.id, "Logged in");

        self.user = Some(session.user);
        self.token = Some(session.token);
        self.persist();
        Ok(())
    }

    /// Clear the session unconditionally. Cannot fail; a storage error
    /// while removing the snapshot is logged and swallowed.
    pub fn logout(&mut self) {
        self.user = None;
        self.token = None;
        if let Err(e) = self.storage.remove(AUTH_STORAGE_KEY) {
            tracing::warn!(error = %e, "Failed to remove session snapshot");
        }
        tracing::info!("Logged out");
    }

    /// Merge profile fields into the session owner's copy. No-op when
    /// anonymous. Local-only: denormalized snapshots inside existing
    /// swap requests are not updated, and no remote call is made.
    pub fn update_profile(&mut self, patch: UserPatch) {
        let Some(user) = self.user.as_mut() else {
            return;
        };
        user.apply(patch);
        self.persist();
    }

    /// Persist the current session snapshot. Failures are logged, not
    /// surfaced: a session that outlives the process is best-effort.
    fn persist(&self) {
        let snapshot = SessionSnapshot {
            user: self.user.clone(),
            token: self.token.clone(),
            is_authenticated: self.is_authenticated(),
        };
        if let Err(e) = self.storage.save(AUTH_STORAGE_KEY, &snapshot) {
            tracing::warn!(error = %e, "Failed to persist session snapshot");
        }
    }
}
