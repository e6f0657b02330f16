// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types shared by the gateway and the stores.

/// Application error type.
///
/// The gateway maps HTTP outcomes into this taxonomy; stores re-propagate
/// without translation, so callers see the same variants everywhere.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Request could not be completed, or the server answered with a
    /// non-success status outside the auth/validation buckets.
    #[error("Network error: {0}")]
    Network(String),

    /// Invalid credentials, or an authenticated call rejected for
    /// identity reasons (401/403).
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Malformed or logically invalid input, rejected locally or by the
    /// server (400/422).
    #[error("Invalid request: {0}")]
    Validation(String),

    /// Client-local storage failure (persisted session/theme).
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// True when the error means the bearer token or credentials were
    /// rejected. The composition root uses this to decide whether to
    /// end the session; stores never log out on their own.
    pub fn is_auth(&self) -> bool {
        matches!(self, AppError::Auth(_))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::Validation(_))
    }
}

/// Result type alias for gateway and store operations.
pub type Result<T> = std::result::Result<T, AppError>;
