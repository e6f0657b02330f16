// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

/// Number of profiles/requests shown per page when no override is configured.
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Client configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the backend REST API (no trailing slash)
    pub api_base_url: String,
    /// Directory holding persisted client-local state (session, theme)
    pub state_dir: PathBuf,
    /// Page size for browsing views
    pub page_size: usize,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            api_base_url: env::var("SKILLSWAP_API_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .map_err(|_| ConfigError::Missing("SKILLSWAP_API_URL"))?,
            state_dir: env::var("SKILLSWAP_STATE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".skillswap")),
            page_size: env::var("SKILLSWAP_PAGE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|&n| n > 0)
                .unwrap_or(DEFAULT_PAGE_SIZE),
        })
    }

    /// Default config for testing only.
    pub fn test_default() -> Self {
        Self {
            api_base_url: "http://localhost:8080".to_string(),
            state_dir: std::env::temp_dir().join("skillswap-test"),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}
