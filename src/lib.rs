// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! SkillSwap client data layer.
//!
//! Typed entities, a REST gateway, and the client state stores behind a
//! skill-exchange marketplace front-end: browse public profiles, filter
//! and paginate them, propose swap requests, accept or reject them.

pub mod config;
pub mod error;
pub mod gateway;
pub mod models;
pub mod storage;
pub mod store;
pub mod time_utils;

use config::ClientConfig;
use error::Result;
use gateway::ApiClient;
use storage::Storage;
use store::{AppStore, AuthStore, ThemeStore};

/// Composition root: one gateway and one storage handle, passed
/// explicitly into each store. No ambient singletons.
pub struct Client {
    pub config: ClientConfig,
    pub app: AppStore,
    pub auth: AuthStore,
    pub theme: ThemeStore,
}

impl Client {
    /// Build the client, restoring persisted session and theme state.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let storage = Storage::new(&config.state_dir)?;
        let gateway = ApiClient::new(config.api_base_url.clone());

        let app = AppStore::new(gateway.clone(), config.page_size);
        let auth = AuthStore::new(gateway, storage.clone());
        let theme = ThemeStore::new(storage);

        Ok(Self {
            config,
            app,
            auth,
            theme,
        })
    }
}
