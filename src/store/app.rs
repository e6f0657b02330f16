// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client state store for users and swap requests.
//!
//! Holds the last-known server state and applies server-confirmed
//! mutations only; nothing is written optimistically. Operations take
//! `&mut self` across their single await point, so two fetches of the
//! same store can never be in flight at once and a stale response can
//! never clobber a newer one.

use crate::error::{AppError, Result};
use crate::gateway::ApiClient;
use crate::models::{NewSwapRequest, SwapRequest, SwapStatus, SwapStatusUpdate, User};
use crate::store::views::{self, Page};
use crate::time_utils;
use validator::Validate;

/// In-memory store of browsable profiles and the viewer's swap requests.
pub struct AppStore {
    gateway: ApiClient,
    page_size: usize,
    users: Vec<User>,
    swap_requests: Vec<SwapRequest>,
    loading: bool,
    search_query: String,
    availability_filter: String,
}

impl AppStore {
    pub fn new(gateway: ApiClient, page_size: usize) -> Self {
        Self {
            gateway,
            page_size,
            users: Vec::new(),
            swap_requests: Vec::new(),
            loading: false,
            search_query: String::new(),
            availability_filter: String::new(),
        }
    }

    // ─── State accessors ─────────────────────────────────────────────

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn swap_requests(&self) -> &[SwapRequest] {
        &self.swap_requests
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn availability_filter(&self) -> &str {
        &self.availability_filter
    }

    /// Set the search query. Any string is accepted; empty means no filter.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Set the availability filter. Empty means no filter.
    pub fn set_availability_filter(&mut self, filter: impl Into<String>) {
        self.availability_filter = filter.into();
    }

    // ─── Fetches ─────────────────────────────────────────────────────

    /// Refresh the cached user list from the backend.
    ///
    /// On failure the stale list stays visible and the error propagates
    /// to the caller; the loading flag is cleared either way.
    pub async fn fetch_users(&mut self) -> Result<()> {
        self.loading = true;
        let result = self.gateway.list_users().await;
        self.loading = false;

        let users = result?;
        tracing::debug!(count = users.len(), "Fetched user list");
        self.users = users;
        Ok(())
    }

    /// Refresh the cached swap-request list for the bearer's identity.
    pub async fn fetch_swap_requests(&mut self, token: &str) -> Result<()> {
        self.loading = true;
        let result = self.gateway.list_my_swaps(token).await;
        self.loading = false;

        let swaps = result?;
        tracing::debug!(count = swaps.len(), "Fetched swap requests");
        self.swap_requests = swaps;
        Ok(())
    }

    // ─── Mutations ───────────────────────────────────────────────────

    /// Create a swap request and append the server-confirmed record.
    ///
    /// Empty required fields are rejected locally before any network
    /// call; on any failure the cached list is left unchanged.
    pub async fn add_swap_request(&mut self, request: NewSwapRequest, token: &str) -> Result<()> {
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let created = self.gateway.create_swap(&request, token).await?;
        tracing::info!(
            id = %created.id,
            to_user = %created.to_user_id,
            "Swap request created"
        );
        self.swap_requests.push(created);
        Ok(())
    }

    /// Transition a swap request's status and replace the local record
    /// with the server-echoed one.
    ///
    /// If no cached record matches the id, the local list is left
    /// unchanged; the server remains authoritative either way.
    pub async fn update_swap_request(
        &mut self,
        id: &str,
        status: SwapStatus,
        token: &str,
    ) -> Result<()> {
        let update = SwapStatusUpdate {
            status,
            updated_at: time_utils::now_rfc3339(),
        };

        let updated = self.gateway.update_swap_status(id, &update, token).await?;
        tracing::info!(id = %id, status = %status, "Swap request updated");

        if let Some(existing) = self.swap_requests.iter_mut().find(|r| r.id == id) {
            *existing = updated;
        }
        Ok(())
    }

    // ─── Derived views ───────────────────────────────────────────────

    /// Public profiles matching the current search query and availability
    /// filter, in cached order.
    pub fn visible_users(&self) -> Vec<&User> {
        views::visible_users(&self.users, &self.search_query, &self.availability_filter)
    }

    /// One page of the filtered profile list.
    pub fn user_page(&self, page: usize) -> Page<&User> {
        views::paginate(&self.visible_users(), page, self.page_size)
    }

    /// Swap requests visible to `viewer_id`, optionally narrowed to one
    /// status, in cached order.
    pub fn visible_swaps(
        &self,
        viewer_id: &str,
        status_filter: Option<SwapStatus>,
    ) -> Vec<&SwapRequest> {
        views::visible_swaps(&self.swap_requests, viewer_id, status_filter)
    }

    /// One page of the filtered swap-request list for `viewer_id`.
    pub fn swap_page(
        &self,
        viewer_id: &str,
        status_filter: Option<SwapStatus>,
        page: usize,
    ) -> Page<&SwapRequest> {
        views::paginate(
            &self.visible_swaps(viewer_id, status_filter),
            page,
            self.page_size,
        )
    }
}
