// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! REST gateway to the SkillSwap backend.
//!
//! Handles:
//! - Public profile listing
//! - Swap request listing/creation/status updates (bearer auth)
//! - Credential exchange for login
//!
//! Every call is one-shot and awaited by the caller. No retries, no
//! caching, no cancellation.

use crate::error::AppError;
use crate::models::{NewSwapRequest, SwapRequest, SwapStatusUpdate, User};
use serde::{Deserialize, Serialize};

/// SkillSwap API client.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new client for the given API base URL (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// List public user profiles. No ordering is guaranteed by the server.
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        let url = format!("{}/users", self.base_url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        self.check_response_json(response).await
    }

    /// List swap requests involving the bearer's identity.
    pub async fn list_my_swaps(&self, token: &str) -> Result<Vec<SwapRequest>, AppError> {
        let url = format!("{}/swaps/my-swaps", self.base_url);

        let response = self
            .http
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        self.check_response_json(response).await
    }

    /// Create a swap request. The server assigns id, pending status, and
    /// timestamps, and echoes the full record back.
    pub async fn create_swap(
        &self,
        request: &NewSwapRequest,
        token: &str,
    ) -> Result<SwapRequest, AppError> {
        let url = format!("{}/swaps", self.base_url);

        let response = self
            .http
            .post(&url)
            .bearer_auth(token)
            .json(request)
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        self.check_response_json(response).await
    }

    /// Transition a swap request's status. The server decides whether the
    /// transition and the caller's identity are permitted.
    pub async fn update_swap_status(
        &self,
        id: &str,
        update: &SwapStatusUpdate,
        token: &str,
    ) -> Result<SwapRequest, AppError> {
        let url = format!("{}/swaps/{}/status", self.base_url, id);

        let response = self
            .http
            .put(&url)
            .bearer_auth(token)
            .json(update)
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        self.check_response_json(response).await
    }

    /// Exchange credentials for a session.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession, AppError> {
        let url = format!("{}/auth/login", self.base_url);

        let response = self
            .http
            .post(&url)
            .json(&LoginRequest { email, password })
            .send()
            .await
            .map_err(|e| AppError::Network(format!("Login request failed: {}", e)))?;

        self.check_response_json(response).await
    }

    /// Check response status, mapping failures into the error taxonomy,
    /// and parse the JSON body.
    async fn check_response_json<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, AppError> {
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();

            // Identity rejected - credentials or token problem
            if status.as_u16() == 401 || status.as_u16() == 403 {
                tracing::warn!(status = %status, "Request rejected for identity reasons");
                return Err(AppError::Auth(if body.is_empty() {
                    "invalid credentials".to_string()
                } else {
                    body
                }));
            }

            // Server-side validation rejection
            if status.as_u16() == 400 || status.as_u16() == 422 {
                return Err(AppError::Validation(body));
            }

            return Err(AppError::Network(format!("HTTP {}: {}", status, body)));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::Network(format!("JSON parse error: {}", e)))
    }
}

/// Login request body.
#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Session pair returned by a successful credential exchange.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSession {
    pub user: User,
    pub token: String,
}
