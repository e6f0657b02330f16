// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Swap request models and the status lifecycle.

use crate::models::User;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Status of a swap request.
///
/// Transitions are one-directional: pending → accepted|rejected, and
/// accepted → completed. The server is authoritative; the client only
/// uses these helpers to decide which actions to offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwapStatus {
    Pending,
    Accepted,
    Rejected,
    Completed,
}

impl SwapStatus {
    /// Rejected and completed requests never change again.
    pub fn is_terminal(self) -> bool {
        matches!(self, SwapStatus::Rejected | SwapStatus::Completed)
    }

    /// Whether the lifecycle allows moving from `self` to `next`.
    pub fn can_transition_to(self, next: SwapStatus) -> bool {
        matches!(
            (self, next),
            (SwapStatus::Pending, SwapStatus::Accepted)
                | (SwapStatus::Pending, SwapStatus::Rejected)
                | (SwapStatus::Accepted, SwapStatus::Completed)
        )
    }
}

impl std::fmt::Display for SwapStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SwapStatus::Pending => "pending",
            SwapStatus::Accepted => "accepted",
            SwapStatus::Rejected => "rejected",
            SwapStatus::Completed => "completed",
        };
        f.write_str(s)
    }
}

/// A proposed skill exchange between two users.
///
/// `from_user`/`to_user` are denormalized snapshots taken at fetch time.
/// Editing a profile does not retroactively update snapshots embedded in
/// existing requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapRequest {
    pub id: String,
    pub from_user_id: String,
    pub to_user_id: String,
    pub from_user: User,
    pub to_user: User,
    /// Skill the sender offers (one of from_user.skills_offered)
    pub offered_skill: String,
    /// Skill the sender wants (one of to_user.skills_offered)
    pub wanted_skill: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub status: SwapStatus,
    /// Creation time, ISO 8601
    pub created_at: String,
    /// Last status change, ISO 8601
    pub updated_at: String,
}

impl SwapRequest {
    /// A request is visible to exactly its two participants.
    pub fn involves(&self, user_id: &str) -> bool {
        self.from_user_id == user_id || self.to_user_id == user_id
    }
}

/// Payload for creating a swap request. The sender's identity comes from
/// the bearer token; the server assigns id, status, and timestamps.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewSwapRequest {
    #[validate(length(min = 1, message = "recipient is required"))]
    pub to_user_id: String,
    #[validate(length(min = 1, message = "offered skill is required"))]
    pub offered_skill: String,
    #[validate(length(min = 1, message = "wanted skill is required"))]
    pub wanted_skill: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Status transition payload sent to the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapStatusUpdate {
    pub status: SwapStatus,
    pub updated_at: String,
}
