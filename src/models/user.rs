// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User profile model.

use serde::{Deserialize, Serialize};

/// Public user profile as served by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Opaque stable identifier
    pub id: String,
    /// Display name (non-empty for a complete profile)
    pub name: String,
    /// Email address
    pub email: String,
    /// Free-text location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Photo URL or embedded image data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_photo: Option<String>,
    /// Skills this user can teach, in display order
    pub skills_offered: Vec<String>,
    /// Skills this user wants to learn, in display order
    pub skills_wanted: Vec<String>,
    /// Coarse scheduling label (mornings/evenings/weekends/flexible),
    /// empty for incomplete profiles
    pub availability: String,
    /// Whether the profile appears in public browsing
    pub is_public: bool,
    /// Average review rating, 0.0 when no reviews
    pub average_rating: f64,
    /// Number of reviews received
    pub review_count: u32,
}

impl User {
    /// A profile is complete when name, both skill lists, and availability
    /// are all non-empty.
    pub fn is_profile_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.skills_offered.is_empty()
            && !self.skills_wanted.is_empty()
            && !self.availability.trim().is_empty()
    }

    /// A user is "new" when both skill lists are still empty, regardless
    /// of the other fields.
    pub fn is_new(&self) -> bool {
        self.skills_offered.is_empty() && self.skills_wanted.is_empty()
    }

    /// Merge a partial update into this profile. Only fields present in
    /// the patch change.
    pub fn apply(&mut self, patch: UserPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(location) = patch.location {
            self.location = Some(location);
        }
        if let Some(profile_photo) = patch.profile_photo {
            self.profile_photo = Some(profile_photo);
        }
        if let Some(skills_offered) = patch.skills_offered {
            self.skills_offered = skills_offered;
        }
        if let Some(skills_wanted) = patch.skills_wanted {
            self.skills_wanted = skills_wanted;
        }
        if let Some(availability) = patch.availability {
            self.availability = availability;
        }
        if let Some(is_public) = patch.is_public {
            self.is_public = is_public;
        }
    }
}

/// Partial profile update applied to the session owner's copy.
///
/// Ratings are server-computed and never patched from the client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub location: Option<String>,
    pub profile_photo: Option<String>,
    pub skills_offered: Option<Vec<String>>,
    pub skills_wanted: Option<Vec<String>>,
    pub availability: Option<String>,
    pub is_public: Option<bool>,
}
