// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Derived views over the cached entity lists.
//!
//! Filtering and pagination are pure functions computed by consumers;
//! nothing here is stored back into the state.

use crate::models::{SwapRequest, SwapStatus, User};

/// One page of a filtered, order-preserving sequence. Pages are 1-based.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl<T> Page<T> {
    /// 1-based inclusive range of this page within the filtered sequence,
    /// for "Showing X-Y of Z" displays. None when the page is empty.
    pub fn display_range(&self) -> Option<(usize, usize)> {
        if self.items.is_empty() {
            return None;
        }
        let first = (self.page - 1) * self.page_size + 1;
        Some((first, first + self.items.len() - 1))
    }
}

/// Slice an order-preserving sequence into a fixed-size page.
/// Out-of-range pages (including page 0) yield an empty item list.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let total_items = items.len();
    let total_pages = total_items.div_ceil(page_size);

    let page_items = if page == 0 {
        Vec::new()
    } else {
        let start = (page - 1).saturating_mul(page_size);
        items
            .iter()
            .skip(start)
            .take(page_size)
            .cloned()
            .collect()
    };

    Page {
        items: page_items,
        page,
        page_size,
        total_pages,
        total_items,
    }
}

/// The browsing view: public profiles matching the search query (against
/// name and both skill lists, case-insensitively) and the availability
/// filter (exact match, empty filter matches all).
pub fn visible_users<'a>(
    users: &'a [User],
    search_query: &str,
    availability_filter: &str,
) -> Vec<&'a User> {
    let query = search_query.to_lowercase();

    users
        .iter()
        .filter(|user| user.is_public)
        .filter(|user| {
            user.name.to_lowercase().contains(&query)
                || skills_match(&user.skills_offered, &query)
                || skills_match(&user.skills_wanted, &query)
        })
        .filter(|user| availability_filter.is_empty() || user.availability == availability_filter)
        .collect()
}

fn skills_match(skills: &[String], query: &str) -> bool {
    skills
        .iter()
        .any(|skill| skill.to_lowercase().contains(query))
}

/// The swap-request view for a given viewer: requests the viewer sent or
/// received, optionally narrowed to one status.
pub fn visible_swaps<'a>(
    swaps: &'a [SwapRequest],
    viewer_id: &str,
    status_filter: Option<SwapStatus>,
) -> Vec<&'a SwapRequest> {
    swaps
        .iter()
        .filter(|swap| swap.involves(viewer_id))
        .filter(|swap| status_filter.is_none_or(|status| swap.status == status))
        .collect()
}
