// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the application.

pub mod swap;
pub mod user;

pub use swap::{NewSwapRequest, SwapRequest, SwapStatus, SwapStatusUpdate};
pub use user::{User, UserPatch};
