// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client-side state stores.

pub mod app;
pub mod auth;
pub mod theme;
pub mod views;

pub use app::AppStore;
pub use auth::AuthStore;
pub use theme::ThemeStore;
pub use views::Page;
