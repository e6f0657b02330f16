// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! SkillSwap demo client
//!
//! Connects to the configured backend, fetches the public profile list,
//! and prints the first page of the browsing view.

use skillswap::{config::ClientConfig, Client};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let config = ClientConfig::from_env().expect("Failed to load configuration");
    tracing::info!(api = %config.api_base_url, "Starting SkillSwap client");

    let mut client = Client::new(config)?;

    if client.auth.is_authenticated() {
        tracing::info!("Restored session from previous run");
    }

    client.app.fetch_users().await?;

    let page = client.app.user_page(1);
    tracing::info!(
        total = page.total_items,
        pages = page.total_pages,
        "Fetched public profiles"
    );

    for user in &page.items {
        println!(
            "{} [{}] offers: {}",
            user.name,
            user.availability,
            user.skills_offered.join(", ")
        );
    }

    Ok(())
}

/// Initialize logging with env-filter overrides.
fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("skillswap=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}
