//! Pseudofeed
//!
//! A personal pseudo-RSS feed: links shared from a phone or a bookmarklet are
//! appended to a JSON Feed document on disk, which is served back as raw JSON
//! and as an HTML page.

use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod feed;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::FileFeedStore;
use app::FeedService;
use config::Config;
use domain::ports::FeedStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub feed_service: Arc<FeedService<FileFeedStore>>,
}

impl AppState {
    pub fn new(store: Arc<FileFeedStore>) -> Self {
        Self {
            feed_service: Arc::new(FeedService::new(store)),
        }
    }
}

/// Build the router for all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::get_page).post(handlers::post_item))
        .route("/feed.json", get(handlers::get_feed_json))
        .route("/bookmarklet", get(handlers::get_bookmarklet))
        // The bookmarklet posts from whatever page the user is on
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,pseudofeed=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Invalid configuration")?;

    let store = Arc::new(FileFeedStore::new(config.feed_path.clone()));
    store
        .initialize_if_absent()
        .await
        .with_context(|| format!("Failed to create feed file {}", store.path().display()))?;
    tracing::info!("Using feed file: {}", store.path().display());

    let app = build_router(AppState::new(store));

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
