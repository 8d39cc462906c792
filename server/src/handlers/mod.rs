//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod bookmarklet;
pub mod feed;

pub use bookmarklet::get_bookmarklet;
pub use feed::{get_feed_json, get_page, post_item};
