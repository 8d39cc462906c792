//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::{DateTime, Duration, FixedOffset};

use crate::domain::entities::Item;

/// A fixed timestamp, `minutes` after a reference point
pub fn published_at(minutes: i64) -> DateTime<FixedOffset> {
    let base = DateTime::parse_from_rfc3339("2024-02-29T23:58:07-05:00").unwrap();
    base + Duration::minutes(minutes)
}

/// Create a test item with default values
pub fn test_item() -> Item {
    Item::link(
        "https://example.com/article",
        Some("An Article".to_string()),
        published_at(0),
    )
}

/// Create a test item pointing at a specific URL
pub fn test_item_for(url: &str, title: &str, minutes: i64) -> Item {
    Item::link(url, Some(title.to_string()), published_at(minutes))
}
