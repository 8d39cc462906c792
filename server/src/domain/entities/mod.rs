//! Domain entities
//!
//! Pure domain models representing the persisted feed document.

pub mod feed;

pub use feed::{Feed, Item, DEFAULT_FEED_TITLE};
