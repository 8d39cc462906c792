//! Flat-file adapter
//!
//! Keeps the feed document in a single JSON file on local disk.

pub mod feed_store;

pub use feed_store::FileFeedStore;
