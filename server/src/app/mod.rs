//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities and ports.

pub mod feed_service;
pub mod share_parser;

pub use feed_service::FeedService;
