//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod file;

pub use file::FileFeedStore;
