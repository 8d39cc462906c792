//! Feed store port
//!
//! The single persisted aggregate is the feed document. Every mutation reads
//! the whole document and writes it back in full.

use async_trait::async_trait;

use crate::domain::entities::{Feed, Item};
use crate::error::StoreError;

/// Storage for the feed document
#[async_trait]
pub trait FeedStore: Send + Sync {
    /// Create an empty, valid document if none exists yet.
    /// Returns `true` when a document was created.
    async fn initialize_if_absent(&self) -> Result<bool, StoreError>;

    /// The document exactly as stored
    async fn load_raw(&self) -> Result<Vec<u8>, StoreError>;

    /// Append an item to the end of the document and persist it
    async fn append(&self, item: Item) -> Result<(), StoreError>;

    /// Read and decode the full document
    async fn load(&self) -> Result<Feed, StoreError> {
        let raw = self.load_raw().await?;
        Feed::from_json(&raw)
    }
}
