//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured for testing.

use async_trait::async_trait;
use std::sync::RwLock;

use crate::domain::entities::{Feed, Item, DEFAULT_FEED_TITLE};
use crate::domain::ports::FeedStore;
use crate::error::StoreError;

// ============================================================================
// In-Memory Feed Store
// ============================================================================

pub struct InMemoryFeedStore {
    feed: RwLock<Option<Feed>>,
    fail_writes: bool,
}

impl Default for InMemoryFeedStore {
    fn default() -> Self {
        Self {
            feed: RwLock::new(Some(Feed::new(DEFAULT_FEED_TITLE))),
            fail_writes: false,
        }
    }
}

impl InMemoryFeedStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store with no document yet
    pub fn empty() -> Self {
        Self {
            feed: RwLock::new(None),
            fail_writes: false,
        }
    }

    /// Pre-populate with an item for testing
    pub fn with_item(self, item: Item) -> Self {
        if let Some(feed) = self.feed.write().unwrap().as_mut() {
            feed.items.push(item);
        }
        self
    }

    /// Make every write fail with an I/O error
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Current document; panics if none was created
    pub fn snapshot(&self) -> Feed {
        self.feed.read().unwrap().clone().expect("no feed document")
    }

    fn write_error() -> StoreError {
        StoreError::Write(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "read-only store",
        ))
    }
}

#[async_trait]
impl FeedStore for InMemoryFeedStore {
    async fn initialize_if_absent(&self) -> Result<bool, StoreError> {
        let mut feed = self.feed.write().unwrap();
        if feed.is_some() {
            return Ok(false);
        }
        if self.fail_writes {
            return Err(Self::write_error());
        }
        *feed = Some(Feed::new(DEFAULT_FEED_TITLE));
        Ok(true)
    }

    async fn load_raw(&self) -> Result<Vec<u8>, StoreError> {
        let feed = self.feed.read().unwrap();
        match feed.as_ref() {
            Some(feed) => feed.to_json(),
            None => Err(StoreError::Read(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "no feed document",
            ))),
        }
    }

    async fn append(&self, item: Item) -> Result<(), StoreError> {
        let mut feed = self.load().await?;
        feed.items.push(item);
        feed.validate()?;
        if self.fail_writes {
            return Err(Self::write_error());
        }
        *self.feed.write().unwrap() = Some(feed);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn initialize_only_creates_missing_documents() {
        let store = InMemoryFeedStore::empty();
        assert!(store.load_raw().await.is_err());
        assert!(store.initialize_if_absent().await.unwrap());
        assert!(!store.initialize_if_absent().await.unwrap());
        assert_eq!(store.snapshot().title, DEFAULT_FEED_TITLE);
    }
}
