//! File adapter for FeedStore

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::entities::{Feed, Item, DEFAULT_FEED_TITLE};
use crate::domain::ports::FeedStore;
use crate::error::StoreError;

/// Feed document stored as one JSON file, rewritten in full on every append
pub struct FileFeedStore {
    path: PathBuf,
    /// Serializes appends within this process; other processes can still race
    append_lock: Mutex<()>,
}

impl FileFeedStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            append_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn write(&self, feed: &Feed) -> Result<(), StoreError> {
        let bytes = feed.to_json()?;
        tokio::fs::write(&self.path, bytes)
            .await
            .map_err(StoreError::Write)
    }
}

#[async_trait]
impl FeedStore for FileFeedStore {
    async fn initialize_if_absent(&self) -> Result<bool, StoreError> {
        if tokio::fs::try_exists(&self.path)
            .await
            .map_err(StoreError::Read)?
        {
            return Ok(false);
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(StoreError::Write)?;
        }

        tracing::info!("Creating new feed file: {}", self.path.display());
        self.write(&Feed::new(DEFAULT_FEED_TITLE)).await?;
        Ok(true)
    }

    async fn load_raw(&self) -> Result<Vec<u8>, StoreError> {
        tokio::fs::read(&self.path).await.map_err(StoreError::Read)
    }

    async fn append(&self, item: Item) -> Result<(), StoreError> {
        let _guard = self.append_lock.lock().await;

        let mut feed = self.load().await?;
        feed.items.push(item);
        feed.validate()?;

        self.write(&feed).await?;
        tracing::debug!(items = feed.items.len(), "Feed file rewritten");
        Ok(())
    }
}
