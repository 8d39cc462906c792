//! Feed service
//!
//! Turns submissions into feed items and presents the stored feed for display.

use std::sync::Arc;

use chrono::{DateTime, FixedOffset};

use crate::domain::entities::Item;
use crate::domain::ports::FeedStore;
use crate::error::StoreError;

use super::share_parser::to_new_item;

/// Service for reading and extending the feed
pub struct FeedService<S>
where
    S: FeedStore,
{
    store: Arc<S>,
}

impl<S> FeedService<S>
where
    S: FeedStore,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// The stored document, byte for byte
    pub async fn raw_feed(&self) -> Result<Vec<u8>, StoreError> {
        self.store.load_raw().await
    }

    /// Items most recent first
    pub async fn recent_first(&self) -> Result<Vec<Item>, StoreError> {
        let mut items = self.store.load().await?.items;
        items.reverse();
        Ok(items)
    }

    /// Record a shared link, stamped with `now`
    pub async fn submit(
        &self,
        data: &str,
        now: DateTime<FixedOffset>,
    ) -> Result<Item, StoreError> {
        let item = to_new_item(data, now);
        self.store.append(item.clone()).await?;
        tracing::info!(id = %item.id, "Saved item");
        Ok(item)
    }
}
