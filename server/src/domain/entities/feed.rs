//! Feed domain entity
//!
//! A JSON Feed document and its items. The whole document is the unit of
//! persistence; items have no identity outside it.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};

use crate::error::{StoreError, ValidationError};

/// Version marker written into new documents
pub const JSON_FEED_VERSION: &str = "https://jsonfeed.org/version/1.1";

/// Version markers accepted when reading a stored document
const SUPPORTED_VERSIONS: [&str; 2] = ["https://jsonfeed.org/version/1", JSON_FEED_VERSION];

/// Title given to a freshly created feed document
pub const DEFAULT_FEED_TITLE: &str = "Pseudofeed Pages";

/// A JSON Feed document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feed {
    pub version: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_page_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feed_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expired: Option<bool>,
    #[serde(default)]
    pub items: Vec<Item>,
    /// Fields we don't model (authors, hubs, next_url, ...), kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One saved link
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Set to the item's URL; not unique
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_html: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_published: Option<DateTime<FixedOffset>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<DateTime<FixedOffset>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Fields we don't model (authors, attachments, language, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Feed {
    /// An empty feed with the current version marker
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            version: JSON_FEED_VERSION.to_string(),
            title: title.into(),
            home_page_url: None,
            feed_url: None,
            description: None,
            user_comment: None,
            icon: None,
            favicon: None,
            language: None,
            expired: None,
            items: Vec::new(),
            extra: Map::new(),
        }
    }

    /// Check the document against the JSON Feed schema
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !SUPPORTED_VERSIONS.contains(&self.version.as_str()) {
            return Err(ValidationError::UnsupportedVersion(self.version.clone()));
        }
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingTitle);
        }
        for (index, item) in self.items.iter().enumerate() {
            if item.id.is_empty() {
                return Err(ValidationError::MissingItemId { index });
            }
            if item.url.as_deref() == Some("") {
                return Err(ValidationError::EmptyItemUrl { index });
            }
        }
        Ok(())
    }

    /// Decode and validate a stored document
    pub fn from_json(raw: &[u8]) -> Result<Self, StoreError> {
        let feed: Feed = serde_json::from_slice(raw).map_err(StoreError::Parse)?;
        feed.validate()?;
        Ok(feed)
    }

    /// Encode the document, tab-indented
    pub fn to_json(&self) -> Result<Vec<u8>, StoreError> {
        let mut buf = Vec::new();
        let mut ser =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"\t"));
        self.serialize(&mut ser).map_err(StoreError::Encode)?;
        Ok(buf)
    }
}

impl Item {
    /// A link item; `url` doubles as id and external URL
    pub fn link(
        url: impl Into<String>,
        title: Option<String>,
        published: DateTime<FixedOffset>,
    ) -> Self {
        let url = url.into();
        Self {
            id: url.clone(),
            url: Some(url.clone()),
            external_url: Some(url),
            title,
            content_html: None,
            content_text: None,
            summary: None,
            image: None,
            banner_image: None,
            date_published: Some(published),
            date_modified: None,
            tags: Vec::new(),
            extra: Map::new(),
        }
    }

    /// Where the item points, falling back to its id
    pub fn href(&self) -> &str {
        self.url
            .as_deref()
            .or(self.external_url.as_deref())
            .unwrap_or(&self.id)
    }
}
