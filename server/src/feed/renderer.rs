//! Feed renderer
//!
//! Renders the feed as an HTML page and produces the bookmarklet script.
//! Templates live in `templates/` and are compiled into the binary.

use askama::Template;
use chrono::{DateTime, FixedOffset};

use crate::domain::entities::Item;

/// Display pattern for publication dates
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One row of the HTML page
#[derive(Debug, Clone, PartialEq)]
pub struct PageEntry {
    pub title: String,
    pub url: String,
    pub published: String,
}

impl From<&Item> for PageEntry {
    fn from(item: &Item) -> Self {
        let url = item.href().to_string();
        Self {
            title: item.title.clone().unwrap_or_else(|| url.clone()),
            url,
            published: display_date(item.date_published.as_ref()),
        }
    }
}

#[derive(Template)]
#[template(path = "page.html")]
struct PageTemplate {
    entries: Vec<PageEntry>,
}

#[derive(Template)]
#[template(path = "bookmarklet.js", escape = "none")]
struct BookmarkletTemplate<'a> {
    base_url: &'a str,
}

/// Render items, already in display order, as an HTML page
pub fn render_page(items: &[Item]) -> Result<String, askama::Error> {
    let entries = items.iter().map(PageEntry::from).collect();
    PageTemplate { entries }.render()
}

/// Render the bookmarklet that submits the current page to `base_url`
pub fn render_bookmarklet(base_url: &str) -> Result<String, askama::Error> {
    BookmarkletTemplate { base_url }.render()
}

/// Format a publication date for humans, in the offset it was recorded with
fn display_date(date: Option<&DateTime<FixedOffset>>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string()).unwrap_or_default()
}
