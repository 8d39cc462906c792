//! Share payload parser
//!
//! Mobile share actions (e.g. Chrome on Android through HTTP Shortcuts) send
//! a page as `"<title> <url>"` rather than a bare URL:
//!
//! ```text
//! Enver Hoxha - Wikipedia https://en.m.wikipedia.org/wiki/Enver_Hoxha
//! ```
//!
//! The token after the *last* space is taken as the URL. Titles that embed
//! further URLs are not handled specially.

use chrono::{DateTime, FixedOffset};
use url::Url;

use crate::domain::entities::Item;
use crate::error::ShareError;

/// A title and URL recovered from a share payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SharedLink<'a> {
    pub title: &'a str,
    pub url: &'a str,
}

/// Split a share payload into title and URL at its last space
pub fn parse_shared(data: &str) -> Result<SharedLink<'_>, ShareError> {
    let data = data.trim();
    let (title, url) = data.rsplit_once(' ').ok_or(ShareError::NoSeparator)?;

    let parsed = Url::parse(url)?;
    // `http:example.com` gets a host from the url crate but has no authority
    let has_authority = url
        .get(parsed.scheme().len()..)
        .map_or(false, |rest| rest.starts_with("://"));
    if !has_authority || parsed.host_str().map_or(true, str::is_empty) {
        return Err(ShareError::MissingHost);
    }

    Ok(SharedLink { title, url })
}

/// Build the item for a submission.
///
/// When the payload does not look like `"<title> <url>"` the whole text is
/// used as both title and URL; a broken link beats a dropped submission.
pub fn to_new_item(data: &str, now: DateTime<FixedOffset>) -> Item {
    match parse_shared(data) {
        Ok(link) => Item::link(link.url, Some(link.title.to_string()), now),
        Err(e) => {
            tracing::info!("Treating share payload as a bare link: {}", e);
            Item::link(data, Some(data.to_string()), now)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_standard_wikipedia() {
        let link = parse_shared(
            "The Life and Opinions of Tristram Shandy, Gentleman - Wikipedia https://en.m.wikipedia.org/wiki/The_Life_and_Opinions_of_Tristram_Shandy,_Gentleman",
        )
        .unwrap();
        assert_eq!(
            link.title,
            "The Life and Opinions of Tristram Shandy, Gentleman - Wikipedia"
        );
        assert_eq!(
            link.url,
            "https://en.m.wikipedia.org/wiki/The_Life_and_Opinions_of_Tristram_Shandy,_Gentleman"
        );
    }

    #[test]
    fn test_parse_long_title() {
        let link = parse_shared(
            "On Seeing A Piece Of Our Artillery Brought Into Action by Wilfred Owen - Famous poems, famous poets. - All Poetry https://allpoetry.com/on-seeing-a-piece-of-our-artillery-brought-into-action",
        )
        .unwrap();
        assert_eq!(
            link.title,
            "On Seeing A Piece Of Our Artillery Brought Into Action by Wilfred Owen - Famous poems, famous poets. - All Poetry"
        );
        assert_eq!(
            link.url,
            "https://allpoetry.com/on-seeing-a-piece-of-our-artillery-brought-into-action"
        );
    }

    #[test]
    fn test_parse_splits_at_last_space() {
        let link = parse_shared("see https://a.example/x https://b.example/y").unwrap();
        assert_eq!(link.title, "see https://a.example/x");
        assert_eq!(link.url, "https://b.example/y");
    }

    #[test]
    fn test_parse_trims_surrounding_whitespace() {
        let link = parse_shared("  Title https://example.com/  \n").unwrap();
        assert_eq!(link.title, "Title");
        assert_eq!(link.url, "https://example.com/");
    }

    #[test]
    fn test_parse_errors() {
        // Last token is not a URL
        assert!(matches!(
            parse_shared("abc def"),
            Err(ShareError::InvalidUrl(_))
        ));
        // No separator at all
        assert_eq!(
            parse_shared(
                "https://en.m.wikipedia.org/wiki/The_Life_and_Opinions_of_Tristram_Shandy,_Gentleman"
            ),
            Err(ShareError::NoSeparator)
        );
        assert_eq!(
            parse_shared(
                "en.m.wikipedia.org/wiki/The_Life_and_Opinions_of_Tristram_Shandy,_Gentleman"
            ),
            Err(ShareError::NoSeparator)
        );
        // Absolute, but no host
        assert_eq!(
            parse_shared("write me mailto:someone@example.com"),
            Err(ShareError::MissingHost)
        );
        // Special scheme without `//`
        assert_eq!(
            parse_shared("T http:example.com"),
            Err(ShareError::MissingHost)
        );
    }

    #[test]
    fn test_to_new_item_splits_share_payload() {
        let now = DateTime::parse_from_rfc3339("2024-01-15T09:00:00+01:00").unwrap();
        let item = to_new_item(
            "Enver Hoxha - Wikipedia https://en.m.wikipedia.org/wiki/Enver_Hoxha",
            now,
        );
        assert_eq!(item.title.as_deref(), Some("Enver Hoxha - Wikipedia"));
        assert_eq!(
            item.url.as_deref(),
            Some("https://en.m.wikipedia.org/wiki/Enver_Hoxha")
        );
        assert_eq!(item.id, "https://en.m.wikipedia.org/wiki/Enver_Hoxha");
        assert_eq!(item.date_published, Some(now));
    }

    #[test]
    fn test_to_new_item_falls_back_to_raw_text() {
        let now = DateTime::parse_from_rfc3339("2024-01-15T09:00:00+01:00").unwrap();
        let item = to_new_item("https://example.com/only", now);
        assert_eq!(item.title.as_deref(), Some("https://example.com/only"));
        assert_eq!(item.url.as_deref(), Some("https://example.com/only"));
        assert_eq!(item.id, "https://example.com/only");
    }
}
