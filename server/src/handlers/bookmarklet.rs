//! Bookmarklet handler
//!
//! Serves a script that submits the current browser page to this service.

use axum::{
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::feed::render_bookmarklet;

/// Base URL the bookmarklet should post to, derived from the request
fn base_url(headers: &HeaderMap) -> Result<String, AppError> {
    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .filter(|h| is_valid_host(h))
        .ok_or_else(|| AppError::bad_request("Invalid host"))?;

    let scheme = match headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
    {
        Some(proto) if proto.eq_ignore_ascii_case("https") => "https",
        _ => "http",
    };

    Ok(format!("{}://{}", scheme, host))
}

/// Hostnames, IPv4/IPv6 literals (with zone ids) and an optional port; nothing that could
/// break out of a JavaScript string
fn is_valid_host(host: &str) -> bool {
    !host.is_empty()
        && host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_' | ':' | '[' | ']' | '%'))
}

/// GET /bookmarklet
///
/// Returns JavaScript that posts the current page's title and URL here.
pub async fn get_bookmarklet(headers: HeaderMap) -> Result<Response, AppError> {
    let base_url = base_url(&headers)?;
    let script = render_bookmarklet(&base_url)?;

    Ok(([(header::CONTENT_TYPE, "application/javascript")], script).into_response())
}
