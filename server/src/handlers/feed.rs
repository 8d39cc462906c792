//! Feed handlers
//!
//! Endpoints for reading the feed (raw JSON or rendered HTML) and for
//! submitting shared links.

use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};
use chrono::{DateTime, FixedOffset, Local};
use serde::Deserialize;

use crate::error::AppError;
use crate::feed::render_page;
use crate::AppState;

/// GET /feed.json
///
/// Returns the stored feed document exactly as it is on disk.
pub async fn get_feed_json(State(state): State<AppState>) -> Result<Response, AppError> {
    let raw = state.feed_service.raw_feed().await?;

    Ok(([(header::CONTENT_TYPE, "application/json")], raw).into_response())
}

/// GET /
///
/// Renders the feed as HTML, most recent item first.
pub async fn get_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let items = state.feed_service.recent_first().await?;

    Ok(Html(render_page(&items)?))
}

/// Request body for POST /
#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    /// A bare URL or a `"<title> <url>"` share payload
    #[serde(default)]
    pub url: String,
}

/// POST /
///
/// Saves a shared link. The body is read as JSON whatever its content type,
/// since share shortcuts on phones rarely set one.
pub async fn post_item(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<StatusCode, AppError> {
    let request: SubmitRequest = serde_json::from_slice(&body)
        .map_err(|e| AppError::bad_request_with("Invalid request", e))?;

    if request.url.is_empty() {
        return Err(AppError::bad_request("URL is required"));
    }

    let now: DateTime<FixedOffset> = Local::now().into();
    state.feed_service.submit(&request.url, now).await?;

    Ok(StatusCode::OK)
}
