//! Summary handler

use axum::{
    extract::State,
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use vouch_service::SummaryService;

use crate::response::ApiResult;
use crate::state::AppState;

/// Community statistics totals
///
/// GET /summary
///
/// Served with aggressive no-cache headers so the landing page counters
/// never show stale totals through an intermediary cache.
pub async fn get_summary(State(state): State<AppState>) -> ApiResult<Response> {
    let service = SummaryService::new(state.service_context());
    let summary = service.summarize().await?;

    let mut response = Json(summary).into_response();
    let headers = response.headers_mut();
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static("no-store, no-cache, must-revalidate, proxy-revalidate"),
    );
    headers.insert(header::PRAGMA, HeaderValue::from_static("no-cache"));
    headers.insert(header::EXPIRES, HeaderValue::from_static("0"));

    Ok(response)
}
