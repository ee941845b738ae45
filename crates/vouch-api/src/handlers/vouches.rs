//! Vouch handlers

use axum::extract::{Query, State};
use serde::Deserialize;
use vouch_service::{VouchListResponse, VouchService};

use crate::extractors::Pagination;
use crate::response::{ApiJson, ApiResult};
use crate::state::AppState;

/// Default page size for the vouch listing
const DEFAULT_LIMIT: i64 = 30;

/// Search filter query parameters
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Case-insensitive substring match over author name and message body
    #[serde(default)]
    pub search: Option<String>,
}

/// List vouches, newest first
///
/// GET /vouches?page=&limit=&search=
pub async fn list_vouches(
    State(state): State<AppState>,
    pagination: Pagination,
    Query(params): Query<SearchParams>,
) -> ApiResult<ApiJson<VouchListResponse>> {
    let service = VouchService::new(state.service_context());
    let response = service
        .list_vouches(
            pagination.page,
            pagination.limit_or(DEFAULT_LIMIT),
            params.search,
        )
        .await?;
    Ok(ApiJson(response))
}
