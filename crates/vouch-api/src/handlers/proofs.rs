//! Proof handlers

use axum::extract::State;
use vouch_service::{ProofListResponse, ProofService};

use crate::extractors::Pagination;
use crate::response::{ApiJson, ApiResult};
use crate::state::AppState;

/// Default page size for the proof listing
const DEFAULT_LIMIT: i64 = 10;

/// List proofs, newest first
///
/// GET /proofs?page=&limit=
pub async fn list_proofs(
    State(state): State<AppState>,
    pagination: Pagination,
) -> ApiResult<ApiJson<ProofListResponse>> {
    let service = ProofService::new(state.service_context());
    let response = service
        .list_proofs(pagination.page, pagination.limit_or(DEFAULT_LIMIT))
        .await?;
    Ok(ApiJson(response))
}
