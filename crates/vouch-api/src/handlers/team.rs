//! Team roster handlers

use axum::extract::State;
use serde_json::{json, Value};
use vouch_common::AppError;
use vouch_service::{TeamIngestRequest, TeamResponse, TeamService};

use crate::extractors::ValidatedJson;
use crate::response::{ApiJson, ApiResult};
use crate::state::AppState;

/// Get the staff roster grouped by role
///
/// GET /team
pub async fn get_team(State(state): State<AppState>) -> ApiResult<ApiJson<TeamResponse>> {
    let service = TeamService::new(state.service_context());
    let roster = service.get_roster().await?;
    Ok(ApiJson(roster))
}

/// Apply a roster push from the ingest bot
///
/// POST /team
///
/// The body carries the shared-secret token; a mismatch is rejected with 401
/// before the payload is inspected further.
pub async fn ingest_team(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<TeamIngestRequest>,
) -> ApiResult<ApiJson<Value>> {
    if request.token != state.config().bot.token {
        return Err(AppError::InvalidBotToken.into());
    }

    let service = TeamService::new(state.service_context());
    service.ingest(request.payload).await?;
    Ok(ApiJson(json!({ "success": true })))
}
