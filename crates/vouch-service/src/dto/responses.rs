//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Keys are
//! camelCase to match what the public site already consumes.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Pagination
// ============================================================================

/// Offset pagination metadata
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub page: i64,
    pub limit: i64,
    /// Display total; for vouches this is the highest vouch number
    /// unless the listing is filtered
    pub total: i64,
    /// Rows actually available under the current filter
    pub actual_count: i64,
    pub total_pages: i64,
    pub has_more: bool,
}

impl PageMeta {
    pub fn new(page: i64, limit: i64, total: i64, actual_count: i64) -> Self {
        let total_pages = if limit > 0 {
            (actual_count + limit - 1) / limit
        } else {
            0
        };
        Self {
            page,
            limit,
            total,
            actual_count,
            total_pages,
            has_more: page < total_pages,
        }
    }
}

// ============================================================================
// Message Segments
// ============================================================================

/// One rendered piece of a vouch or proof message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MessageSegmentDto {
    Text {
        content: String,
    },
    Mention {
        /// Rendered form, e.g. `@rex`
        content: String,
        #[serde(rename = "userId")]
        user_id: String,
        #[serde(rename = "displayName")]
        display_name: String,
    },
}

// ============================================================================
// Vouch Responses
// ============================================================================

/// A single vouch entry
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VouchResponse {
    pub id: String,
    pub vouch_number: i32,
    pub message_id: String,
    pub author_id: String,
    pub author_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_avatar: Option<String>,
    pub message: String,
    pub message_parts: Vec<MessageSegmentDto>,
    pub timestamp: DateTime<Utc>,
    pub channel_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proof_url: Option<String>,
}

/// Paginated vouch listing
#[derive(Debug, Clone, Serialize)]
pub struct VouchListResponse {
    pub vouches: Vec<VouchResponse>,
    pub pagination: PageMeta,
}

// ============================================================================
// Proof Responses
// ============================================================================

/// A single proof entry with its attached screenshots
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProofResponse {
    pub id: String,
    pub message_id: String,
    pub author_id: String,
    pub author_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_avatar: Option<String>,
    pub message: String,
    pub message_parts: Vec<MessageSegmentDto>,
    pub image_urls: Vec<String>,
    pub timestamp: DateTime<Utc>,
    pub channel_id: String,
}

/// Paginated proof listing
#[derive(Debug, Clone, Serialize)]
pub struct ProofListResponse {
    pub proofs: Vec<ProofResponse>,
    pub pagination: PageMeta,
}

// ============================================================================
// Summary Response
// ============================================================================

/// Aggregate statistics mined from every vouch message
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    pub total_vouches: i64,
    #[serde(rename = "totalINR")]
    pub total_inr: u64,
    pub nitro: u64,
    pub decors: u64,
    pub owo: u64,
    pub crypto: f64,
    pub crypto_giveaways: u64,
}

// ============================================================================
// Team Responses
// ============================================================================

/// A roster member as exposed to the site
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMemberResponse {
    pub user_id: String,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub role: String,
}

/// The full roster grouped by role
///
/// Every group is an array, `founder` included; the site indexes into it.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamResponse {
    pub founder: Vec<TeamMemberResponse>,
    pub owners: Vec<TeamMemberResponse>,
    pub girl_owners: Vec<TeamMemberResponse>,
    pub managers: Vec<TeamMemberResponse>,
    pub early_support: Vec<TeamMemberResponse>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_meta_rounds_up_total_pages() {
        let meta = PageMeta::new(1, 30, 95, 95);
        assert_eq!(meta.total_pages, 4);
        assert!(meta.has_more);

        let last = PageMeta::new(4, 30, 95, 95);
        assert!(!last.has_more);
    }

    #[test]
    fn test_page_meta_empty_listing() {
        let meta = PageMeta::new(1, 30, 0, 0);
        assert_eq!(meta.total_pages, 0);
        assert!(!meta.has_more);
    }

    #[test]
    fn test_summary_serializes_total_inr_uppercase() {
        let summary = SummaryResponse {
            total_vouches: 12,
            total_inr: 500,
            nitro: 1,
            decors: 2,
            owo: 1000,
            crypto: 3.5,
            crypto_giveaways: 1,
        };
        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"totalINR\":500"));
        assert!(json.contains("\"totalVouches\":12"));
        assert!(json.contains("\"cryptoGiveaways\":1"));
    }

    #[test]
    fn test_message_segment_tagging() {
        let mention = MessageSegmentDto::Mention {
            content: "@rex".to_string(),
            user_id: "643480211421265930".to_string(),
            display_name: "rex".to_string(),
        };
        let json = serde_json::to_string(&mention).unwrap();
        assert!(json.contains("\"type\":\"mention\""));
        assert!(json.contains("\"userId\":\"643480211421265930\""));

        let text = MessageSegmentDto::Text {
            content: "legit seller".to_string(),
        };
        let json = serde_json::to_string(&text).unwrap();
        assert!(json.contains("\"type\":\"text\""));
    }

    #[test]
    fn test_team_response_groups_are_always_arrays() {
        let roster = TeamResponse::default();
        let json = serde_json::to_string(&roster).unwrap();
        assert!(json.contains("\"founder\":[]"));
        assert!(json.contains("\"girlOwners\":[]"));
        assert!(json.contains("\"earlySupport\":[]"));
    }

    #[test]
    fn test_readiness_response() {
        let ready = ReadinessResponse::ready(true);
        assert_eq!(ready.status, "ready");
        assert_eq!(ready.checks.database, "healthy");

        let not_ready = ReadinessResponse::ready(false);
        assert_eq!(not_ready.status, "not_ready");
    }
}
