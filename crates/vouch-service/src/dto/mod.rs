//! Data transfer objects for API requests and responses
//!
//! Response keys use camelCase to match the public site API.

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{TeamIngestPayload, TeamIngestRequest, TeamMemberData};
pub use responses::{
    HealthChecks, HealthResponse, MessageSegmentDto, PageMeta, ProofListResponse, ProofResponse,
    ReadinessResponse, SummaryResponse, TeamMemberResponse, TeamResponse, VouchListResponse,
    VouchResponse,
};
