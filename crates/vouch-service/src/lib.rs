//! # vouch-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use dto::{
    HealthChecks, HealthResponse, MessageSegmentDto, PageMeta, ProofListResponse, ProofResponse,
    ReadinessResponse, SummaryResponse, TeamIngestRequest, TeamIngestPayload, TeamMemberData,
    TeamMemberResponse, TeamResponse, VouchListResponse, VouchResponse,
};
pub use services::{
    ProofService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
    SummaryService, TeamService, VouchService,
};
