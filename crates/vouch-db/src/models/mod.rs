//! Database models - SQLx-compatible structs for PostgreSQL tables

mod proof;
mod team_member;
mod vouch;

pub use proof::ProofModel;
pub use team_member::TeamMemberModel;
pub use vouch::VouchModel;
