//! PostgreSQL repository implementations

mod error;
mod proof;
mod team_member;
mod vouch;

pub use proof::PgProofRepository;
pub use team_member::PgTeamMemberRepository;
pub use vouch::PgVouchRepository;
