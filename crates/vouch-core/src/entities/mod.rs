//! Domain entities

mod proof;
mod team_member;
mod vouch;

pub use proof::Proof;
pub use team_member::TeamMember;
pub use vouch::Vouch;
