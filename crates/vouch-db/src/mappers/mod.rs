//! Entity <-> model mappers

mod proof;
mod team_member;
mod vouch;
