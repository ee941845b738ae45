//! Value objects - immutable domain values

mod mention_directory;
mod team_role;

pub use mention_directory::MentionDirectory;
pub use team_role::{TeamRole, TeamRoleParseError};
