//! Repository traits (ports)

mod repositories;

pub use repositories::{
    ProofRepository, RepoResult, TeamMemberRepository, VouchQuery, VouchRepository,
};
