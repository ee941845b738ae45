//! # vouch-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! Provides connection pool management, database models with SQLx `FromRow`
//! derives, entity ↔ model mappers, and the `Pg*` repository implementations
//! for the traits defined in `vouch-core`.

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_lazy_pool, create_pool, create_pool_from_env, DatabaseConfig, PgPool};
pub use repositories::{PgProofRepository, PgTeamMemberRepository, PgVouchRepository};
