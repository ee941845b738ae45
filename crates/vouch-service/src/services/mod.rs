//! Service layer - business logic

pub mod context;
pub mod error;
pub mod proof;
pub mod summary;
pub mod team;
pub mod vouch;

pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use proof::ProofService;
pub use summary::SummaryService;
pub use team::TeamService;
pub use vouch::VouchService;
