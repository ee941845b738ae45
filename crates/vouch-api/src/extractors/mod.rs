//! Request extractors

pub mod pagination;
pub mod validated;

pub use pagination::Pagination;
pub use validated::ValidatedJson;
