//! Request handlers

pub mod health;
pub mod proofs;
pub mod summary;
pub mod team;
pub mod vouches;
