//! In-memory port implementations.

mod ad_repo;

pub use ad_repo::InMemoryAdRepo;
