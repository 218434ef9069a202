//! Port traits for infrastructure boundaries.
//!
//! Ads live in process memory today; the `AdRepo` port is the seam a real
//! datastore would plug into.

mod error;
mod repos;

pub use error::RepoError;
pub use repos::*;
