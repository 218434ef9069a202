//! API layer - HTTP entry points.

pub mod dto;
pub mod http;

pub use http::{router, ApiError};
