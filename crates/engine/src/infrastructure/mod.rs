//! Infrastructure implementations.
//!
//! Contains port trait implementations and process configuration.

pub mod config;
pub mod memory;
pub mod ports;
