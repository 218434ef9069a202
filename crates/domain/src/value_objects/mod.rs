//! Value objects used to query entities.

mod filter;

pub use filter::{AdFilter, FilterKey, UnsupportedFilterKey};
