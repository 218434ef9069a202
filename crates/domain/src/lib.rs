//! Adboard domain types.
//!
//! Holds the `Ad` record and the list filter. Nothing in here knows about
//! storage or HTTP; the engine crate wires both around these types.

pub mod entities;
pub mod value_objects;

pub use entities::Ad;
pub use value_objects::{AdFilter, FilterKey, UnsupportedFilterKey};
