//! Domain entities.

mod ad;

pub use ad::Ad;
