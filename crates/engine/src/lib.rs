//! Adboard Engine library.
//!
//! Server-side code for the Adboard classified-ads service.
//!
//! ## Structure
//!
//! - `use_cases/` - Submitting, listing and reporting on ads
//! - `infrastructure/` - Port traits, in-memory adapters, configuration
//! - `api/` - HTTP entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
