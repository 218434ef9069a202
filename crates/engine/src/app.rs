//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::{memory::InMemoryAdRepo, ports::AdRepo};
use crate::use_cases;

/// Main application state.
///
/// Holds the use cases built over the ad repository.
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub ads: use_cases::AdUseCases,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(ads: Arc<dyn AdRepo>) -> Self {
        Self {
            use_cases: UseCases {
                ads: use_cases::AdUseCases::new(ads),
            },
        }
    }

    /// App backed by a fresh in-memory ad store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryAdRepo::new()))
    }
}
