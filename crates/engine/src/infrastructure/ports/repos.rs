//! Repository port traits for ad storage.

use adboard_domain::{Ad, AdFilter};
use async_trait::async_trait;

use super::error::RepoError;

// =============================================================================
// Ad Storage
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdRepo: Send + Sync {
    /// Store `ad` unless a field-for-field identical ad is already present.
    ///
    /// Returns `Ok(false)` for a duplicate; that is not an error.
    async fn add(&self, ad: Ad) -> Result<bool, RepoError>;

    /// Every stored ad, in no particular order.
    async fn list_all(&self) -> Result<Vec<Ad>, RepoError>;

    /// Stored ads accepted by `filter`, in no particular order.
    async fn list_filtered(&self, filter: &AdFilter) -> Result<Vec<Ad>, RepoError>;
}
