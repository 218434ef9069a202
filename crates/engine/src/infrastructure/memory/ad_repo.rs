//! In-memory ad store.
//!
//! Ads are kept in a `HashSet` so duplicate detection compares whole records.
//! Nothing is persisted; the set lives as long as the process.

use std::collections::HashSet;

use adboard_domain::{Ad, AdFilter};
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::infrastructure::ports::{AdRepo, RepoError};

/// Process-lifetime ad storage guarded by an async `RwLock`.
#[derive(Default)]
pub struct InMemoryAdRepo {
    ads: RwLock<HashSet<Ad>>,
}

impl InMemoryAdRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored ads.
    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.ads.read().await.len()
    }

    #[cfg(test)]
    pub async fn is_empty(&self) -> bool {
        self.ads.read().await.is_empty()
    }
}

#[async_trait]
impl AdRepo for InMemoryAdRepo {
    async fn add(&self, ad: Ad) -> Result<bool, RepoError> {
        Ok(self.ads.write().await.insert(ad))
    }

    async fn list_all(&self) -> Result<Vec<Ad>, RepoError> {
        Ok(self.ads.read().await.iter().cloned().collect())
    }

    async fn list_filtered(&self, filter: &AdFilter) -> Result<Vec<Ad>, RepoError> {
        let guard = self.ads.read().await;
        Ok(guard.iter().filter(|ad| filter.matches(ad)).cloned().collect())
    }
}
