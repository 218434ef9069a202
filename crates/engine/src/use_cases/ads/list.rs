//! List ads, optionally restricted by a single field filter.

use std::sync::Arc;

use adboard_domain::{AdFilter, FilterKey};

use crate::infrastructure::ports::AdRepo;

use super::{AdOutput, AdsError};

pub struct ListAds {
    ads: Arc<dyn AdRepo>,
}

impl ListAds {
    pub fn new(ads: Arc<dyn AdRepo>) -> Self {
        Self { ads }
    }

    /// `filter` is a raw `(field name, substring)` pair; the name is resolved
    /// case-insensitively and an unknown name fails with
    /// [`AdsError::UnsupportedFilterKey`].
    pub async fn execute(
        &self,
        filter: Option<(String, String)>,
    ) -> Result<Vec<AdOutput>, AdsError> {
        let ads = match filter {
            Some((name, value)) => {
                let filter = AdFilter::new(FilterKey::resolve(&name)?, value);
                tracing::debug!(key = %filter.key, value = %filter.value, "Listing filtered ads");
                self.ads.list_filtered(&filter).await?
            }
            None => {
                tracing::debug!("Listing all ads");
                self.ads.list_all().await?
            }
        };

        Ok(ads.into_iter().map(AdOutput::from).collect())
    }
}
