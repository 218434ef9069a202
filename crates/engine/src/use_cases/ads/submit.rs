//! Submit an ad.

use std::sync::Arc;

use adboard_domain::Ad;

use crate::infrastructure::ports::AdRepo;

use super::{AdInput, AdsError};

pub struct SubmitAd {
    ads: Arc<dyn AdRepo>,
}

impl SubmitAd {
    pub fn new(ads: Arc<dyn AdRepo>) -> Self {
        Self { ads }
    }

    /// Returns `false` when an identical ad is already stored.
    pub async fn execute(&self, input: AdInput) -> Result<bool, AdsError> {
        let ad = Ad::from(input);
        let ad_id = ad.id.clone();
        let created = self.ads.add(ad).await?;

        if created {
            tracing::info!(ad_id = %ad_id, "Ad submitted");
        } else {
            tracing::info!(ad_id = %ad_id, "Identical ad already stored");
        }
        Ok(created)
    }
}
