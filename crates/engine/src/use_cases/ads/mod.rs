//! Ad use cases: submitting ads, listing them and the vowel report.
//!
//! Inputs reaching this layer are already validated by the HTTP boundary.

use std::sync::Arc;

use adboard_domain::UnsupportedFilterKey;

use crate::infrastructure::ports::{AdRepo, RepoError};

mod list;
mod submit;
mod types;
mod vowel_report;

pub use list::ListAds;
pub use submit::SubmitAd;
pub use types::{AdInput, AdOutput};
pub use vowel_report::{count_vowels, VowelReport};

/// Shared error type for ad use cases.
#[derive(Debug, thiserror::Error)]
pub enum AdsError {
    #[error(transparent)]
    UnsupportedFilterKey(#[from] UnsupportedFilterKey),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
    #[error("CSV generation failed: {0}")]
    Csv(String),
}

impl From<csv::Error> for AdsError {
    fn from(e: csv::Error) -> Self {
        Self::Csv(e.to_string())
    }
}

/// Container for ad use cases.
pub struct AdUseCases {
    pub submit: SubmitAd,
    pub list: ListAds,
    pub vowel_report: VowelReport,
}

impl AdUseCases {
    pub fn new(ads: Arc<dyn AdRepo>) -> Self {
        Self {
            submit: SubmitAd::new(ads.clone()),
            list: ListAds::new(ads.clone()),
            vowel_report: VowelReport::new(ads),
        }
    }
}
