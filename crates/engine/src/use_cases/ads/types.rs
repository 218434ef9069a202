//! Input and output shapes for ad use cases.

use adboard_domain::Ad;
use serde::Serialize;

/// A validated ad submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdInput {
    pub id: String,
    pub email: String,
    pub title: Option<String>,
    pub body: Option<String>,
}

impl From<AdInput> for Ad {
    fn from(input: AdInput) -> Self {
        Ad::new(input.id, input.email, input.title, input.body)
    }
}

/// An ad as returned to clients. Absent optional fields serialize as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdOutput {
    pub id: String,
    pub email: String,
    pub title: Option<String>,
    pub body: Option<String>,
}

impl From<Ad> for AdOutput {
    fn from(ad: Ad) -> Self {
        Self {
            id: ad.id,
            email: ad.email,
            title: ad.title,
            body: ad.body,
        }
    }
}
