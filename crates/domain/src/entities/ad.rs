//! Ad entity - a submitted classified ad.
//!
//! ## Identity
//!
//! Two ads are the same ad only when all four fields are equal. Sharing an
//! `id` is not enough: ads with the same id and a different title or body are
//! distinct records and are stored side by side.
//!
//! Ads are never mutated or deleted once stored.

/// A classified ad as held by the store.
///
/// Field constraints (id length, non-blank email, title/body presence) are
/// checked at the HTTP boundary before an `Ad` is ever built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ad {
    pub id: String,
    pub email: String,
    pub title: Option<String>,
    pub body: Option<String>,
}

impl Ad {
    pub fn new(
        id: impl Into<String>,
        email: impl Into<String>,
        title: Option<String>,
        body: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            title,
            body,
        }
    }

    /// Body text when it carries at least one non-whitespace character.
    pub fn body_text(&self) -> Option<&str> {
        self.body
            .as_deref()
            .filter(|body| !body.trim().is_empty())
    }
}
