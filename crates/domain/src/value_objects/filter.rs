//! List filter - one field name plus a substring to look for.

use std::fmt;
use std::str::FromStr;

use crate::Ad;

/// Field of an [`Ad`] a list query can be restricted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKey {
    Id,
    Email,
    Title,
    Body,
}

/// Raised when a filter name matches none of the [`FilterKey`] fields.
///
/// Kept separate from an empty result so callers can tell "no such filter"
/// from "nothing matched".
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported filter key: {0}")]
pub struct UnsupportedFilterKey(pub String);

impl FilterKey {
    pub const ALL: [FilterKey; 4] = [
        FilterKey::Id,
        FilterKey::Email,
        FilterKey::Title,
        FilterKey::Body,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKey::Id => "id",
            FilterKey::Email => "email",
            FilterKey::Title => "title",
            FilterKey::Body => "body",
        }
    }

    /// Resolve an external field name, ignoring ASCII case.
    pub fn resolve(name: &str) -> Result<Self, UnsupportedFilterKey> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| UnsupportedFilterKey(name.to_string()))
    }

    /// Field value of `ad` this key points at. Absent optional fields read as "".
    fn field<'a>(&self, ad: &'a Ad) -> &'a str {
        match self {
            FilterKey::Id => &ad.id,
            FilterKey::Email => &ad.email,
            FilterKey::Title => ad.title.as_deref().unwrap_or_default(),
            FilterKey::Body => ad.body.as_deref().unwrap_or_default(),
        }
    }
}

impl FromStr for FilterKey {
    type Err = UnsupportedFilterKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s)
    }
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-sensitive substring filter on a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdFilter {
    pub key: FilterKey,
    pub value: String,
}

impl AdFilter {
    pub fn new(key: FilterKey, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }

    /// Empty values match every ad.
    pub fn matches(&self, ad: &Ad) -> bool {
        self.key.field(ad).contains(self.value.as_str())
    }
}
