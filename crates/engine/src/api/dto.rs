//! Request bodies accepted by the HTTP layer.

use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::use_cases::ads::AdInput;

use super::http::ApiError;

/// Body of `POST /ads`.
///
/// Every field is optional at the serde level so a missing field surfaces as a
/// validation error (400) rather than a deserialization rejection.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[validate(schema(function = "validate_ad_content"))]
pub struct AdRequest {
    #[validate(required, length(min = 1, max = 100))]
    pub id: Option<String>,
    #[validate(required)]
    pub email: Option<String>,
    #[validate(length(max = 300))]
    pub title: Option<String>,
    #[validate(length(max = 10000))]
    pub body: Option<String>,
}

fn has_text(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|s| !s.trim().is_empty())
}

/// Cross-field rules the field attributes cannot express.
fn validate_ad_content(ad: &AdRequest) -> Result<(), ValidationError> {
    if ad.email.is_some() && !has_text(&ad.email) {
        return Err(ValidationError::new("blank_email"));
    }
    if !has_text(&ad.title) && !has_text(&ad.body) {
        return Err(ValidationError::new("title_or_body_required"));
    }
    Ok(())
}

impl AdRequest {
    /// Validate and convert into use-case input.
    pub fn into_input(self) -> Result<AdInput, ApiError> {
        self.validate()
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;

        match (self.id, self.email) {
            (Some(id), Some(email)) => Ok(AdInput {
                id,
                email,
                title: self.title,
                body: self.body,
            }),
            _ => Err(ApiError::BadRequest("id and email are required".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX_ID_LENGTH: usize = 100;
    const MAX_TITLE_LENGTH: usize = 300;
    const MAX_BODY_LENGTH: usize = 10_000;

    fn valid() -> AdRequest {
        AdRequest {
            id: Some("ad-1".to_string()),
            email: Some("seller@example.com".to_string()),
            title: Some("This is a title".to_string()),
            body: None,
        }
    }

    fn rejected(request: AdRequest) -> bool {
        matches!(request.into_input(), Err(ApiError::BadRequest(_)))
    }

    #[test]
    fn valid_request_converts() {
        let input = valid().into_input().unwrap();
        assert_eq!(input.id, "ad-1");
        assert_eq!(input.title.as_deref(), Some("This is a title"));
    }

    #[test]
    fn body_alone_is_enough() {
        let request = AdRequest {
            title: None,
            body: Some("Barely used".to_string()),
            ..valid()
        };
        assert!(request.into_input().is_ok());
    }

    #[test]
    fn id_must_be_present_and_sized() {
        assert!(rejected(AdRequest { id: None, ..valid() }));
        assert!(rejected(AdRequest { id: Some(String::new()), ..valid() }));
        assert!(rejected(AdRequest {
            id: Some("x".repeat(MAX_ID_LENGTH + 1)),
            ..valid()
        }));
        assert!(AdRequest {
            id: Some("x".repeat(MAX_ID_LENGTH)),
            ..valid()
        }
        .into_input()
        .is_ok());
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        let request = AdRequest {
            id: Some("é".repeat(MAX_ID_LENGTH)),
            ..valid()
        };
        assert!(request.into_input().is_ok());
    }

    #[test]
    fn email_must_not_be_blank() {
        assert!(rejected(AdRequest { email: None, ..valid() }));
        assert!(rejected(AdRequest { email: Some(" ".to_string()), ..valid() }));
    }

    #[test]
    fn title_and_body_are_capped() {
        assert!(rejected(AdRequest {
            title: Some("c".repeat(MAX_TITLE_LENGTH + 1)),
            ..valid()
        }));
        assert!(rejected(AdRequest {
            body: Some("c".repeat(MAX_BODY_LENGTH + 1)),
            ..valid()
        }));
    }

    #[test]
    fn title_or_body_is_required() {
        assert!(rejected(AdRequest { title: None, body: None, ..valid() }));
        assert!(rejected(AdRequest {
            title: Some("  ".to_string()),
            body: Some("\n".to_string()),
            ..valid()
        }));
    }
}
