//! Contact form route handlers.
//!
//! The page renders server-side; submissions go to the JSON endpoint,
//! which validates per field and reports errors inline. There is no
//! mail backend; a valid submission is acknowledged and logged, the
//! same terminal simulated action as checkout.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use askama::Template;
use askama_web::WebTemplate;
use axum::{Json, http::StatusCode, response::IntoResponse};
use elite_store_core::Email;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::filters;

/// Digits with an optional leading `+`, no leading zero, at most 16
/// digits. Applied after stripping spaces, dashes, and parentheses.
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+?[1-9][0-9]{0,15}$").expect("valid phone pattern")
});

/// Contact form submission data.
#[derive(Debug, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

/// Response for form submission. `errors` maps field name to the
/// message shown next to that field.
#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub errors: BTreeMap<&'static str, String>,
}

/// Validate a submission, returning the per-field error map.
#[must_use]
pub fn validate(form: &ContactForm) -> BTreeMap<&'static str, String> {
    let mut errors = BTreeMap::new();
    let required = "This field is required".to_string();

    if form.name.trim().is_empty() {
        errors.insert("name", required.clone());
    }

    if form.email.trim().is_empty() {
        errors.insert("email", required.clone());
    } else if Email::parse(&form.email).is_err() {
        errors.insert("email", "Please enter a valid email address".to_string());
    }

    if let Some(phone) = form.phone.as_deref().map(str::trim).filter(|p| !p.is_empty())
        && !is_valid_phone(phone)
    {
        errors.insert("phone", "Please enter a valid phone number".to_string());
    }

    if form.subject.trim().is_empty() {
        errors.insert("subject", required.clone());
    }

    if form.message.trim().is_empty() {
        errors.insert("message", required);
    }

    errors
}

/// Phone validation after stripping formatting characters.
fn is_valid_phone(phone: &str) -> bool {
    let stripped: String = phone
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')'))
        .collect();
    PHONE_RE.is_match(&stripped)
}

/// Contact page template.
#[derive(Template, WebTemplate)]
#[template(path = "contact.html")]
pub struct ContactTemplate {}

/// Display the contact page.
#[instrument]
pub async fn show() -> impl IntoResponse {
    ContactTemplate {}
}

/// Submit the contact form.
///
/// POST /api/contact
#[instrument(skip(form), fields(email = %form.email))]
pub async fn submit(Json(form): Json<ContactForm>) -> impl IntoResponse {
    let errors = validate(&form);
    if !errors.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ContactResponse {
                success: false,
                message: Some("Please fill in all required fields correctly".to_string()),
                errors,
            }),
        );
    }

    tracing::info!(
        name = %form.name.trim(),
        subject = %form.subject.trim(),
        "Contact message received"
    );

    (
        StatusCode::OK,
        Json(ContactResponse {
            success: true,
            message: Some(
                "Message sent successfully! We'll get back to you soon.".to_string(),
            ),
            errors: BTreeMap::new(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: Some("+1 (555) 123-4567".to_string()),
            subject: "Order question".to_string(),
            message: "Where is my order?".to_string(),
        }
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        assert!(validate(&valid_form()).is_empty());
    }

    #[test]
    fn test_missing_required_fields() {
        let form = ContactForm {
            name: "  ".to_string(),
            email: String::new(),
            phone: None,
            subject: String::new(),
            message: String::new(),
        };

        let errors = validate(&form);
        assert_eq!(errors.len(), 4);
        assert!(errors.contains_key("name"));
        assert!(errors.contains_key("email"));
        assert!(errors.contains_key("subject"));
        assert!(errors.contains_key("message"));
    }

    #[test]
    fn test_invalid_email() {
        let form = ContactForm {
            email: "not-an-email".to_string(),
            ..valid_form()
        };
        assert!(validate(&form).contains_key("email"));
    }

    #[test]
    fn test_phone_is_optional_but_validated_when_present() {
        let no_phone = ContactForm {
            phone: None,
            ..valid_form()
        };
        assert!(validate(&no_phone).is_empty());

        let blank_phone = ContactForm {
            phone: Some("   ".to_string()),
            ..valid_form()
        };
        assert!(validate(&blank_phone).is_empty());

        let bad_phone = ContactForm {
            phone: Some("0123".to_string()),
            ..valid_form()
        };
        assert!(validate(&bad_phone).contains_key("phone"));
    }

    #[test]
    fn test_phone_formatting_characters_are_stripped() {
        assert!(is_valid_phone("+1 (555) 123-4567"));
        assert!(is_valid_phone("15551234567"));
        assert!(!is_valid_phone("555-CALL-NOW"));
        assert!(!is_valid_phone("+0 555"));
    }
}
