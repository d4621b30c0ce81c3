use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::timestamp;
use super::validate::{self, FieldError, Validate};

pub const DEFAULT_STATUS: &str = "new";

pub const ACKNOWLEDGEMENT: &str =
    "Thank you for your message! We'll get back to you within 24 hours.";

/// Inbound contact form payload.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub service: Option<String>,
    pub message: String,
}

impl Validate for ContactForm {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        validate::require_non_empty(&mut errors, "name", &self.name);
        validate::require_email(&mut errors, "email", &self.email);
        validate::require_non_empty(&mut errors, "message", &self.message);
        validate::finish(errors)
    }
}

/// A persisted contact inquiry. `status` is written once and never advanced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub service: Option<String>,
    pub message: String,
    #[serde(with = "timestamp")]
    pub timestamp: DateTime<Utc>,
    #[serde(default = "default_status")]
    pub status: String,
}

impl ContactSubmission {
    pub fn from_form(form: ContactForm) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: form.name,
            email: validate::normalize_email(&form.email),
            company: form.company,
            service: form.service,
            message: form.message,
            timestamp: timestamp::now(),
            status: default_status(),
        }
    }
}

fn default_status() -> String {
    DEFAULT_STATUS.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
    pub id: Option<String>,
}

impl ContactResponse {
    pub fn accepted(id: String) -> Self {
        Self {
            success: true,
            message: ACKNOWLEDGEMENT.to_string(),
            id: Some(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use mongodb::bson::{self, Bson, doc};

    use super::*;

    fn form() -> ContactForm {
        ContactForm {
            name: "John Doe".to_string(),
            email: "john.doe@test.com".to_string(),
            company: None,
            service: Some("Branding".to_string()),
            message: "hello".to_string(),
        }
    }

    #[test]
    fn from_form_starts_as_new() {
        let submission = ContactSubmission::from_form(form());
        assert_eq!(submission.status, "new");
        assert_eq!(submission.id.len(), 36);
        assert_eq!(submission.company, None);
        assert_eq!(submission.service.as_deref(), Some("Branding"));
    }

    #[test]
    fn from_form_normalizes_email_domain() {
        let mut mixed = form();
        mixed.email = "John.Doe@Test.COM".to_string();
        let submission = ContactSubmission::from_form(mixed);
        assert_eq!(submission.email, "John.Doe@test.com");
    }

    #[test]
    fn stored_document_shape() {
        let submission = ContactSubmission::from_form(form());
        let doc = bson::to_document(&submission).unwrap();
        assert_eq!(doc.get("company"), Some(&Bson::Null));
        assert!(doc.get_str("timestamp").is_ok());
        assert_eq!(doc.get_str("status").unwrap(), "new");
        assert!(!doc.contains_key("_id"));
    }

    #[test]
    fn decode_tolerates_drift() {
        let doc = doc! {
            "id": "c9a0f1de-5d4b-4e44-a7f5-0d0b5b0e6c11",
            "name": "Jane",
            "email": "jane@example.com",
            "message": "hi",
            "timestamp": "2025-06-01T12:00:00",
            "priority": 3,
        };
        let submission: ContactSubmission = bson::from_document(doc).unwrap();
        assert_eq!(submission.status, "new");
        assert_eq!(submission.company, None);
        assert_eq!(
            timestamp::format(&submission.timestamp),
            "2025-06-01T12:00:00.000000Z"
        );
    }

    #[test]
    fn invalid_form_reports_each_field() {
        let mut bad = form();
        bad.email = "not-an-email".to_string();
        bad.message = String::new();
        let errors = bad.validate().unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.loc[1].as_str()).collect();
        assert_eq!(fields, vec!["email", "message"]);
    }
}
