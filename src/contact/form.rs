use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{FolioError, Result};

/// Longest accepted message body.
pub const MAX_MESSAGE_LENGTH: usize = 5_000;

/// Longest accepted single-line field.
pub const MAX_FIELD_LENGTH: usize = 200;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// The four fields of the contact form, as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl ContactForm {
    pub fn new(name: &str, email: &str, subject: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            subject: subject.to_string(),
            message: message.to_string(),
        }
    }

    fn fields(&self) -> [(&'static str, &str); 4] {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ]
    }

    /// Every problem with the form, in field order.
    pub fn field_errors(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        for (field, value) in self.fields() {
            let value = value.trim();
            let limit = if field == "message" {
                MAX_MESSAGE_LENGTH
            } else {
                MAX_FIELD_LENGTH
            };
            if value.is_empty() {
                errors.push(FieldError {
                    field,
                    message: format!("{} is required", capitalize(field)),
                });
            } else if value.chars().count() > limit {
                errors.push(FieldError {
                    field,
                    message: format!("{} exceeds {} characters", capitalize(field), limit),
                });
            } else if field == "email" && !EMAIL_RE.is_match(value) {
                errors.push(FieldError {
                    field,
                    message: "Email must be a valid address".to_string(),
                });
            }
        }
        errors
    }

    pub fn validate(&self) -> Result<()> {
        match self.field_errors().into_iter().next() {
            None => Ok(()),
            Some(error) => Err(FolioError::Validation(error.message)),
        }
    }

    /// Copy with surrounding whitespace removed from every field.
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }
}

fn capitalize(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> ContactForm {
        ContactForm::new("Ada", "ada@example.com", "Hello", "A message")
    }

    #[test]
    fn test_valid_form() {
        assert!(valid().validate().is_ok());
        assert!(valid().field_errors().is_empty());
    }

    #[test]
    fn test_every_field_is_required() {
        let errors = ContactForm::default().field_errors();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["name", "email", "subject", "message"]);
        assert_eq!(errors[0].message, "Name is required");
    }

    #[test]
    fn test_whitespace_only_counts_as_empty() {
        let form = ContactForm {
            subject: "   ".to_string(),
            ..valid()
        };
        let err = form.validate().unwrap_err().to_string();
        assert!(err.contains("Subject is required"));
    }

    #[test]
    fn test_email_shape() {
        for bad in ["ada", "ada@", "@example.com", "ada@example", "a da@example.com"] {
            let form = ContactForm {
                email: bad.to_string(),
                ..valid()
            };
            assert!(form.validate().is_err(), "accepted {}", bad);
        }
    }

    #[test]
    fn test_message_length_limit() {
        let form = ContactForm {
            message: "x".repeat(MAX_MESSAGE_LENGTH + 1),
            ..valid()
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_trimmed() {
        let form = ContactForm::new("  Ada ", " ada@example.com", "Hi ", "\nBody\n");
        assert_eq!(form.trimmed(), ContactForm::new("Ada", "ada@example.com", "Hi", "Body"));
    }
}
