use crate::i18n::strings::ContactErrorStrings;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

pub const NAME_MIN_CHARS: usize = 2;
pub const MESSAGE_MIN_CHARS: usize = 10;

static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Message,
}

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldError {
    #[error("name is required")]
    NameRequired,
    #[error("name is too short")]
    NameTooShort,
    #[error("email is required")]
    EmailRequired,
    #[error("email is not a valid address")]
    EmailInvalid,
    #[error("message is required")]
    MessageRequired,
    #[error("message is too short")]
    MessageTooShort,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [ContactField::Name, ContactField::Email, ContactField::Message];

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Message => "message",
        }
    }

    /// Checks a raw field value. Length limits count characters after trimming.
    pub fn validate(self, value: &str) -> Result<(), FieldError> {
        let trimmed = value.trim();
        match self {
            ContactField::Name if trimmed.is_empty() => Err(FieldError::NameRequired),
            ContactField::Name if trimmed.chars().count() < NAME_MIN_CHARS => {
                Err(FieldError::NameTooShort)
            }
            ContactField::Email if trimmed.is_empty() => Err(FieldError::EmailRequired),
            ContactField::Email if !EMAIL_SHAPE.is_match(value) => Err(FieldError::EmailInvalid),
            ContactField::Message if trimmed.is_empty() => Err(FieldError::MessageRequired),
            ContactField::Message if trimmed.chars().count() < MESSAGE_MIN_CHARS => {
                Err(FieldError::MessageTooShort)
            }
            _ => Ok(()),
        }
    }
}

impl FieldError {
    #[must_use]
    pub fn field(self) -> ContactField {
        match self {
            FieldError::NameRequired | FieldError::NameTooShort => ContactField::Name,
            FieldError::EmailRequired | FieldError::EmailInvalid => ContactField::Email,
            FieldError::MessageRequired | FieldError::MessageTooShort => ContactField::Message,
        }
    }

    #[must_use]
    pub fn message(self, strings: &ContactErrorStrings) -> &'static str {
        match self {
            FieldError::NameRequired => strings.name_required,
            FieldError::NameTooShort => strings.name_too_short,
            FieldError::EmailRequired => strings.email_required,
            FieldError::EmailInvalid => strings.email_invalid,
            FieldError::MessageRequired => strings.message_required,
            FieldError::MessageTooShort => strings.message_too_short,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        contact::validation::{ContactField, FieldError},
        i18n::Language,
    };

    #[test]
    fn name_rules() {
        assert_eq!(ContactField::Name.validate(""), Err(FieldError::NameRequired));
        assert_eq!(ContactField::Name.validate("   "), Err(FieldError::NameRequired));
        assert_eq!(ContactField::Name.validate(" A "), Err(FieldError::NameTooShort));
        assert_eq!(ContactField::Name.validate("Al"), Ok(()));
        assert_eq!(ContactField::Name.validate("Íñ"), Ok(()));
    }

    #[test]
    fn email_rules() {
        assert_eq!(ContactField::Email.validate(" "), Err(FieldError::EmailRequired));
        assert_eq!(ContactField::Email.validate("ana"), Err(FieldError::EmailInvalid));
        assert_eq!(ContactField::Email.validate("ana@mail"), Err(FieldError::EmailInvalid));
        assert_eq!(ContactField::Email.validate("a b@mail.es"), Err(FieldError::EmailInvalid));
        assert_eq!(ContactField::Email.validate("a@@mail.es"), Err(FieldError::EmailInvalid));
        assert_eq!(ContactField::Email.validate("ana@mail.es"), Ok(()));
    }

    #[test]
    fn message_rules() {
        assert_eq!(ContactField::Message.validate(""), Err(FieldError::MessageRequired));
        assert_eq!(ContactField::Message.validate("  0123456789  "), Ok(()));
        assert_eq!(
            ContactField::Message.validate("  short   "),
            Err(FieldError::MessageTooShort)
        );
        assert_eq!(ContactField::Message.validate("Necesito ayuda"), Ok(()));
    }

    #[test]
    fn errors_belong_to_their_field() {
        for field in ContactField::ALL {
            let error = field.validate("").unwrap_err();
            assert_eq!(error.field(), field);
            for language in Language::ALL {
                assert!(!error.message(&language.strings().contact.errors).is_empty());
            }
        }
    }
}
