//! Contact form field rules.
//!
//! Pure predicates with no access to the page; [`crate::form`] applies
//! them to field state.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::Messages;

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[а-яА-ЯёЁa-zA-Z\s\-]+$").expect("valid name regex"));

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

// Russian numbering: optional +7/8 trunk prefix, operator code starting
// with 4, 8 or 9, then 3-2-2 digit groups.
static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(\+7|8)?[\s\-]?\(?[489][0-9]{2}\)?[\s\-]?[0-9]{3}[\s\-]?[0-9]{2}[\s\-]?[0-9]{2}$",
    )
    .expect("valid phone regex")
});

/// Minimum length of a name, in characters
pub const MIN_NAME_LEN: usize = 2;

/// Minimum length of a message, in characters
pub const MIN_MESSAGE_LEN: usize = 10;

/// Kind of a contact form field, derived from its input type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// `<input type="text">`
    Name,
    /// `<input type="email">`
    Email,
    /// `<input type="tel">`, may be left empty
    Phone,
    /// `<textarea>`
    Message,
}

impl FieldKind {
    /// Map an input type attribute to a field kind.
    pub fn from_input_type(input_type: &str) -> Option<Self> {
        match input_type {
            "text" => Some(Self::Name),
            "email" => Some(Self::Email),
            "tel" => Some(Self::Phone),
            "textarea" => Some(Self::Message),
            _ => None,
        }
    }

    pub fn input_type(&self) -> &'static str {
        match self {
            Self::Name => "text",
            Self::Email => "email",
            Self::Phone => "tel",
            Self::Message => "textarea",
        }
    }

    pub fn is_optional(&self) -> bool {
        matches!(self, Self::Phone)
    }

    /// Apply this kind's rule to `value`.
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            Self::Name => is_valid_name(value),
            Self::Email => is_valid_email(value),
            Self::Phone => value.is_empty() || is_valid_phone(value),
            Self::Message => is_valid_message(value),
        }
    }

    /// The localized error shown under a field of this kind.
    pub fn error_message<'a>(&self, messages: &'a Messages) -> &'a str {
        match self {
            Self::Name => &messages.invalid_name,
            Self::Email => &messages.invalid_email,
            Self::Phone => &messages.invalid_phone,
            Self::Message => &messages.invalid_message,
        }
    }
}

/// At least two characters, Latin or Cyrillic letters, whitespace and hyphens only.
pub fn is_valid_name(name: &str) -> bool {
    name.chars().count() >= MIN_NAME_LEN && NAME_PATTERN.is_match(name)
}

/// `local@domain.tld` shape: one `@`, no whitespace, a dot after the `@`.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_PATTERN.is_match(phone)
}

pub fn is_valid_message(message: &str) -> bool {
    message.chars().count() >= MIN_MESSAGE_LEN
}
