use std::{fmt, sync::LazyLock};

use regex::Regex;

use crate::macros::nutype_string;

nutype_string!(EmailAddress(
    sanitize(lowercase),
    validate(regex = EMAIL_ADDRESS_REGEX),
));

/// Deliberately loose: one `@`, no whitespace, and a dot somewhere after the `@`.
pub static EMAIL_ADDRESS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Checks the raw input against [`EMAIL_ADDRESS_REGEX`] without any trimming.
pub fn is_valid_email_address(email: &str) -> bool {
    EMAIL_ADDRESS_REGEX.is_match(email)
}

impl EmailAddress {
    pub fn as_str(&self) -> &str {
        &**self
    }

    pub fn with_name(self, name: impl Into<String>) -> Mailbox {
        Mailbox {
            name: Some(name.into()),
            email: self,
        }
    }
}

/// An email address with an optional display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mailbox {
    pub name: Option<String>,
    pub email: EmailAddress,
}

impl From<EmailAddress> for Mailbox {
    fn from(email: EmailAddress) -> Self {
        Self { name: None, email }
    }
}

impl fmt::Display for Mailbox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{name} <{}>", self.email),
            None => self.email.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_addresses() {
        for email in [
            "guest@example.com",
            "a@b.c",
            "first.last+tag@sub.domain.in",
            "Guest@Example.COM",
        ] {
            assert!(is_valid_email_address(email), "{email}");
        }
    }

    #[test]
    fn invalid_addresses() {
        for email in [
            "",
            "not-an-email",
            "guest@example",
            "guest.example.com",
            "gu est@example.com",
            " guest@example.com",
            "guest@@example.com",
            "@example.com",
            "guest@.com",
        ] {
            assert!(!is_valid_email_address(email), "{email}");
        }
    }

    #[test]
    fn lowercased() {
        let email = EmailAddress::try_new("Guest@Example.COM").unwrap();
        assert_eq!(email.as_str(), "guest@example.com");
    }

    #[test]
    fn surrounding_whitespace_is_rejected() {
        EmailAddress::try_new(" guest@example.com ").unwrap_err();
    }

    #[test]
    fn mailbox_display() {
        let email: EmailAddress = "guest@example.com".try_into().unwrap();
        assert_eq!(email.clone().to_string(), "guest@example.com");
        assert_eq!(
            email.with_name("Asha Rao").to_string(),
            "Asha Rao <guest@example.com>"
        );
    }
}
