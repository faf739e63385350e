use std::{fmt, str::FromStr, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{email_address::EmailAddress, macros::nutype_string};

/// A fully validated and normalized contact form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: ContactName,
    pub email: EmailAddress,
    pub phone: Option<PhoneNumber>,
    pub inquiry_type: InquiryType,
    pub message: ContactMessage,
}

/// Contact form fields as they arrived over the wire, before any validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmissionDraft {
    pub name: FieldValue,
    pub email: FieldValue,
    pub phone: FieldValue,
    pub inquiry_type: FieldValue,
    pub message: FieldValue,
}

/// An untyped form field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldValue {
    /// Missing or `null`.
    #[default]
    Absent,
    Text(String),
    /// Present, but not a string.
    Malformed,
}

impl FieldValue {
    pub fn into_text(self) -> Option<String> {
        match self {
            Self::Text(text) => Some(text),
            Self::Absent | Self::Malformed => None,
        }
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.into())
    }
}

nutype_string!(ContactName(sanitize(trim), validate(len_char_min = 2)));

nutype_string!(ContactMessage(sanitize(trim), validate(len_char_min = 10)));

nutype_string!(PhoneNumber(
    sanitize(trim),
    validate(predicate = is_valid_phone_number),
));

pub static PHONE_NUMBER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9][0-9]{0,15}$").unwrap());

/// Strips whitespace, hyphens and parentheses, then checks the remaining
/// characters against [`PHONE_NUMBER_REGEX`].
pub fn is_valid_phone_number(phone: &str) -> bool {
    let compact = phone
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')'))
        .collect::<String>();
    PHONE_NUMBER_REGEX.is_match(&compact)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InquiryType {
    Booking,
    #[default]
    General,
    Events,
    Dining,
}

impl InquiryType {
    pub const ALL: [Self; 4] = [Self::Booking, Self::General, Self::Events, Self::Dining];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Booking => "booking",
            Self::General => "general",
            Self::Events => "events",
            Self::Dining => "dining",
        }
    }
}

impl fmt::Display for InquiryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownInquiryType;

impl fmt::Display for UnknownInquiryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown inquiry type")
    }
}

impl std::error::Error for UnknownInquiryType {}

impl FromStr for InquiryType {
    type Err = UnknownInquiryType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|x| x.as_str() == s)
            .ok_or(UnknownInquiryType)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_numbers() {
        for (input, expected) in [
            ("+91 98765 43210", true),
            ("(022) 2345-6789", false),
            ("22 2345 6789", true),
            ("+1 (555) 123-4567", true),
            ("9876543210", true),
            ("+12345678901234567", false),
            ("1234567890123456", true),
            ("abc123", false),
            ("0123456789", false),
            ("+", false),
            ("", false),
        ] {
            assert_eq!(is_valid_phone_number(input), expected, "{input:?}");
        }
    }

    #[test]
    fn phone_number_is_trimmed() {
        let phone = PhoneNumber::try_new("  +91 98765 43210 ").unwrap();
        assert_eq!(phone.as_str(), "+91 98765 43210");
    }

    #[test]
    fn name_length_after_trim() {
        ContactName::try_new("  A  ").unwrap_err();
        ContactName::try_new("").unwrap_err();
        let name = ContactName::try_new("  Al ").unwrap();
        assert_eq!(name.as_str(), "Al");
    }

    #[test]
    fn message_length_after_trim() {
        ContactMessage::try_new("  123456789  ").unwrap_err();
        let message = ContactMessage::try_new("  1234567890  ").unwrap();
        assert_eq!(message.as_str(), "1234567890");
    }

    #[test]
    fn inquiry_type_wire_names() {
        for inquiry_type in InquiryType::ALL {
            let json = serde_json::to_value(inquiry_type).unwrap();
            assert_eq!(json, inquiry_type.as_str());
            assert_eq!(inquiry_type.as_str().parse(), Ok(inquiry_type));
        }
        assert_eq!("Booking".parse::<InquiryType>(), Err(UnknownInquiryType));
        assert_eq!("spa".parse::<InquiryType>(), Err(UnknownInquiryType));
        assert_eq!(InquiryType::default(), InquiryType::General);
    }
}
