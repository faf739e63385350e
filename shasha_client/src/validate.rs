use std::collections::BTreeMap;

use shasha_models::{contact::is_valid_phone_number, email_address::is_valid_email_address};

use crate::form::ContactFormData;

pub const NAME_ERROR: &str = "Name must be at least 2 characters";
pub const EMAIL_ERROR: &str = "Please enter a valid email address";
pub const PHONE_ERROR: &str = "Please enter a valid phone number";
pub const MESSAGE_ERROR: &str = "Message must be at least 10 characters";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    InquiryType,
    Message,
}

impl ContactField {
    pub const ALL: [Self; 5] = [
        Self::Name,
        Self::Email,
        Self::Phone,
        Self::InquiryType,
        Self::Message,
    ];
}

/// Error messages by field. Empty means the form is valid.
pub type ContactFormErrors = BTreeMap<ContactField, String>;

pub fn validate_form(data: &ContactFormData) -> ContactFormErrors {
    ContactField::ALL
        .into_iter()
        .filter_map(|field| validate_field(data, field).map(|error| (field, error.into())))
        .collect()
}

pub fn validate_field(data: &ContactFormData, field: ContactField) -> Option<&'static str> {
    match field {
        ContactField::Name => (data.name.trim().chars().count() < 2).then_some(NAME_ERROR),
        ContactField::Email => (!is_valid_email_address(&data.email)).then_some(EMAIL_ERROR),
        ContactField::Phone => (!data.phone.is_empty() && !is_valid_phone_number(&data.phone))
            .then_some(PHONE_ERROR),
        // constrained by the type
        ContactField::InquiryType => None,
        ContactField::Message => {
            (data.message.trim().chars().count() < 10).then_some(MESSAGE_ERROR)
        }
    }
}

pub fn validate_newsletter_email(email: &str) -> Option<&'static str> {
    (!is_valid_email_address(email)).then_some(EMAIL_ERROR)
}
