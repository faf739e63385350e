use std::collections::BTreeSet;

use serde::Serialize;
use shasha_models::contact::InquiryType;
use tracing::debug;

use crate::{
    api::SubmitOutcome,
    validate::{validate_field, validate_form, ContactField, ContactFormErrors},
};

pub const SUCCESS_FALLBACK_MESSAGE: &str = "Your message has been sent successfully!";
pub const ERROR_FALLBACK_MESSAGE: &str = "Failed to send message. Please try again.";
pub const NETWORK_ERROR_MESSAGE: &str =
    "Network error. Please check your connection and try again.";

/// The values of the contact form fields, serialized as the request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactFormData {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub inquiry_type: InquiryType,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success {
        message: String,
    },
    Error {
        message: String,
    },
}

/// State of the contact form, changed only through its transition methods.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    data: ContactFormData,
    errors: ContactFormErrors,
    touched: BTreeSet<ContactField>,
    status: SubmissionStatus,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(&self) -> &ContactFormData {
        &self.data
    }

    pub fn errors(&self) -> &ContactFormErrors {
        &self.errors
    }

    pub fn error(&self, field: ContactField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn is_touched(&self, field: ContactField) -> bool {
        self.touched.contains(&field)
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    /// Store a new field value. Unknown inquiry types leave the field unchanged.
    pub fn change(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.data.name = value,
            ContactField::Email => self.data.email = value,
            ContactField::Phone => self.data.phone = value,
            ContactField::Message => self.data.message = value,
            ContactField::InquiryType => match value.parse::<InquiryType>() {
                Ok(inquiry_type) => self.data.inquiry_type = inquiry_type,
                Err(err) => debug!(%value, %err, "ignoring unknown inquiry type"),
            },
        }

        self.errors.remove(&field);
        if self.is_touched(field) {
            self.revalidate(field);
        }
    }

    pub fn blur(&mut self, field: ContactField) {
        self.touched.insert(field);
        self.revalidate(field);
    }

    /// Validate all fields and, if they pass, switch to
    /// [`SubmissionStatus::Submitting`] and return the payload to send.
    pub fn begin_submit(&mut self) -> Option<ContactFormData> {
        if self.status == SubmissionStatus::Submitting {
            return None;
        }

        self.errors = validate_form(&self.data);
        if !self.errors.is_empty() {
            return None;
        }

        self.status = SubmissionStatus::Submitting;
        Some(self.data.clone())
    }

    pub fn finish_submit(&mut self, outcome: SubmitOutcome) {
        if self.status != SubmissionStatus::Submitting {
            debug!(?outcome, "ignoring outcome of a submission that is not in flight");
            return;
        }

        self.status = match outcome {
            SubmitOutcome::Accepted { message } => {
                self.data = ContactFormData::default();
                self.touched.clear();
                self.errors.clear();
                SubmissionStatus::Success {
                    message: message.unwrap_or_else(|| SUCCESS_FALLBACK_MESSAGE.into()),
                }
            }
            SubmitOutcome::Rejected { error, details } => {
                if let Some(details) = details {
                    self.errors = map_details(details);
                }
                SubmissionStatus::Error {
                    message: error.unwrap_or_else(|| ERROR_FALLBACK_MESSAGE.into()),
                }
            }
            SubmitOutcome::NetworkError => SubmissionStatus::Error {
                message: NETWORK_ERROR_MESSAGE.into(),
            },
        };
    }

    /// Hide the success or error banner.
    pub fn dismiss(&mut self) {
        if matches!(
            self.status,
            SubmissionStatus::Success { .. } | SubmissionStatus::Error { .. }
        ) {
            self.status = SubmissionStatus::Idle;
        }
    }

    fn revalidate(&mut self, field: ContactField) {
        match validate_field(&self.data, field) {
            Some(error) => self.errors.insert(field, error.into()),
            None => self.errors.remove(&field),
        };
    }
}

/// Assign server side messages to fields by keyword. A message may land on
/// several fields and later messages replace earlier ones.
fn map_details(details: Vec<String>) -> ContactFormErrors {
    const KEYWORDS: [(&str, ContactField); 4] = [
        ("Name", ContactField::Name),
        ("email", ContactField::Email),
        ("phone", ContactField::Phone),
        ("Message", ContactField::Message),
    ];

    let mut errors = ContactFormErrors::new();
    for detail in details {
        for (keyword, field) in KEYWORDS {
            if detail.contains(keyword) {
                errors.insert(field, detail.clone());
            }
        }
    }
    errors
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::validate::{EMAIL_ERROR, MESSAGE_ERROR, NAME_ERROR, PHONE_ERROR};

    #[test]
    fn change_clears_error_of_untouched_field() {
        // Arrange
        let mut sut = ContactForm::new();
        assert_eq!(sut.begin_submit(), None);
        assert_eq!(sut.error(ContactField::Name), Some(NAME_ERROR));

        // Act
        sut.change(ContactField::Name, "J");

        // Assert
        assert_eq!(sut.error(ContactField::Name), None);
        assert_eq!(sut.data().name, "J");
    }

    #[test]
    fn change_revalidates_touched_field() {
        // Arrange
        let mut sut = ContactForm::new();
        sut.blur(ContactField::Email);
        assert_eq!(sut.error(ContactField::Email), Some(EMAIL_ERROR));

        // Act
        sut.change(ContactField::Email, "jane@");
        let intermediate = sut.error(ContactField::Email).map(ToOwned::to_owned);
        sut.change(ContactField::Email, "jane@example.com");

        // Assert
        assert_eq!(intermediate.as_deref(), Some(EMAIL_ERROR));
        assert_eq!(sut.error(ContactField::Email), None);
    }

    #[test]
    fn blur_marks_touched_and_validates() {
        // Arrange
        let mut sut = ContactForm::new();
        sut.change(ContactField::Phone, "abc123");
        assert_eq!(sut.error(ContactField::Phone), None);

        // Act
        sut.blur(ContactField::Phone);

        // Assert
        assert!(sut.is_touched(ContactField::Phone));
        assert!(!sut.is_touched(ContactField::Name));
        assert_eq!(sut.error(ContactField::Phone), Some(PHONE_ERROR));
        assert_eq!(sut.error(ContactField::Name), None);
    }

    #[test]
    fn change_inquiry_type() {
        // Arrange
        let mut sut = ContactForm::new();

        // Act
        sut.change(ContactField::InquiryType, "events");
        sut.change(ContactField::InquiryType, "spa");

        // Assert
        assert_eq!(sut.data().inquiry_type, InquiryType::Events);
    }

    #[test]
    fn begin_submit_invalid() {
        // Arrange
        let mut sut = filled_form();
        sut.change(ContactField::Message, "Too short");

        // Act
        let result = sut.begin_submit();

        // Assert
        assert_eq!(result, None);
        assert_eq!(sut.status(), &SubmissionStatus::Idle);
        assert_eq!(
            sut.errors(),
            &[(ContactField::Message, MESSAGE_ERROR.into())].into()
        );
    }

    #[test]
    fn begin_submit_valid() {
        // Arrange
        let mut sut = filled_form();

        // Act
        let result = sut.begin_submit();

        // Assert
        assert_eq!(result.as_ref(), Some(sut.data()));
        assert_eq!(sut.status(), &SubmissionStatus::Submitting);
        assert_eq!(sut.begin_submit(), None);
    }

    #[test]
    fn accepted_resets_form() {
        // Arrange
        let mut sut = filled_form();
        sut.blur(ContactField::Name);
        sut.begin_submit().unwrap();

        // Act
        sut.finish_submit(SubmitOutcome::Accepted {
            message: Some("Thanks!".into()),
        });

        // Assert
        assert_eq!(
            sut.status(),
            &SubmissionStatus::Success {
                message: "Thanks!".into()
            }
        );
        assert_eq!(sut.data(), &ContactFormData::default());
        assert_eq!(sut.data().inquiry_type, InquiryType::General);
        assert!(!sut.is_touched(ContactField::Name));
        assert!(sut.errors().is_empty());
    }

    #[test]
    fn accepted_without_message() {
        // Arrange
        let mut sut = filled_form();
        sut.begin_submit().unwrap();

        // Act
        sut.finish_submit(SubmitOutcome::Accepted { message: None });

        // Assert
        assert_eq!(
            sut.status(),
            &SubmissionStatus::Success {
                message: SUCCESS_FALLBACK_MESSAGE.into()
            }
        );
    }

    #[test]
    fn rejected_maps_details_to_fields() {
        // Arrange
        let mut sut = filled_form();
        let data = sut.data().clone();
        sut.begin_submit().unwrap();

        // Act
        sut.finish_submit(SubmitOutcome::Rejected {
            error: Some("Validation failed".into()),
            details: Some(vec![
                "Name must be at least 2 characters long".into(),
                "Valid email address is required".into(),
                "Invalid phone number format".into(),
                "Valid inquiry type is required".into(),
                "Message must be at least 10 characters long".into(),
            ]),
        });

        // Assert
        assert_eq!(
            sut.status(),
            &SubmissionStatus::Error {
                message: "Validation failed".into()
            }
        );
        assert_eq!(sut.data(), &data);
        assert_eq!(
            sut.errors(),
            &[
                (
                    ContactField::Name,
                    "Name must be at least 2 characters long".into()
                ),
                (ContactField::Email, "Valid email address is required".into()),
                (ContactField::Phone, "Invalid phone number format".into()),
                (
                    ContactField::Message,
                    "Message must be at least 10 characters long".into()
                ),
            ]
            .into()
        );
    }

    #[test]
    fn rejected_detail_matching_several_fields() {
        // Arrange
        let mut sut = filled_form();
        sut.begin_submit().unwrap();

        // Act
        sut.finish_submit(SubmitOutcome::Rejected {
            error: None,
            details: Some(vec![
                "Name and email do not match".into(),
                "Name is taken".into(),
            ]),
        });

        // Assert
        assert_eq!(
            sut.status(),
            &SubmissionStatus::Error {
                message: ERROR_FALLBACK_MESSAGE.into()
            }
        );
        assert_eq!(
            sut.errors(),
            &[
                (ContactField::Name, "Name is taken".into()),
                (ContactField::Email, "Name and email do not match".into()),
            ]
            .into()
        );
    }

    #[test]
    fn network_error() {
        // Arrange
        let mut sut = filled_form();
        sut.begin_submit().unwrap();

        // Act
        sut.finish_submit(SubmitOutcome::NetworkError);

        // Assert
        assert_eq!(
            sut.status(),
            &SubmissionStatus::Error {
                message: NETWORK_ERROR_MESSAGE.into()
            }
        );
        assert!(sut.errors().is_empty());
    }

    #[test]
    fn outcome_without_submission_is_ignored() {
        // Arrange
        let mut sut = filled_form();
        let expected = sut.clone();

        // Act
        sut.finish_submit(SubmitOutcome::Accepted { message: None });

        // Assert
        assert_eq!(sut, expected);
    }

    #[test]
    fn dismiss() {
        // Arrange
        let mut sut = filled_form();
        sut.begin_submit().unwrap();

        // Act
        sut.dismiss();
        let while_submitting = sut.status().clone();
        sut.finish_submit(SubmitOutcome::NetworkError);
        sut.dismiss();

        // Assert
        assert_eq!(while_submitting, SubmissionStatus::Submitting);
        assert_eq!(sut.status(), &SubmissionStatus::Idle);
    }

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();
        form.change(ContactField::Name, "Jane Doe");
        form.change(ContactField::Email, "jane@example.com");
        form.change(ContactField::InquiryType, "booking");
        form.change(
            ContactField::Message,
            "Two rooms for the first weekend of May.",
        );
        form
    }
}
