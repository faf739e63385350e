use std::future::Future;

use shasha_models::contact::ContactSubmissionDraft;
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFeatureService: Send + Sync + 'static {
    /// Validate a contact form submission, then notify the hotel staff and
    /// send a confirmation to the guest.
    ///
    /// Submissions are not deduplicated: submitting the same draft twice
    /// sends both emails twice.
    fn submit(
        &self,
        draft: ContactSubmissionDraft,
    ) -> impl Future<Output = Result<ContactSubmitted, ContactSubmitError>> + Send;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactSubmitted {
    /// Whether the confirmation email reached the guest.
    pub confirmation_sent: bool,
}

#[derive(Debug, Error)]
pub enum ContactSubmitError {
    #[error("The submission is invalid.")]
    Validation(Vec<ContactValidationError>),
    #[error("Failed to send the notification email.")]
    Send,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// A single rule violation. The messages are part of the wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactValidationError {
    #[error("Invalid form data structure")]
    Structure,
    #[error("Name must be at least 2 characters long")]
    Name,
    #[error("Valid email address is required")]
    Email,
    #[error("Invalid phone number format")]
    Phone,
    #[error("Valid inquiry type is required")]
    InquiryType,
    #[error("Message must be at least 10 characters long")]
    Message,
}

#[cfg(feature = "mock")]
impl MockContactFeatureService {
    pub fn with_submit(
        mut self,
        draft: ContactSubmissionDraft,
        result: Result<ContactSubmitted, ContactSubmitError>,
    ) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(draft))
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }
}
