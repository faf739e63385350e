use shasha_core_contact_contracts::ContactValidationError;
use shasha_models::{
    contact::{
        ContactMessage, ContactName, ContactSubmission, ContactSubmissionDraft, FieldValue,
        InquiryType, PhoneNumber,
    },
    email_address::EmailAddress,
};

/// Check every field of the draft and collect all violations, in field order.
///
/// On success the submission is normalized: name, message and phone are
/// trimmed, the email address is lowercased and a blank phone is dropped.
pub fn validate(
    draft: ContactSubmissionDraft,
) -> Result<ContactSubmission, Vec<ContactValidationError>> {
    let mut errors = Vec::new();

    let name = check(
        &mut errors,
        ContactValidationError::Name,
        draft
            .name
            .into_text()
            .and_then(|x| ContactName::try_new(x).ok()),
    );
    let email = check(
        &mut errors,
        ContactValidationError::Email,
        draft
            .email
            .into_text()
            .and_then(|x| EmailAddress::try_new(x).ok()),
    );
    let phone = check(
        &mut errors,
        ContactValidationError::Phone,
        validate_phone(draft.phone),
    );
    let inquiry_type = check(
        &mut errors,
        ContactValidationError::InquiryType,
        draft.inquiry_type.into_text().and_then(|x| x.parse::<InquiryType>().ok()),
    );
    let message = check(
        &mut errors,
        ContactValidationError::Message,
        draft
            .message
            .into_text()
            .and_then(|x| ContactMessage::try_new(x).ok()),
    );

    let (Some(name), Some(email), Some(phone), Some(inquiry_type), Some(message)) =
        (name, email, phone, inquiry_type, message)
    else {
        return Err(errors);
    };

    Ok(ContactSubmission {
        name,
        email,
        phone,
        inquiry_type,
        message,
    })
}

fn check<T>(
    errors: &mut Vec<ContactValidationError>,
    error: ContactValidationError,
    value: Option<T>,
) -> Option<T> {
    if value.is_none() {
        errors.push(error);
    }
    value
}

/// `Some(None)` if no phone number was given, `None` if the given one is invalid.
fn validate_phone(phone: FieldValue) -> Option<Option<PhoneNumber>> {
    match phone {
        FieldValue::Absent => Some(None),
        FieldValue::Text(phone) if phone.trim().is_empty() => Some(None),
        FieldValue::Text(phone) => PhoneNumber::try_new(phone).ok().map(Some),
        FieldValue::Malformed => None,
    }
}
