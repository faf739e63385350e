use serde::Serialize;
use serde_json::Value;
use shasha_models::contact::ContactSubmissionDraft;

use super::{object_with_fields, take_field};

const REQUIRED_FIELDS: &[&str] = &["name", "email", "inquiryType", "message"];

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiContactSubmitted {
    pub success: bool,
    pub message: &'static str,
    pub confirmation_sent: bool,
}

/// Returns `None` if the body does not have the shape of a contact form.
pub fn parse_contact_draft(body: Value) -> Option<ContactSubmissionDraft> {
    let mut fields = object_with_fields(body, REQUIRED_FIELDS)?;
    Some(ContactSubmissionDraft {
        name: take_field(&mut fields, "name"),
        email: take_field(&mut fields, "email"),
        phone: take_field(&mut fields, "phone"),
        inquiry_type: take_field(&mut fields, "inquiryType"),
        message: take_field(&mut fields, "message"),
    })
}
