use serde_json::Value;
use shasha_models::newsletter::NewsletterSubscriptionDraft;

use super::{object_with_fields, take_field};

pub fn parse_newsletter_draft(body: Value) -> Option<NewsletterSubscriptionDraft> {
    let mut fields = object_with_fields(body, &["email"])?;
    Some(NewsletterSubscriptionDraft {
        email: take_field(&mut fields, "email"),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use shasha_models::contact::FieldValue;

    use super::*;

    #[test]
    fn ok() {
        assert_eq!(
            parse_newsletter_draft(json!({"email": "jane@example.com"})),
            Some(NewsletterSubscriptionDraft {
                email: "jane@example.com".into()
            })
        );
        assert_eq!(
            parse_newsletter_draft(json!({"email": 7})),
            Some(NewsletterSubscriptionDraft {
                email: FieldValue::Malformed
            })
        );
    }

    #[test]
    fn invalid_structure() {
        for body in [json!({}), json!({"email": null}), json!("jane@example.com")] {
            assert_eq!(parse_newsletter_draft(body), None);
        }
    }
}
