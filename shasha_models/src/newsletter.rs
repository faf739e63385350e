use crate::{contact::FieldValue, email_address::EmailAddress};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsletterSubscription {
    pub email: EmailAddress,
}

/// Newsletter signup as it arrived over the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsletterSubscriptionDraft {
    pub email: FieldValue,
}
