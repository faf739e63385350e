use std::future::Future;

use shasha_models::email_address::Mailbox;
use shasha_templates_contracts::{
    ContactConfirmationTemplate, ContactNotificationTemplate, NewsletterWelcomeTemplate,
};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait TemplateEmailService: Send + Sync + 'static {
    /// Notify the hotel staff about a new inquiry. Replies go to the guest.
    fn send_contact_notification_email(
        &self,
        recipient: Mailbox,
        reply_to: Mailbox,
        data: &ContactNotificationTemplate,
    ) -> impl Future<Output = anyhow::Result<bool>> + Send;

    fn send_contact_confirmation_email(
        &self,
        recipient: Mailbox,
        data: &ContactConfirmationTemplate,
    ) -> impl Future<Output = anyhow::Result<bool>> + Send;

    fn send_newsletter_welcome_email(
        &self,
        recipient: Mailbox,
        data: &NewsletterWelcomeTemplate,
    ) -> impl Future<Output = anyhow::Result<bool>> + Send;
}

#[cfg(feature = "mock")]
impl MockTemplateEmailService {
    pub fn with_send_contact_notification_email(
        mut self,
        recipient: Mailbox,
        reply_to: Mailbox,
        data: ContactNotificationTemplate,
        result: anyhow::Result<bool>,
    ) -> Self {
        self.expect_send_contact_notification_email()
            .once()
            .with(
                mockall::predicate::eq(recipient),
                mockall::predicate::eq(reply_to),
                mockall::predicate::eq(data),
            )
            .return_once(move |_, _, _| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_send_contact_confirmation_email(
        mut self,
        recipient: Mailbox,
        data: ContactConfirmationTemplate,
        result: anyhow::Result<bool>,
    ) -> Self {
        self.expect_send_contact_confirmation_email()
            .once()
            .with(
                mockall::predicate::eq(recipient),
                mockall::predicate::eq(data),
            )
            .return_once(move |_, _| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_send_newsletter_welcome_email(
        mut self,
        recipient: Mailbox,
        data: NewsletterWelcomeTemplate,
        result: anyhow::Result<bool>,
    ) -> Self {
        self.expect_send_newsletter_welcome_email()
            .once()
            .with(
                mockall::predicate::eq(recipient),
                mockall::predicate::eq(data),
            )
            .return_once(move |_, _| Box::pin(std::future::ready(result)));
        self
    }
}
