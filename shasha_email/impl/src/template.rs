use shasha_email_contracts::{template::TemplateEmailService, ContentType, Email, EmailService};
use shasha_models::email_address::Mailbox;
use shasha_templates_contracts::{
    ContactConfirmationTemplate, ContactNotificationTemplate, NewsletterWelcomeTemplate,
    Template, TemplateService,
};

#[derive(Debug, Clone)]
pub struct TemplateEmailServiceImpl<Email, Template> {
    email: Email,
    template: Template,
}

impl<EmailS, TemplateS> TemplateEmailServiceImpl<EmailS, TemplateS> {
    pub fn new(email: EmailS, template: TemplateS) -> Self {
        Self { email, template }
    }
}

impl<EmailS, TemplateS> TemplateEmailServiceImpl<EmailS, TemplateS>
where
    TemplateS: TemplateService,
{
    fn make_email<T: Template + 'static>(
        &self,
        recipient: Mailbox,
        reply_to: Option<Mailbox>,
        subject: String,
        data: &T,
    ) -> anyhow::Result<Email> {
        Ok(Email {
            recipient,
            subject,
            body: self.template.render(data)?,
            content_type: ContentType::Text,
            reply_to,
        })
    }
}

impl<EmailS, TemplateS> TemplateEmailService for TemplateEmailServiceImpl<EmailS, TemplateS>
where
    EmailS: EmailService,
    TemplateS: TemplateService,
{
    async fn send_contact_notification_email(
        &self,
        recipient: Mailbox,
        reply_to: Mailbox,
        data: &ContactNotificationTemplate,
    ) -> anyhow::Result<bool> {
        let subject = format!("New {} inquiry from {}", data.inquiry_type, data.name);
        let email = self.make_email(recipient, Some(reply_to), subject, data)?;
        self.email.send(email).await
    }

    async fn send_contact_confirmation_email(
        &self,
        recipient: Mailbox,
        data: &ContactConfirmationTemplate,
    ) -> anyhow::Result<bool> {
        let subject = "Thank you for contacting Hotel Shasha".into();
        let email = self.make_email(recipient, None, subject, data)?;
        self.email.send(email).await
    }

    async fn send_newsletter_welcome_email(
        &self,
        recipient: Mailbox,
        data: &NewsletterWelcomeTemplate,
    ) -> anyhow::Result<bool> {
        let subject = "Welcome to the Hotel Shasha newsletter".into();
        let email = self.make_email(recipient, None, subject, data)?;
        self.email.send(email).await
    }
}

#[cfg(test)]
mod tests {
    use shasha_email_contracts::MockEmailService;
    use shasha_models::email_address::EmailAddress;
    use shasha_templates_contracts::MockTemplateService;

    use super::*;

    fn admin() -> Mailbox {
        EmailAddress::try_new("admin@hotelshasha.com").unwrap().into()
    }

    fn guest() -> Mailbox {
        EmailAddress::try_new("asha@example.com")
            .unwrap()
            .with_name("Asha Rao")
    }

    #[tokio::test]
    async fn contact_notification() {
        // Arrange
        let data = ContactNotificationTemplate {
            name: "Asha Rao".into(),
            email: "asha@example.com".into(),
            phone: None,
            inquiry_type: "events".into(),
            message: "We would like to host a small wedding.".into(),
        };

        let template = MockTemplateService::new().with_render(data.clone(), "rendered".into());

        let email = MockEmailService::new().with_send(
            Email {
                recipient: admin(),
                subject: "New events inquiry from Asha Rao".into(),
                body: "rendered".into(),
                content_type: ContentType::Text,
                reply_to: Some(guest()),
            },
            true,
        );

        let sut = TemplateEmailServiceImpl { email, template };

        // Act
        let result = sut
            .send_contact_notification_email(admin(), guest(), &data)
            .await;

        // Assert
        assert!(result.unwrap());
    }

    #[tokio::test]
    async fn contact_confirmation_rejected() {
        // Arrange
        let data = ContactConfirmationTemplate {
            name: "Asha Rao".into(),
        };

        let template = MockTemplateService::new().with_render(data.clone(), "rendered".into());

        let email = MockEmailService::new().with_send(
            Email {
                recipient: guest(),
                subject: "Thank you for contacting Hotel Shasha".into(),
                body: "rendered".into(),
                content_type: ContentType::Text,
                reply_to: None,
            },
            false,
        );

        let sut = TemplateEmailServiceImpl { email, template };

        // Act
        let result = sut.send_contact_confirmation_email(guest(), &data).await;

        // Assert
        assert!(!result.unwrap());
    }

    #[tokio::test]
    async fn newsletter_welcome() {
        // Arrange
        let data = NewsletterWelcomeTemplate {
            email: "asha@example.com".into(),
        };

        let template = MockTemplateService::new().with_render(data.clone(), "rendered".into());

        let recipient: Mailbox = EmailAddress::try_new("asha@example.com").unwrap().into();
        let email = MockEmailService::new().with_send(
            Email {
                recipient: recipient.clone(),
                subject: "Welcome to the Hotel Shasha newsletter".into(),
                body: "rendered".into(),
                content_type: ContentType::Text,
                reply_to: None,
            },
            true,
        );

        let sut = TemplateEmailServiceImpl { email, template };

        // Act
        let result = sut.send_newsletter_welcome_email(recipient, &data).await;

        // Assert
        assert!(result.unwrap());
    }
}
