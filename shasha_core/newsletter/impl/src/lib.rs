use shasha_core_newsletter_contracts::{NewsletterFeatureService, NewsletterSubscribeError};
use shasha_email_contracts::template::TemplateEmailService;
use shasha_models::{
    email_address::EmailAddress,
    newsletter::{NewsletterSubscription, NewsletterSubscriptionDraft},
};
use shasha_templates_contracts::NewsletterWelcomeTemplate;
use tracing::{error, info};

#[derive(Debug, Clone)]
pub struct NewsletterFeatureServiceImpl<TemplateEmail> {
    template_email: TemplateEmail,
}

impl<TemplateEmail> NewsletterFeatureServiceImpl<TemplateEmail> {
    pub fn new(template_email: TemplateEmail) -> Self {
        Self { template_email }
    }
}

impl<TemplateEmail> NewsletterFeatureService for NewsletterFeatureServiceImpl<TemplateEmail>
where
    TemplateEmail: TemplateEmailService,
{
    async fn subscribe(
        &self,
        draft: NewsletterSubscriptionDraft,
    ) -> Result<(), NewsletterSubscribeError> {
        let NewsletterSubscription { email } = draft
            .email
            .into_text()
            .and_then(|x| EmailAddress::try_new(x).ok())
            .map(|email| NewsletterSubscription { email })
            .ok_or(NewsletterSubscribeError::InvalidEmail)?;

        let data = NewsletterWelcomeTemplate {
            email: email.as_str().into(),
        };

        match self
            .template_email
            .send_newsletter_welcome_email(email.into(), &data)
            .await
        {
            Ok(true) => {
                info!("newsletter subscription confirmed");
                Ok(())
            }
            Ok(false) => {
                error!("Newsletter welcome email was not accepted");
                Err(NewsletterSubscribeError::Send)
            }
            Err(err) => {
                error!("Failed to send newsletter welcome email: {err:#}");
                Err(NewsletterSubscribeError::Send)
            }
        }
    }
}
