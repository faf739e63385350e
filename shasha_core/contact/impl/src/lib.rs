use std::sync::Arc;

use shasha_core_contact_contracts::{ContactFeatureService, ContactSubmitError, ContactSubmitted};
use shasha_email_contracts::template::TemplateEmailService;
use shasha_models::{contact::ContactSubmissionDraft, email_address::Mailbox};
use shasha_templates_contracts::{ContactConfirmationTemplate, ContactNotificationTemplate};
use tracing::{debug, error, info, warn};

pub use validate::validate;

mod validate;

#[derive(Debug, Clone)]
pub struct ContactFeatureServiceImpl<TemplateEmail> {
    template_email: TemplateEmail,
    config: ContactFeatureConfig,
}

#[derive(Debug, Clone)]
pub struct ContactFeatureConfig {
    /// Recipient of the staff notification.
    pub admin_email: Arc<Mailbox>,
}

impl<TemplateEmail> ContactFeatureServiceImpl<TemplateEmail> {
    pub fn new(template_email: TemplateEmail, config: ContactFeatureConfig) -> Self {
        Self {
            template_email,
            config,
        }
    }
}

impl<TemplateEmail> ContactFeatureService for ContactFeatureServiceImpl<TemplateEmail>
where
    TemplateEmail: TemplateEmailService,
{
    async fn submit(
        &self,
        draft: ContactSubmissionDraft,
    ) -> Result<ContactSubmitted, ContactSubmitError> {
        let submission = validate(draft).map_err(|errors| {
            debug!(?errors, "rejecting invalid contact submission");
            ContactSubmitError::Validation(errors)
        })?;

        let inquiry_type = submission.inquiry_type;
        let guest = submission
            .email
            .clone()
            .with_name(submission.name.clone().into_inner());

        let notification = ContactNotificationTemplate {
            name: submission.name.clone().into_inner(),
            email: submission.email.into_inner(),
            phone: submission.phone.map(|x| x.into_inner()),
            inquiry_type: inquiry_type.to_string(),
            message: submission.message.into_inner(),
        };
        let confirmation = ContactConfirmationTemplate {
            name: submission.name.into_inner(),
        };

        let (notified, confirmed) = tokio::join!(
            self.template_email.send_contact_notification_email(
                (*self.config.admin_email).clone(),
                guest.clone(),
                &notification,
            ),
            self.template_email
                .send_contact_confirmation_email(guest, &confirmation),
        );

        let confirmation_sent = match confirmed {
            Ok(sent) => sent,
            Err(err) => {
                warn!(%inquiry_type, "Failed to send contact confirmation email: {err:#}");
                false
            }
        };

        match notified {
            Ok(true) => {}
            Ok(false) => {
                error!(%inquiry_type, "Contact notification email was not accepted");
                return Err(ContactSubmitError::Send);
            }
            Err(err) => {
                error!(%inquiry_type, "Failed to send contact notification email: {err:#}");
                return Err(ContactSubmitError::Send);
            }
        }

        info!(%inquiry_type, confirmation_sent, "contact submission dispatched");

        Ok(ContactSubmitted { confirmation_sent })
    }
}
