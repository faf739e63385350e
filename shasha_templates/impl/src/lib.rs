use std::sync::Arc;

use anyhow::Context;
use shasha_templates_contracts::{Template, TemplateService, SIGNATURE_TEMPLATE, TEMPLATES};
use tera::Tera;
use tracing::trace;

#[derive(Debug, Clone)]
pub struct TemplateServiceImpl {
    tera: Arc<Tera>,
}

impl TemplateServiceImpl {
    /// Compile all email templates.
    pub fn new() -> anyhow::Result<Self> {
        let mut tera = Tera::default();

        tera.add_raw_template("signature", SIGNATURE_TEMPLATE)
            .context("Failed to compile signature template")?;

        for &(name, template) in TEMPLATES {
            tera.add_raw_template(name, template)
                .with_context(|| format!("Failed to compile template {name}"))?;
        }

        Ok(Self { tera: tera.into() })
    }
}

impl TemplateService for TemplateServiceImpl {
    fn render<T: Template>(&self, template: &T) -> anyhow::Result<String> {
        trace!(template = T::NAME, "render");
        let context = tera::Context::from_serialize(template)?;
        self.tera.render(T::NAME, &context).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use shasha_templates_contracts::{
        ContactConfirmationTemplate, ContactNotificationTemplate, NewsletterWelcomeTemplate,
    };

    use super::*;

    fn notification(phone: Option<&str>) -> ContactNotificationTemplate {
        ContactNotificationTemplate {
            name: "Asha Rao".into(),
            email: "asha@example.com".into(),
            phone: phone.map(Into::into),
            inquiry_type: "booking".into(),
            message: "Do you have a lake view room for two nights?".into(),
        }
    }

    #[test]
    fn contact_notification() {
        // Arrange
        let sut = TemplateServiceImpl::new().unwrap();

        // Act
        let result = sut.render(&notification(Some("+91 98765 43210"))).unwrap();

        // Assert
        assert!(result.starts_with("New booking inquiry from Asha Rao\n"));
        assert!(result.contains("Email: asha@example.com\n"));
        assert!(result.contains("Phone: +91 98765 43210\n"));
        assert!(result.contains("Inquiry Type: booking\n"));
        assert!(result.contains("Do you have a lake view room for two nights?"));
    }

    #[test]
    fn contact_notification_without_phone() {
        // Arrange
        let sut = TemplateServiceImpl::new().unwrap();

        // Act
        let result = sut.render(&notification(None)).unwrap();

        // Assert
        assert!(result.contains("Phone: Not provided\n"));
    }

    #[test]
    fn contact_confirmation() {
        // Arrange
        let sut = TemplateServiceImpl::new().unwrap();

        // Act
        let result = sut
            .render(&ContactConfirmationTemplate {
                name: "Asha Rao".into(),
            })
            .unwrap();

        // Assert
        assert!(result.starts_with("Dear Asha Rao,\n"));
        assert!(result.contains("respond within 24 hours"));
        assert!(result.contains("Hotel Shasha Team"));
    }

    #[test]
    fn newsletter_welcome() {
        // Arrange
        let sut = TemplateServiceImpl::new().unwrap();

        // Act
        let result = sut
            .render(&NewsletterWelcomeTemplate {
                email: "asha@example.com".into(),
            })
            .unwrap();

        // Assert
        assert!(result.contains("asha@example.com"));
        assert!(result.contains("Hotel Shasha Team"));
    }

    #[test]
    fn no_html_escaping() {
        // Arrange
        let sut = TemplateServiceImpl::new().unwrap();

        // Act
        let result = sut
            .render(&ContactConfirmationTemplate {
                name: "Tom & Jerry".into(),
            })
            .unwrap();

        // Assert
        assert!(result.starts_with("Dear Tom & Jerry,\n"));
    }
}
