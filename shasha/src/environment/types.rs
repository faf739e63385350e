use shasha_core_contact_impl::ContactFeatureServiceImpl;
use shasha_core_health_impl::HealthFeatureServiceImpl;
use shasha_core_newsletter_impl::NewsletterFeatureServiceImpl;
use shasha_email_impl::{template::TemplateEmailServiceImpl, EmailServiceImpl};
use shasha_templates_impl::TemplateServiceImpl;

// API
pub type RestServer =
    shasha_api_rest::RestServer<HealthFeature, ContactFeature, NewsletterFeature>;

// Email
pub type Email = EmailServiceImpl;
pub type TemplateEmail = TemplateEmailServiceImpl<Email, Template>;

// Templates
pub type Template = TemplateServiceImpl;

// Core
pub type HealthFeature = HealthFeatureServiceImpl<Email>;
pub type ContactFeature = ContactFeatureServiceImpl<TemplateEmail>;
pub type NewsletterFeature = NewsletterFeatureServiceImpl<TemplateEmail>;
