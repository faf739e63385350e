use std::sync::Arc;

use shasha_api_rest::RestServerConfig;
use shasha_config::Config;
use shasha_core_contact_impl::{ContactFeatureConfig, ContactFeatureServiceImpl};
use shasha_core_health_impl::{HealthFeatureConfig, HealthFeatureServiceImpl};
use shasha_core_newsletter_impl::NewsletterFeatureServiceImpl;
use shasha_email_impl::template::TemplateEmailServiceImpl;
use shasha_models::email_address::Mailbox;
use shasha_templates_impl::TemplateServiceImpl;
use types::{Email, RestServer};

pub mod types;

/// Wires the services together
#[derive(Debug, Clone)]
pub struct Provider {
    config: ConfigProvider,
    email: Email,
}

impl Provider {
    pub fn new(config: ConfigProvider, email: Email) -> Self {
        Self { config, email }
    }

    pub fn rest_server(&self) -> anyhow::Result<RestServer> {
        let template = TemplateServiceImpl::new()?;
        let template_email = TemplateEmailServiceImpl::new(self.email.clone(), template);

        let health = HealthFeatureServiceImpl::new(
            self.email.clone(),
            self.config.health_feature_config.clone(),
        );
        let contact = ContactFeatureServiceImpl::new(
            template_email.clone(),
            self.config.contact_feature_config.clone(),
        );
        let newsletter = NewsletterFeatureServiceImpl::new(template_email);

        Ok(RestServer::new(
            health,
            contact,
            newsletter,
            self.config.rest_server_config,
        ))
    }
}

/// The parts of the configuration the services need
#[derive(Debug, Clone)]
pub struct ConfigProvider {
    rest_server_config: RestServerConfig,
    contact_feature_config: ContactFeatureConfig,
    health_feature_config: HealthFeatureConfig,
}

impl ConfigProvider {
    pub fn new(config: &Config) -> Self {
        let rest_server_config = RestServerConfig {
            host: config.http.host,
            port: config.http.port,
        };

        let contact_feature_config = ContactFeatureConfig {
            admin_email: Arc::new(Mailbox {
                name: config.contact.admin_name.clone(),
                email: config.contact.admin_email.clone(),
            }),
        };

        let health_feature_config = HealthFeatureConfig {
            cache_ttl: config.health.cache_ttl.into(),
        };

        Self {
            rest_server_config,
            contact_feature_config,
            health_feature_config,
        }
    }
}
