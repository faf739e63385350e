use anyhow::Context;
use shasha_config::{EmailConfig, EmailTransport};
use shasha_email_impl::{
    EmailServiceImpl, SimulatedEmailConfig, SimulatedEmailService, SmtpEmailService,
};
use shasha_models::email_address::Mailbox;

/// Set up the configured email transport
pub fn connect(config: &EmailConfig) -> anyhow::Result<EmailServiceImpl> {
    let from = Mailbox {
        name: config.from_name.clone(),
        email: config.from.clone(),
    };

    match config.transport {
        EmailTransport::Smtp => {
            let url = config
                .smtp_url
                .as_deref()
                .context("email.smtp_url is required for the smtp transport")?;
            SmtpEmailService::new(url, from)
                .context("Failed to connect to SMTP server")
                .map(Into::into)
        }
        EmailTransport::Simulated => SimulatedEmailService::new(
            from,
            SimulatedEmailConfig {
                delay: config.simulated.delay.into(),
                failure_rate: config.simulated.failure_rate,
            },
        )
        .context("Invalid simulated email config")
        .map(Into::into),
    }
}
