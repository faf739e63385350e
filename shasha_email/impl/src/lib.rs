use shasha_email_contracts::{Email, EmailService};

pub use self::{
    simulated::{SimulatedEmailConfig, SimulatedEmailService},
    smtp::SmtpEmailService,
};

pub mod simulated;
pub mod smtp;
pub mod template;

/// The email transport selected by configuration.
#[derive(Debug, Clone)]
pub enum EmailServiceImpl {
    Smtp(SmtpEmailService),
    Simulated(SimulatedEmailService),
}

impl From<SmtpEmailService> for EmailServiceImpl {
    fn from(value: SmtpEmailService) -> Self {
        Self::Smtp(value)
    }
}

impl From<SimulatedEmailService> for EmailServiceImpl {
    fn from(value: SimulatedEmailService) -> Self {
        Self::Simulated(value)
    }
}

impl EmailService for EmailServiceImpl {
    async fn send(&self, email: Email) -> anyhow::Result<bool> {
        match self {
            Self::Smtp(smtp) => smtp.send(email).await,
            Self::Simulated(simulated) => simulated.send(email).await,
        }
    }

    async fn ping(&self) -> anyhow::Result<()> {
        match self {
            Self::Smtp(smtp) => smtp.ping().await,
            Self::Simulated(simulated) => simulated.ping().await,
        }
    }
}
