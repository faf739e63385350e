use anyhow::{ensure, Context};
use clap::Subcommand;
use shasha_config::Config;
use shasha_email_contracts::{ContentType, Email, EmailService};
use shasha_models::email_address::EmailAddress;

use crate::email;

#[derive(Debug, Subcommand)]
pub enum EmailCommand {
    /// Test email deliverability
    Test { recipient: String },
}

impl EmailCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            EmailCommand::Test { recipient } => test(config, recipient).await,
        }
    }
}

async fn test(config: Config, recipient: String) -> anyhow::Result<()> {
    let recipient = EmailAddress::try_new(recipient).context("Invalid recipient")?;
    let email_service = email::connect(&config.email)?;

    let ok = email_service
        .send(Email {
            recipient: recipient.into(),
            subject: "Email Deliverability Test".into(),
            body: "Email deliverability seems to be working!".into(),
            content_type: ContentType::Text,
            reply_to: None,
        })
        .await?;

    ensure!(ok, "Failed to send email");

    Ok(())
}
