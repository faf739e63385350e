//! Stand-in transport that only logs what would have been sent.

use std::time::Duration;

use anyhow::ensure;
use rand::{thread_rng, Rng};
use shasha_email_contracts::{Email, EmailService};
use shasha_models::email_address::Mailbox;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct SimulatedEmailService {
    from: Mailbox,
    config: SimulatedEmailConfig,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulatedEmailConfig {
    /// Artificial latency of every send.
    pub delay: Duration,
    /// Probability in `[0, 1]` that a send is reported as failed.
    pub failure_rate: f64,
}

impl SimulatedEmailService {
    pub fn new(from: Mailbox, config: SimulatedEmailConfig) -> anyhow::Result<Self> {
        ensure!(
            (0.0..=1.0).contains(&config.failure_rate),
            "Simulated email failure rate must be between 0 and 1, got {}",
            config.failure_rate
        );

        Ok(Self { from, config })
    }
}

impl EmailService for SimulatedEmailService {
    async fn send(&self, email: Email) -> anyhow::Result<bool> {
        tokio::time::sleep(self.config.delay).await;

        info!(
            from = %self.from,
            to = %email.recipient,
            reply_to = email.reply_to.as_ref().map(tracing::field::display),
            subject = %email.subject,
            content_type = ?email.content_type,
            body = %email.body,
            "simulated email dispatch"
        );

        let failed = thread_rng().gen_bool(self.config.failure_rate);
        if failed {
            warn!(to = %email.recipient, subject = %email.subject, "simulated email transport failure");
        }

        Ok(!failed)
    }

    async fn ping(&self) -> anyhow::Result<()> {
        Ok(())
    }
}
