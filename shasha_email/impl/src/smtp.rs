use anyhow::anyhow;
use lettre::{message::header, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use shasha_email_contracts::{ContentType, Email, EmailService};
use shasha_models::email_address::Mailbox;

#[derive(Debug, Clone)]
pub struct SmtpEmailService {
    from: Mailbox,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpEmailService {
    pub fn new(url: &str, from: Mailbox) -> anyhow::Result<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::from_url(url)?.build();

        Ok(Self { from, transport })
    }
}

impl EmailService for SmtpEmailService {
    async fn send(&self, email: Email) -> anyhow::Result<bool> {
        let mut builder = Message::builder()
            .from(to_lettre_mailbox(&self.from)?)
            .to(to_lettre_mailbox(&email.recipient)?);
        if let Some(reply_to) = &email.reply_to {
            builder = builder.reply_to(to_lettre_mailbox(reply_to)?);
        }

        let message = builder
            .subject(email.subject)
            .header(match email.content_type {
                ContentType::Text => header::ContentType::TEXT_PLAIN,
                ContentType::Html => header::ContentType::TEXT_HTML,
            })
            .body(email.body)?;

        self.transport
            .send(message)
            .await
            .map(|response| response.is_positive())
            .map_err(Into::into)
    }

    async fn ping(&self) -> anyhow::Result<()> {
        self.transport
            .test_connection()
            .await?
            .then_some(())
            .ok_or_else(|| anyhow!("Failed to ping smtp server"))
    }
}

/// Our addresses only pass a loose pattern, so lettre may still reject them here.
fn to_lettre_mailbox(mailbox: &Mailbox) -> anyhow::Result<lettre::message::Mailbox> {
    Ok(lettre::message::Mailbox::new(
        mailbox.name.clone(),
        mailbox.email.as_str().parse()?,
    ))
}
