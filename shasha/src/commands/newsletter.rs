use anyhow::bail;
use clap::Subcommand;
use shasha_client::{
    api::{ApiClient, SubmitOutcome},
    form::{ERROR_FALLBACK_MESSAGE, NETWORK_ERROR_MESSAGE},
    validate::validate_newsletter_email,
};
use shasha_config::Config;
use url::Url;

#[derive(Debug, Subcommand)]
pub enum NewsletterCommand {
    /// Subscribe an email address to the newsletter
    #[command(aliases(["sub", "s"]))]
    Subscribe {
        email: String,
        /// Base url of the API, defaults to `client.api_url`
        #[arg(long)]
        url: Option<Url>,
    },
}

impl NewsletterCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            NewsletterCommand::Subscribe { email, url } => {
                subscribe(url.unwrap_or(config.client.api_url), email).await
            }
        }
    }
}

async fn subscribe(url: Url, email: String) -> anyhow::Result<()> {
    if let Some(error) = validate_newsletter_email(&email) {
        bail!("{error}");
    }

    let client = ApiClient::new(url)?;
    match client.subscribe_newsletter(&email).await {
        SubmitOutcome::Accepted { message } => {
            println!("{}", message.as_deref().unwrap_or("Subscribed"));
            Ok(())
        }
        SubmitOutcome::Rejected { error, details } => {
            for detail in details.into_iter().flatten() {
                eprintln!("{detail}");
            }
            bail!("{}", error.as_deref().unwrap_or(ERROR_FALLBACK_MESSAGE))
        }
        SubmitOutcome::NetworkError => bail!("{NETWORK_ERROR_MESSAGE}"),
    }
}
