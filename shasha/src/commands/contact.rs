use anyhow::bail;
use clap::Subcommand;
use shasha_client::{
    api::{ApiClient, ContactSubmitter},
    controller::ContactFormController,
    form::{ContactForm, SubmissionStatus},
    validate::ContactField,
};
use shasha_config::Config;
use shasha_models::contact::InquiryType;
use url::Url;

#[derive(Debug, Subcommand)]
pub enum ContactCommand {
    /// Validate and submit the contact form
    #[command(aliases(["s"]))]
    Submit {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: Option<String>,
        /// One of booking, general, events or dining
        #[arg(long, default_value_t = InquiryType::General)]
        inquiry_type: InquiryType,
        #[arg(long)]
        message: String,
        /// Base url of the API, defaults to `client.api_url`
        #[arg(long)]
        url: Option<Url>,
    },
}

impl ContactCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            ContactCommand::Submit {
                name,
                email,
                phone,
                inquiry_type,
                message,
                url,
            } => {
                let client = ApiClient::new(url.unwrap_or_else(|| config.client.api_url.clone()))?;
                let controller =
                    ContactFormController::new(client, (&config.client).into());
                controller.change(ContactField::Name, name).await;
                controller.change(ContactField::Email, email).await;
                controller
                    .change(ContactField::Phone, phone.unwrap_or_default())
                    .await;
                controller
                    .change(ContactField::InquiryType, inquiry_type.as_str())
                    .await;
                controller.change(ContactField::Message, message).await;

                submit(controller).await
            }
        }
    }
}

async fn submit(mut controller: ContactFormController<impl ContactSubmitter>) -> anyhow::Result<()> {
    let status = controller.submit().await;
    let form = controller.form().await;

    match status {
        SubmissionStatus::Success { message } => {
            println!("{message}");
            Ok(())
        }
        SubmissionStatus::Error { message } => {
            print_errors(&form);
            bail!("{message}")
        }
        SubmissionStatus::Idle | SubmissionStatus::Submitting => {
            print_errors(&form);
            bail!("The contact form is invalid")
        }
    }
}

fn print_errors(form: &ContactForm) {
    for (field, error) in form.errors() {
        eprintln!("{field:?}: {error}");
    }
}
