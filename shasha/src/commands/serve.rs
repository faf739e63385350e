use shasha_config::{Config, EmailTransport};
use shasha_email_contracts::EmailService;
use tracing::info;

use crate::{
    email,
    environment::{ConfigProvider, Provider},
};

pub async fn serve(config: Config) -> anyhow::Result<()> {
    match config.email.transport {
        EmailTransport::Smtp => info!("Connecting to smtp server"),
        EmailTransport::Simulated => info!("Using simulated email transport"),
    }
    let email = email::connect(&config.email)?;
    email.ping().await?;

    let config_provider = ConfigProvider::new(&config);
    let provider = Provider::new(config_provider, email);
    let server = provider.rest_server()?;
    info!(
        "Starting http server on {}:{}",
        config.http.host, config.http.port
    );
    server.serve().await
}
