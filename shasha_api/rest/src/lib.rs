use std::net::IpAddr;

use anyhow::Context;
use axum::Router;
use shasha_core_contact_contracts::ContactFeatureService;
use shasha_core_health_contracts::HealthFeatureService;
use shasha_core_newsletter_contracts::NewsletterFeatureService;
use tokio::net::TcpListener;
use tracing::info;

mod middlewares;
mod models;
mod routes;

#[derive(Debug, Clone)]
pub struct RestServer<Health, Contact, Newsletter> {
    health: Health,
    contact: Contact,
    newsletter: Newsletter,
    config: RestServerConfig,
}

#[derive(Debug, Clone, Copy)]
pub struct RestServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl<Health, Contact, Newsletter> RestServer<Health, Contact, Newsletter>
where
    Health: HealthFeatureService,
    Contact: ContactFeatureService,
    Newsletter: NewsletterFeatureService,
{
    pub fn new(
        health: Health,
        contact: Contact,
        newsletter: Newsletter,
        config: RestServerConfig,
    ) -> Self {
        Self {
            health,
            contact,
            newsletter,
            config,
        }
    }

    pub async fn serve(self) -> anyhow::Result<()> {
        let RestServerConfig { host, port } = self.config;
        let listener = TcpListener::bind((host, port))
            .await
            .with_context(|| format!("Failed to bind to {host}:{port}"))?;
        self.serve_on(listener).await
    }

    /// Serve on an already bound listener.
    pub async fn serve_on(self, listener: TcpListener) -> anyhow::Result<()> {
        info!(address = %listener.local_addr()?, "starting http server");
        axum::serve(listener, self.router())
            .await
            .map_err(Into::into)
    }

    fn router(self) -> Router<()> {
        let router = Router::new()
            .merge(routes::health::router(self.health.into()))
            .merge(routes::contact::router(self.contact.into()))
            .merge(routes::newsletter::router(self.newsletter.into()));

        let router = middlewares::panic_handler::add(router);
        let router = middlewares::trace::add(router);
        middlewares::request_id::add(router)
    }
}
