use std::{net::IpAddr, path::Path};

use anyhow::Context;
use config::{File, FileFormat};
use serde::Deserialize;
use shasha_models::email_address::EmailAddress;
use url::Url;

pub use duration::Duration;

mod duration;

/// Environment variable holding a colon separated list of config files.
pub const CONFIG_PATHS_ENV: &str = "SHASHA_CONFIG";

pub const DEFAULT_CONFIG: &str = include_str!("../../config.toml");
pub const DEV_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.dev.toml");

/// Load the bundled defaults, overridden by the files listed in `SHASHA_CONFIG`.
pub fn load() -> anyhow::Result<Config> {
    let paths = std::env::var_os(CONFIG_PATHS_ENV)
        .map(|paths| std::env::split_paths(&paths).collect::<Vec<_>>())
        .unwrap_or_default();
    load_paths(&paths)
}

/// Load the bundled defaults, overridden by the given files in order.
pub fn load_paths(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    let builder =
        config::Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

    paths
        .iter()
        .try_fold(builder, |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

pub fn load_dev_config() -> anyhow::Result<Config> {
    load_paths(&[DEV_CONFIG_PATH])
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    pub email: EmailConfig,
    pub contact: ContactConfig,
    pub health: HealthConfig,
    pub client: ClientConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub host: IpAddr,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct EmailConfig {
    pub transport: EmailTransport,
    pub smtp_url: Option<String>,
    pub from: EmailAddress,
    pub from_name: Option<String>,
    pub simulated: SimulatedEmailConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailTransport {
    Smtp,
    Simulated,
}

#[derive(Debug, Deserialize)]
pub struct SimulatedEmailConfig {
    pub delay: Duration,
    pub failure_rate: f64,
}

#[derive(Debug, Deserialize)]
pub struct ContactConfig {
    pub admin_email: EmailAddress,
    pub admin_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct HealthConfig {
    pub cache_ttl: Duration,
}

#[derive(Debug, Deserialize)]
pub struct ClientConfig {
    pub api_url: Url,
    pub success_dismiss_after: Duration,
}
