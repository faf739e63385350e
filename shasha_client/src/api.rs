use std::{future::Future, sync::Arc};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use url::Url;

use crate::{form::ContactFormData, http::USER_AGENT};

/// What came back from a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// 2xx with `success: true`.
    Accepted { message: Option<String> },
    /// Any other response with a JSON body.
    Rejected {
        error: Option<String>,
        details: Option<Vec<String>>,
    },
    /// The request failed or the response could not be decoded.
    NetworkError,
}

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait ContactSubmitter: Send + Sync + 'static {
    fn submit_contact(&self, data: ContactFormData)
        -> impl Future<Output = SubmitOutcome> + Send;
}

#[cfg(any(test, feature = "mock"))]
impl MockContactSubmitter {
    pub fn with_submit_contact(mut self, data: ContactFormData, outcome: SubmitOutcome) -> Self {
        self.expect_submit_contact()
            .once()
            .with(mockall::predicate::eq(data))
            .return_once(|_| Box::pin(std::future::ready(outcome)));
        self
    }
}

/// HTTP client for the contact and newsletter endpoints.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: Arc<Url>,
}

impl ApiClient {
    pub fn new(base_url: Url) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(&*USER_AGENT)
            .build()
            .context("Failed to build http client")?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub async fn subscribe_newsletter(&self, email: &str) -> SubmitOutcome {
        self.post("api/newsletter", &NewsletterRequest { email })
            .await
    }

    async fn post(&self, path: &str, body: &impl Serialize) -> SubmitOutcome {
        match self.try_post(path, body).await {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!(%path, "request failed: {err:#}");
                SubmitOutcome::NetworkError
            }
        }
    }

    async fn try_post(&self, path: &str, body: &impl Serialize) -> anyhow::Result<SubmitOutcome> {
        let url = self
            .base_url
            .join(path)
            .with_context(|| format!("Failed to build url for {path}"))?;

        let response = self.client.post(url).json(body).send().await?;
        let status = response.status();
        let response = response
            .json::<ApiResponse>()
            .await
            .context("Failed to decode response")?;

        if status.is_success() && response.success {
            return Ok(SubmitOutcome::Accepted {
                message: response.message,
            });
        }

        debug!(%path, %status, ?response, "request was rejected");
        Ok(SubmitOutcome::Rejected {
            error: response.error,
            details: response.details,
        })
    }
}

impl ContactSubmitter for ApiClient {
    async fn submit_contact(&self, data: ContactFormData) -> SubmitOutcome {
        self.post("api/contact", &data).await
    }
}

#[derive(Serialize)]
struct NewsletterRequest<'a> {
    email: &'a str,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    success: bool,
    message: Option<String>,
    error: Option<String>,
    details: Option<Vec<String>>,
}
