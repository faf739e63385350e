use std::future::Future;

use shasha_models::newsletter::NewsletterSubscriptionDraft;
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait NewsletterFeatureService: Send + Sync + 'static {
    /// Validate the email address and send a welcome email to it.
    fn subscribe(
        &self,
        draft: NewsletterSubscriptionDraft,
    ) -> impl Future<Output = Result<(), NewsletterSubscribeError>> + Send;
}

#[derive(Debug, Error)]
pub enum NewsletterSubscribeError {
    #[error("Valid email address is required")]
    InvalidEmail,
    #[error("Failed to send the welcome email.")]
    Send,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockNewsletterFeatureService {
    pub fn with_subscribe(
        mut self,
        draft: NewsletterSubscriptionDraft,
        result: Result<(), NewsletterSubscribeError>,
    ) -> Self {
        self.expect_subscribe()
            .once()
            .with(mockall::predicate::eq(draft))
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }
}
