use std::{sync::Arc, time::Duration};

use shasha_config::ClientConfig;
use tokio::{sync::Mutex, task::AbortHandle};
use tracing::debug;

use crate::{
    api::ContactSubmitter,
    form::{ContactForm, SubmissionStatus},
    validate::ContactField,
};

/// Drives a [`ContactForm`] through a submission and hides the success
/// banner again after [`ContactFormControllerConfig::dismiss_after`].
///
/// Dropping the controller cancels a pending dismiss timer.
#[derive(Debug)]
pub struct ContactFormController<Submitter> {
    form: Arc<Mutex<ContactForm>>,
    submitter: Submitter,
    config: ContactFormControllerConfig,
    dismiss_timer: Option<AbortHandle>,
}

#[derive(Debug, Clone, Copy)]
pub struct ContactFormControllerConfig {
    pub dismiss_after: Duration,
}

impl Default for ContactFormControllerConfig {
    fn default() -> Self {
        Self {
            dismiss_after: Duration::from_secs(10),
        }
    }
}

impl From<&ClientConfig> for ContactFormControllerConfig {
    fn from(config: &ClientConfig) -> Self {
        Self {
            dismiss_after: config.success_dismiss_after.into(),
        }
    }
}

impl<Submitter: ContactSubmitter> ContactFormController<Submitter> {
    pub fn new(submitter: Submitter, config: ContactFormControllerConfig) -> Self {
        Self {
            form: Default::default(),
            submitter,
            config,
            dismiss_timer: None,
        }
    }

    /// A snapshot of the current form state.
    pub async fn form(&self) -> ContactForm {
        self.form.lock().await.clone()
    }

    pub async fn change(&self, field: ContactField, value: impl Into<String>) {
        self.form.lock().await.change(field, value);
    }

    pub async fn blur(&self, field: ContactField) {
        self.form.lock().await.blur(field);
    }

    pub async fn dismiss(&mut self) {
        self.cancel_dismiss_timer();
        self.form.lock().await.dismiss();
    }

    /// Validate and submit the form. Returns the status after the attempt.
    pub async fn submit(&mut self) -> SubmissionStatus {
        let data = self.form.lock().await.begin_submit();
        let Some(data) = data else {
            debug!("contact form not submitted");
            return self.form.lock().await.status().clone();
        };

        self.cancel_dismiss_timer();

        let outcome = self.submitter.submit_contact(data).await;

        let status = {
            let mut form = self.form.lock().await;
            form.finish_submit(outcome);
            form.status().clone()
        };

        if matches!(status, SubmissionStatus::Success { .. }) {
            self.start_dismiss_timer();
        }

        status
    }

    fn start_dismiss_timer(&mut self) {
        let form = Arc::clone(&self.form);
        let dismiss_after = self.config.dismiss_after;
        let task = tokio::spawn(async move {
            tokio::time::sleep(dismiss_after).await;
            let mut form = form.lock().await;
            if matches!(form.status(), SubmissionStatus::Success { .. }) {
                form.dismiss();
            }
        });
        self.dismiss_timer = Some(task.abort_handle());
    }

    fn cancel_dismiss_timer(&mut self) {
        if let Some(timer) = self.dismiss_timer.take() {
            timer.abort();
        }
    }
}

impl<Submitter> Drop for ContactFormController<Submitter> {
    fn drop(&mut self) {
        if let Some(timer) = self.dismiss_timer.take() {
            timer.abort();
        }
    }
}
