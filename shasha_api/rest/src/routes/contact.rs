use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use serde_json::Value;
use shasha_core_contact_contracts::{
    ContactFeatureService, ContactSubmitError, ContactSubmitted, ContactValidationError,
};
use tracing::debug;

use super::{failure, internal_server_error, method_not_allowed, validation_failed};
use crate::models::contact::{parse_contact_draft, ApiContactSubmitted};

pub fn router(service: Arc<impl ContactFeatureService>) -> Router<()> {
    Router::new()
        .route(
            "/api/contact",
            routing::post(submit).fallback(method_not_allowed),
        )
        .with_state(service)
}

async fn submit(
    service: State<Arc<impl ContactFeatureService>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Response {
    let body = match body {
        Ok(Json(body)) => body,
        Err(err) => {
            debug!(error = %err, "failed to parse contact form body");
            return validation_failed([ContactValidationError::Structure]);
        }
    };
    let Some(draft) = parse_contact_draft(body) else {
        return validation_failed([ContactValidationError::Structure]);
    };

    match service.submit(draft).await {
        Ok(ContactSubmitted { confirmation_sent }) => Json(ApiContactSubmitted {
            success: true,
            message:
                "Your message has been sent successfully. We will get back to you within 24 hours.",
            confirmation_sent,
        })
        .into_response(),
        Err(ContactSubmitError::Validation(errors)) => validation_failed(errors),
        Err(ContactSubmitError::Send) => failure(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to send email. Please try again or contact us directly.",
        ),
        Err(ContactSubmitError::Other(err)) => internal_server_error(err),
    }
}
