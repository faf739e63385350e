use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use serde_json::Value;
use shasha_core_newsletter_contracts::{NewsletterFeatureService, NewsletterSubscribeError};
use tracing::debug;

use super::{failure, internal_server_error, method_not_allowed, validation_failed};
use crate::models::{newsletter::parse_newsletter_draft, ApiSuccess};

const INVALID_STRUCTURE: &str = "Invalid form data structure";

pub fn router(service: Arc<impl NewsletterFeatureService>) -> Router<()> {
    Router::new()
        .route(
            "/api/newsletter",
            routing::post(subscribe).fallback(method_not_allowed),
        )
        .with_state(service)
}

async fn subscribe(
    service: State<Arc<impl NewsletterFeatureService>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Response {
    let body = match body {
        Ok(Json(body)) => body,
        Err(err) => {
            debug!(error = %err, "failed to parse newsletter body");
            return validation_failed([INVALID_STRUCTURE]);
        }
    };
    let Some(draft) = parse_newsletter_draft(body) else {
        return validation_failed([INVALID_STRUCTURE]);
    };

    match service.subscribe(draft).await {
        Ok(()) => Json(ApiSuccess {
            success: true,
            message: "Thank you for subscribing to our newsletter!",
        })
        .into_response(),
        Err(err @ NewsletterSubscribeError::InvalidEmail) => validation_failed([err]),
        Err(NewsletterSubscribeError::Send) => failure(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to subscribe. Please try again later.",
        ),
        Err(NewsletterSubscribeError::Other(err)) => internal_server_error(err),
    }
}
