use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::{ApiError, ApiFailure};

pub mod contact;
pub mod health;
pub mod newsletter;

pub fn internal_server_error(err: impl Into<anyhow::Error>) -> Response {
    let err = err.into();
    tracing::error!("internal server error: {err:#}");
    failure(
        StatusCode::INTERNAL_SERVER_ERROR,
        "An unexpected error occurred. Please try again later.",
    )
}

fn validation_failed<T: ToString>(details: impl IntoIterator<Item = T>) -> Response {
    let response = ApiFailure {
        success: false,
        error: "Validation failed",
        details: Some(details.into_iter().map(|x| x.to_string()).collect()),
    };
    (StatusCode::BAD_REQUEST, Json(response)).into_response()
}

fn failure(code: StatusCode, error: &'static str) -> Response {
    let response = ApiFailure {
        success: false,
        error,
        details: None,
    };
    (code, Json(response)).into_response()
}

async fn method_not_allowed() -> Response {
    let response = ApiError {
        error: "Method not allowed",
    };
    (StatusCode::METHOD_NOT_ALLOWED, Json(response)).into_response()
}
