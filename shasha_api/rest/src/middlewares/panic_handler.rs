use std::panic::AssertUnwindSafe;

use anyhow::anyhow;
use axum::{
    extract::Request,
    middleware::{from_fn, Next},
    response::Response,
    Router,
};
use futures::FutureExt;

use crate::routes::internal_server_error;

pub fn add<S: Clone + Send + Sync + 'static>(router: Router<S>) -> Router<S> {
    router.layer(from_fn(middleware))
}

async fn middleware(request: Request, next: Next) -> Response {
    let uri = request.uri().clone();
    match AssertUnwindSafe(next.run(request)).catch_unwind().await {
        Ok(response) => response,
        Err(_) => internal_server_error(anyhow!("request handler for {uri} panicked")),
    }
}

#[cfg(test)]
mod tests {
    use axum::routing;
    use serde_json::{json, Value};
    use tokio::net::TcpListener;

    use super::*;

    #[tokio::test]
    async fn panic_becomes_internal_server_error() {
        // Arrange
        let router = add(Router::new().route(
            "/",
            routing::get(|| async {
                if true {
                    panic!("handler panicked");
                }
            }),
        ));
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, router).await });

        // Act
        let response = reqwest::get(format!("http://{address}/")).await.unwrap();

        // Assert
        assert_eq!(response.status(), reqwest::StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.json::<Value>().await.unwrap(),
            json!({
                "success": false,
                "error": "An unexpected error occurred. Please try again later.",
            })
        );
    }
}
