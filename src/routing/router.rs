//! Route table and catch-all dispatch.

use axum::extract::Request;
use axum::response::Response;
use axum::routing::any;
use axum::Router;

use crate::http::{handlers, status};

/// Build the route table.
///
/// Fixed paths map to the single-purpose views; every other path funnels
/// through [`dispatch`].
pub fn build_router() -> Router {
    Router::new()
        .route("/headers", any(handlers::headers))
        .route("/body", any(handlers::body))
        .route("/queries", any(handlers::queries))
        .fallback(dispatch)
}

/// Catch-all: simulate a status code when the path asks for one, otherwise
/// echo the full request.
async fn dispatch(request: Request) -> Response {
    if let Some(code) = status::parse_status_path(request.uri().path()) {
        return status::simulate(code);
    }
    handlers::echo(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    async fn send(router: Router, method: &str, uri: &str) -> Response {
        router
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn fixed_paths_route_to_their_views() {
        let response = send(build_router(), "GET", "/headers").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );

        let response = send(build_router(), "GET", "/queries?x=1").await;
        let value = json_body(response).await;
        assert_eq!(value["x"], serde_json::json!(["1"]));
    }

    #[tokio::test]
    async fn status_paths_are_simulated() {
        let response = send(build_router(), "GET", "/503").await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        // any method works
        let response = send(build_router(), "DELETE", "/301").await;
        assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
    }

    #[tokio::test]
    async fn other_paths_fall_through_to_echo() {
        for uri in ["/", "/1234", "/99", "/abc", "/700"] {
            let response = send(build_router(), "GET", uri).await;
            assert_eq!(response.status(), StatusCode::OK, "uri {uri}");
            let value = json_body(response).await;
            assert_eq!(value["path"], uri);
        }
    }

    #[tokio::test]
    async fn trailing_slash_is_not_normalized() {
        let response = send(build_router(), "GET", "/headers/").await;
        assert_eq!(response.status(), StatusCode::OK);
        // landed in the echo fallback, not the headers view
        let value = json_body(response).await;
        assert_eq!(value["path"], "/headers/");
    }
}
