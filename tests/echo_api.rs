//! HTTP-surface behavior of the echo service, driven over a live socket.

mod common;

use common::TestServer;
use echoscope::http::middleware::ALLOWED_METHODS;
use reqwest::header::{HeaderMap, HeaderValue};
use serde_json::Value;

#[tokio::test]
async fn simulates_a_teapot() {
    let server = TestServer::spawn().await;
    let response = common::client()
        .get(server.url("/418"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 418);
    assert_eq!(response.text().await.unwrap(), "I'm a teapot");
}

#[tokio::test]
async fn simulates_codes_without_a_reason_phrase() {
    let server = TestServer::spawn().await;
    let response = common::client()
        .get(server.url("/699"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 699);
    assert_eq!(response.text().await.unwrap(), "Unknown Status Code");
}

#[tokio::test]
async fn near_miss_paths_are_echoed_not_simulated() {
    let server = TestServer::spawn().await;
    let client = common::client();

    for path in ["/99", "/1234", "/abc", "/199", "/700"] {
        let response = client.get(server.url(path)).send().await.unwrap();
        assert_eq!(response.status().as_u16(), 200, "path {path}");
        let value: Value = response.json().await.unwrap();
        assert_eq!(value["path"], path);
    }
}

#[tokio::test]
async fn echoes_method_path_query_headers_and_body() {
    let server = TestServer::spawn().await;
    let response = common::client()
        .post(server.url("/anything?foo=bar&baz=qux&foo=second"))
        .header("x-probe", "on")
        .body("test body")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        response.headers()["content-type"].to_str().unwrap(),
        "application/json"
    );

    let value: Value = response.json().await.unwrap();
    assert_eq!(value["method"], "POST");
    assert_eq!(value["path"], "/anything");
    assert_eq!(value["body"], "test body");
    assert_eq!(value["query"]["foo"], serde_json::json!(["bar", "second"]));
    assert_eq!(value["query"]["baz"], serde_json::json!(["qux"]));
    assert_eq!(value["headers"]["x-probe"], serde_json::json!(["on"]));
}

#[tokio::test]
async fn root_path_is_echoed() {
    let server = TestServer::spawn().await;
    let response = common::client()
        .post(server.url("/"))
        .body("test body")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);
    let value: Value = response.json().await.unwrap();
    assert_eq!(value["body"], "test body");
}

#[tokio::test]
async fn headers_view_preserves_repetition() {
    let server = TestServer::spawn().await;
    let mut headers = HeaderMap::new();
    headers.append("x-probe", HeaderValue::from_static("one"));
    headers.append("x-probe", HeaderValue::from_static("two"));

    let response = common::client()
        .get(server.url("/headers"))
        .headers(headers)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);
    let value: Value = response.json().await.unwrap();
    assert_eq!(value["x-probe"], serde_json::json!(["one", "two"]));
}

#[tokio::test]
async fn queries_view_preserves_repetition() {
    let server = TestServer::spawn().await;
    let response = common::client()
        .get(server.url("/queries?a=1&b=2&a=3"))
        .send()
        .await
        .unwrap();
    let value: Value = response.json().await.unwrap();
    assert_eq!(value["a"], serde_json::json!(["1", "3"]));
    assert_eq!(value["b"], serde_json::json!(["2"]));
}

#[tokio::test]
async fn body_is_echoed_byte_for_byte() {
    let server = TestServer::spawn().await;
    let payload = b"raw \x00\xff bytes".to_vec();

    let response = common::client()
        .post(server.url("/body"))
        .body(payload.clone())
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);
    assert!(response.headers().get("content-type").is_none());
    assert_eq!(response.bytes().await.unwrap().as_ref(), &payload[..]);
}

#[tokio::test]
async fn empty_body_is_echoed_empty() {
    let server = TestServer::spawn().await;
    let response = common::client()
        .post(server.url("/body"))
        .body(Vec::<u8>::new())
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);
    assert!(response.bytes().await.unwrap().is_empty());
}

#[tokio::test]
async fn allow_header_is_on_every_response() {
    let server = TestServer::spawn().await;
    let client = common::client();

    for path in ["/", "/418", "/699", "/headers", "/queries", "/nope"] {
        let response = client.get(server.url(path)).send().await.unwrap();
        assert_eq!(
            response.headers()["allow"].to_str().unwrap(),
            ALLOWED_METHODS,
            "path {path}"
        );
    }

    // non-GET methods carry it too
    let response = client.delete(server.url("/body")).send().await.unwrap();
    assert_eq!(
        response.headers()["allow"].to_str().unwrap(),
        ALLOWED_METHODS
    );
}

#[tokio::test]
async fn uncommon_methods_are_accepted_everywhere() {
    let server = TestServer::spawn().await;
    let client = common::client();

    let response = client
        .patch(server.url("/503"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 503);

    let response = client.put(server.url("/queries?k=v")).send().await.unwrap();
    assert_eq!(response.status().as_u16(), 200);
}
