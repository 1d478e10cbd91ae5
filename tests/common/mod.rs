//! Shared utilities for integration tests.

use std::net::SocketAddr;

use echoscope::config::ServerConfig;
use echoscope::http::HttpServer;
use echoscope::lifecycle::{self, ServerHandle};

/// A live server on an ephemeral port.
///
/// The handle is held for the server's lifetime; dropping it releases the
/// drain trigger and the server shuts down with the test.
#[allow(dead_code)]
pub struct TestServer {
    addr: SocketAddr,
    _handle: ServerHandle,
}

#[allow(dead_code)]
impl TestServer {
    pub async fn spawn() -> Self {
        let config = ServerConfig {
            port: "0".to_string(),
            ..Default::default()
        };
        let server = HttpServer::new(&config);
        let handle = lifecycle::start(&config, server)
            .await
            .expect("ephemeral port should bind");
        Self {
            addr: handle.local_addr(),
            _handle: handle,
        }
    }

    pub fn url(&self, path_and_query: &str) -> String {
        format!("http://127.0.0.1:{}{}", self.addr.port(), path_and_query)
    }
}

#[allow(dead_code)]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("client should build")
}
