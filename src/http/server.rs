//! HTTP server assembly.
//!
//! # Responsibilities
//! - Compose the route table with the middleware stack
//! - Apply transport deadlines from configuration
//! - Hand the finished router to the lifecycle controller

use axum::Router;
use tower_http::timeout::{RequestBodyTimeoutLayer, TimeoutLayer};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::http::middleware;
use crate::routing;

/// Fully-assembled HTTP server, ready to be served.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Compose routes and middleware for the given configuration.
    ///
    /// Layer order, outermost first: Allow header, trace, response
    /// deadline, body-read deadline. The Allow layer sits outermost so
    /// every response carries the header, timeout responses included.
    pub fn new(config: &ServerConfig) -> Self {
        let router = routing::build_router()
            .layer(RequestBodyTimeoutLayer::new(config.read_timeout()))
            .layer(TimeoutLayer::new(config.write_timeout()))
            .layer(TraceLayer::new_for_http())
            .layer(middleware::allow_all_methods());
        Self { router }
    }

    /// The composed router, for the lifecycle controller or in-process
    /// tests.
    pub fn into_router(self) -> Router {
        self.router
    }
}
