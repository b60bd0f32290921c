//! CORS policy
//!
//! One trusted origin, a fixed method list and a fixed header list, sent
//! on every response. Any `OPTIONS` request is answered by `CorsLayer`
//! with an empty 200 before it reaches a handler.

use axum::http::header::{
    ACCEPT, ACCEPT_ENCODING, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
    AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE,
};
use axum::http::{HeaderName, HeaderValue, Method};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::set_header::SetResponseHeaderLayer;

const X_CSRF_TOKEN: HeaderName = HeaderName::from_static("x-csrf-token");

const ALLOWED_METHODS: [Method; 5] = [
    Method::POST,
    Method::GET,
    Method::OPTIONS,
    Method::PUT,
    Method::DELETE,
];

const ALLOWED_HEADERS: [HeaderName; 6] = [
    ACCEPT,
    CONTENT_TYPE,
    CONTENT_LENGTH,
    ACCEPT_ENCODING,
    X_CSRF_TOKEN,
    AUTHORIZATION,
];

const ALLOW_METHODS_VALUE: &str = "POST, GET, OPTIONS, PUT, DELETE";
const ALLOW_HEADERS_VALUE: &str =
    "Accept, Content-Type, Content-Length, Accept-Encoding, X-CSRF-Token, Authorization";

/// CORS settings for the router
#[derive(Debug, Clone)]
pub struct CorsPolicy {
    origin: HeaderValue,
}

impl CorsPolicy {
    pub fn new(origin: HeaderValue) -> Self {
        Self { origin }
    }

    /// Wrap every route of `router` in the policy.
    ///
    /// `CorsLayer` only emits the method and header lists on preflight,
    /// so they are also set on regular responses here.
    pub fn apply<S>(&self, router: Router<S>) -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        let cors = CorsLayer::new()
            .allow_origin(self.origin.clone())
            .allow_methods(ALLOWED_METHODS)
            .allow_headers(ALLOWED_HEADERS);

        router
            .layer(cors)
            .layer(SetResponseHeaderLayer::overriding(
                ACCESS_CONTROL_ALLOW_METHODS,
                HeaderValue::from_static(ALLOW_METHODS_VALUE),
            ))
            .layer(SetResponseHeaderLayer::overriding(
                ACCESS_CONTROL_ALLOW_HEADERS,
                HeaderValue::from_static(ALLOW_HEADERS_VALUE),
            ))
    }
}
