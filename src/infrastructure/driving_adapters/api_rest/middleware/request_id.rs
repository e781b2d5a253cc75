//! Correlation ids for registry calls
//!
//! A client may tag its call with `x-request-id`. A usable tag (visible
//! ASCII, at most `MAX_REQUEST_ID_LEN` bytes) is kept; anything else is
//! replaced with a fresh UUID. The id is a field of the `registry_call`
//! span, so session rejections and network writes logged while serving the
//! call share it, and it is returned on the response for the client to quote.

use axum::{
    body::Body,
    http::{header::HeaderName, HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use tracing::Instrument;
use uuid::Uuid;

pub static REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

pub const MAX_REQUEST_ID_LEN: usize = 128;

/// Correlation id of the call being served, available as a request extension
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(String);

impl RequestId {
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Adopt a client-chosen id if it is safe to log and echo
    #[must_use]
    pub fn from_client(raw: &str) -> Option<Self> {
        let usable = !raw.is_empty()
            && raw.len() <= MAX_REQUEST_ID_LEN
            && raw.bytes().all(|b| b.is_ascii_graphic());
        usable.then(|| Self(raw.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

pub async fn request_id_middleware(mut request: Request<Body>, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(&REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(RequestId::from_client)
        .unwrap_or_else(RequestId::generate);

    let span = tracing::info_span!(
        "registry_call",
        request_id = %request_id,
        method = %request.method(),
        path = %request.uri().path(),
    );
    request.extensions_mut().insert(request_id.clone());

    let mut response = next.run(request).instrument(span.clone()).await;

    if response.status().is_server_error() {
        span.in_scope(|| tracing::error!(status = %response.status(), "Registry call failed"));
    }
    if let Ok(value) = HeaderValue::from_str(request_id.as_str()) {
        response.headers_mut().insert(REQUEST_ID_HEADER.clone(), value);
    }
    response
}
