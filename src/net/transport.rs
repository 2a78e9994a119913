//! HTTP transport seam beneath the API client.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: `BrowserTransport` reports a network error since there is
//! no browser fetch to delegate to; tests substitute `MockTransport`.

use std::future::Future;

use super::error::ApiError;

/// HTTP verbs used by the backend API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
}

/// A fully resolved outgoing request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    /// Absolute or origin-relative URL including any query string.
    pub url: String,
    /// Bearer credential sent as `Authorization: Bearer <token>`.
    pub bearer: Option<String>,
    /// Serialized JSON body.
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn authorization_header(&self) -> Option<String> {
        self.bearer.as_ref().map(|token| format!("Bearer {token}"))
    }
}

/// Status and raw body of a completed HTTP exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request and yields the raw response.
///
/// Implementations only fail with [`ApiError::Network`]; status
/// classification and decoding belong to the API client.
pub trait Transport {
    fn send(&self, request: HttpRequest) -> impl Future<Output = Result<HttpResponse, ApiError>>;
}

/// Transport backed by the browser's `fetch` through `gloo-net`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            use gloo_net::http::Request;

            let mut builder = match request.method {
                Method::Get => Request::get(&request.url),
                Method::Post => Request::post(&request.url),
            };
            if let Some(value) = request.authorization_header() {
                builder = builder.header("Authorization", &value);
            }
            let prepared = match request.body {
                Some(body) => builder.header("Content-Type", "application/json").body(body),
                None => builder.build(),
            }
            .map_err(|e| ApiError::Network(e.to_string()))?;

            let resp = prepared.send().await.map_err(|e| {
                log::warn!("request to {} failed: {e}", request.url);
                ApiError::Network(e.to_string())
            })?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
            Ok(HttpResponse { status, body })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(ApiError::Network("not available outside the browser".to_owned()))
        }
    }
}
