//! In-memory transport for tests: canned responses keyed by method + URL,
//! with every outgoing request recorded.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::error::ApiError;
use super::transport::{HttpRequest, HttpResponse, Method, Transport};

#[derive(Default)]
struct Inner {
    responses: HashMap<(Method, String), Result<HttpResponse, ApiError>>,
    calls: Vec<HttpRequest>,
}

#[derive(Clone, Default)]
pub(crate) struct MockTransport {
    inner: Arc<Mutex<Inner>>,
}

impl MockTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Answer `method url` with `status` and a JSON body.
    pub(crate) fn respond(&self, method: Method, url: &str, status: u16, body: serde_json::Value) -> &Self {
        self.respond_raw(method, url, status, &body.to_string())
    }

    pub(crate) fn respond_raw(&self, method: Method, url: &str, status: u16, body: &str) -> &Self {
        let response = HttpResponse { status, body: body.to_owned() };
        self.inner.lock().unwrap().responses.insert((method, url.to_owned()), Ok(response));
        self
    }

    /// Fail `method url` at the transport level.
    pub(crate) fn fail(&self, method: Method, url: &str, message: &str) -> &Self {
        let err = ApiError::Network(message.to_owned());
        self.inner.lock().unwrap().responses.insert((method, url.to_owned()), Err(err));
        self
    }

    pub(crate) fn calls(&self) -> Vec<HttpRequest> {
        self.inner.lock().unwrap().calls.clone()
    }

    pub(crate) fn calls_to(&self, url: &str) -> Vec<HttpRequest> {
        self.calls().into_iter().filter(|c| c.url == url).collect()
    }
}

impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(request.clone());
        inner
            .responses
            .get(&(request.method, request.url.clone()))
            .cloned()
            .unwrap_or_else(|| {
                Ok(HttpResponse { status: 404, body: r#"{"detail":"Not Found"}"#.to_owned() })
            })
    }
}
