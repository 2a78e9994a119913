//! REST API client for the wellness backend.
//!
//! The client is an immutable value: base URL, optional bearer credential,
//! and a [`Transport`]. Login and logout build a new client through
//! [`ApiClient::with_credential`] instead of mutating shared headers, so a
//! clone handed to a page keeps the credential it was created with.
//!
//! ERROR HANDLING
//! ==============
//! Every operation returns `Result<_, ApiError>`. Nothing is retried;
//! callers decide whether a failure becomes a toast, a fallback state, or
//! a silent downgrade.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::transport::{HttpRequest, Method, Transport};
use super::types::{AuthResponse, LoginRequest, ProgressRecord, ProgressUpdate, Program, SignupRequest, User, YogaSession};

/// Category label meaning "no filter" in the explore chips.
pub const ALL_CATEGORIES: &str = "All";

fn join_url(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}

fn sessions_endpoint(category: Option<&str>) -> String {
    match category.map(str::trim) {
        Some(category) if !category.is_empty() && category != ALL_CATEGORIES => {
            let encoded: String = url::form_urlencoded::byte_serialize(category.as_bytes()).collect();
            format!("/api/sessions?category={encoded}")
        }
        _ => "/api/sessions".to_owned(),
    }
}

fn session_endpoint(session_id: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(session_id.as_bytes()).collect();
    format!("/api/sessions/{encoded}")
}

/// Backend API client bound to one credential.
#[derive(Clone, Debug)]
pub struct ApiClient<T> {
    base_url: String,
    credential: Option<String>,
    transport: T,
}

impl<T: Transport + Clone> ApiClient<T> {
    /// Anonymous client for the backend at `base_url`.
    pub fn new(base_url: impl Into<String>, transport: T) -> Self {
        Self { base_url: base_url.into(), credential: None, transport }
    }

    /// A copy of this client that sends `credential` (or nothing) as its
    /// bearer token.
    #[must_use]
    pub fn with_credential(&self, credential: Option<String>) -> Self {
        Self {
            base_url: self.base_url.clone(),
            credential,
            transport: self.transport.clone(),
        }
    }

    pub fn credential(&self) -> Option<&str> {
        self.credential.as_deref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create an account via `POST /api/auth/signup`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` with the backend message when the
    /// email is already registered, or any transport/status error.
    pub async fn signup(&self, request: &SignupRequest) -> Result<AuthResponse, ApiError> {
        self.post("/api/auth/signup", request).await
    }

    /// Exchange credentials for a token via `POST /api/auth/login`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Unauthorized` for bad credentials, or any
    /// transport/status error.
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.post("/api/auth/login", request).await
    }

    /// Fetch the user the current credential belongs to via `GET /api/auth/me`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Unauthorized` when the credential is missing or rejected.
    pub async fn current_user(&self) -> Result<User, ApiError> {
        self.get("/api/auth/me").await
    }

    /// List sessions, optionally filtered by category.
    ///
    /// # Errors
    ///
    /// Returns any transport, status, or decode error.
    pub async fn list_sessions(&self, category: Option<&str>) -> Result<Vec<YogaSession>, ApiError> {
        self.get(&sessions_endpoint(category)).await
    }

    /// Fetch one session by id.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` when the backend has no such session.
    pub async fn get_session(&self, session_id: &str) -> Result<YogaSession, ApiError> {
        self.get(&session_endpoint(session_id)).await
    }

    /// List all programs.
    ///
    /// # Errors
    ///
    /// Returns any transport, status, or decode error.
    pub async fn list_programs(&self) -> Result<Vec<Program>, ApiError> {
        self.get("/api/programs").await
    }

    /// Record progress on a session via `POST /api/progress`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Unauthorized` without a valid credential, or any
    /// transport/status error.
    pub async fn record_progress(&self, update: &ProgressUpdate) -> Result<ProgressRecord, ApiError> {
        self.post("/api/progress", update).await
    }

    /// List the current user's progress rows via `GET /api/progress`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Unauthorized` without a valid credential, or any
    /// transport/status error.
    pub async fn list_progress(&self) -> Result<Vec<ProgressRecord>, ApiError> {
        self.get("/api/progress").await
    }

    async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.execute(Method::Get, path, None).await
    }

    async fn post<B: Serialize, R: DeserializeOwned>(&self, path: &str, body: &B) -> Result<R, ApiError> {
        let body = serde_json::to_string(body).map_err(|e| ApiError::decode(&e))?;
        self.execute(Method::Post, path, Some(body)).await
    }

    async fn execute<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<R, ApiError> {
        let request = HttpRequest {
            method,
            url: join_url(&self.base_url, path),
            bearer: self.credential.clone(),
            body,
        };
        let resp = self.transport.send(request).await?;
        if !resp.is_success() {
            let err = ApiError::from_status(resp.status, &resp.body);
            log::debug!("{method:?} {path} -> {}: {err}", resp.status);
            return Err(err);
        }
        serde_json::from_str(&resp.body).map_err(|e| {
            log::warn!("{method:?} {path}: undecodable response: {e}");
            ApiError::decode(&e)
        })
    }
}
