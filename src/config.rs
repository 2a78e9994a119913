//! Startup configuration.
//!
//! The backend base URL is baked in at build time from
//! `DIVINE_YOGA_BACKEND_URL`. When unset the client talks to its own origin
//! with relative `/api/...` paths.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Build-time environment variable naming the backend origin.
pub const BACKEND_URL_ENV: &str = "DIVINE_YOGA_BACKEND_URL";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Backend origin without a trailing slash; empty means same-origin.
    pub backend_url: String,
}

impl AppConfig {
    /// Configuration compiled into this build.
    pub fn from_build_env() -> Self {
        Self::from_raw(option_env!("DIVINE_YOGA_BACKEND_URL"))
    }

    pub fn from_raw(backend_url: Option<&str>) -> Self {
        let backend_url = backend_url.map(str::trim).unwrap_or_default().trim_end_matches('/').to_owned();
        Self { backend_url }
    }

    pub fn is_same_origin(&self) -> bool {
        self.backend_url.is_empty()
    }
}
