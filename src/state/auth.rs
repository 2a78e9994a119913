//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `SessionManager` exists per page load. `App` creates it, runs
//! `initialize` once, and provides it through context; route guards read its
//! `AuthState`, and the login/signup/profile pages call `login`/`logout`.
//!
//! LIFECYCLE
//! =========
//! `Initializing` -> `Authenticated(user)` | `Anonymous`. Startup restores
//! the stored token and validates it with `GET /api/auth/me`; any failure
//! wipes the token from both storage and the API client.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::api::ApiClient;
use crate::net::transport::Transport;
use crate::net::types::User;

use super::token_store::TokenStore;

/// Where the client stands with respect to authentication.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AuthState {
    /// Startup validation has not finished yet.
    #[default]
    Initializing,
    /// No valid session.
    Anonymous,
    /// A validated token and the user it belongs to.
    Authenticated(User),
}

impl AuthState {
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated(user) => Some(user),
            Self::Initializing | Self::Anonymous => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Initializing)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}

/// Owns the token store, the credentialed API client, and the auth state.
#[derive(Clone, Debug)]
pub struct SessionManager<S, T> {
    store: S,
    client: ApiClient<T>,
    state: AuthState,
}

impl<S: TokenStore, T: Transport + Clone> SessionManager<S, T> {
    /// A manager in `Initializing` with an anonymous client.
    pub fn new(store: S, client: ApiClient<T>) -> Self {
        let client = client.with_credential(None);
        Self { store, client, state: AuthState::Initializing }
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn user(&self) -> Option<&User> {
        self.state.user()
    }

    /// Client carrying the current session's credential, if any.
    pub fn client(&self) -> &ApiClient<T> {
        &self.client
    }

    /// Restore and validate a stored session.
    ///
    /// Runs at most once: calling it after the state has left `Initializing`
    /// does nothing. Without a stored token no request is made.
    pub async fn initialize(&mut self) {
        if !self.state.is_loading() {
            return;
        }
        let Some(token) = self.store.read() else {
            log::info!("no stored session");
            self.state = AuthState::Anonymous;
            return;
        };

        let candidate = self.client.with_credential(Some(token));
        match candidate.current_user().await {
            Ok(user) => {
                log::info!("restored session for user {}", user.id);
                self.client = candidate;
                self.state = AuthState::Authenticated(user);
            }
            Err(err) => {
                log::info!("stored session rejected: {err}");
                self.store.clear();
                self.client = self.client.with_credential(None);
                self.state = AuthState::Anonymous;
            }
        }
    }

    /// Adopt a freshly issued token. Replaces any prior session.
    pub fn login(&mut self, token: String, user: User) {
        self.store.save(&token);
        self.client = self.client.with_credential(Some(token));
        log::info!("signed in as user {}", user.id);
        self.state = AuthState::Authenticated(user);
    }

    /// Drop the session. Safe to call repeatedly.
    pub fn logout(&mut self) {
        self.store.clear();
        self.client = self.client.with_credential(None);
        if self.state.is_authenticated() {
            log::info!("signed out");
        }
        self.state = AuthState::Anonymous;
    }
}
