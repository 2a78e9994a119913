//! Route table and auth guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route component goes through `guard` so redirects behave the same
//! on every page. The decision is a pure function of the route and the
//! current `AuthState`, re-evaluated whenever either changes.
//!
//! Root `/` is the public welcome screen and the signed-in landing page
//! lives at `/home`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::state::auth::AuthState;

/// Sign-in surface anonymous users are sent to.
pub const LOGIN_PATH: &str = "/login";
/// Landing surface signed-in users are sent to.
pub const HOME_PATH: &str = "/home";

/// Every screen the router knows about.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Welcome,
    Login,
    Signup,
    Home,
    Explore,
    Schedule,
    Profile,
    SessionDetail(String),
    NotFound,
}

/// Who may see a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Anyone.
    Public,
    /// Only visitors without a session (entry and auth screens).
    GuestOnly,
    /// Only signed-in users.
    Protected,
}

/// Outcome of guarding one navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    /// Startup validation still running; show a loading screen.
    Wait,
    RedirectToLogin,
    RedirectToHome,
}

impl GuardDecision {
    /// Redirect target, if the decision is a redirect.
    pub fn redirect_path(self) -> Option<&'static str> {
        match self {
            Self::RedirectToLogin => Some(LOGIN_PATH),
            Self::RedirectToHome => Some(HOME_PATH),
            Self::Render | Self::Wait => None,
        }
    }
}

impl AppRoute {
    /// Resolve a URL path (query and fragment ignored) to a route.
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Self::Welcome,
            ["login"] => Self::Login,
            ["signup"] => Self::Signup,
            ["home"] => Self::Home,
            ["explore"] => Self::Explore,
            ["schedule"] => Self::Schedule,
            ["profile"] => Self::Profile,
            ["session", id] => Self::SessionDetail((*id).to_owned()),
            _ => Self::NotFound,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Self::Welcome => "/".to_owned(),
            Self::Login => LOGIN_PATH.to_owned(),
            Self::Signup => "/signup".to_owned(),
            Self::Home => HOME_PATH.to_owned(),
            Self::Explore => "/explore".to_owned(),
            Self::Schedule => "/schedule".to_owned(),
            Self::Profile => "/profile".to_owned(),
            Self::SessionDetail(id) => format!("/session/{id}"),
            Self::NotFound => "/404".to_owned(),
        }
    }

    pub fn access(&self) -> Access {
        match self {
            Self::Welcome | Self::Login | Self::Signup => Access::GuestOnly,
            Self::Home | Self::Explore | Self::Schedule | Self::Profile | Self::SessionDetail(_) => {
                Access::Protected
            }
            Self::NotFound => Access::Public,
        }
    }
}

/// Decide whether `route` renders or redirects under `state`.
pub fn guard(route: &AppRoute, state: &AuthState) -> GuardDecision {
    match (route.access(), state) {
        (Access::Public, _) => GuardDecision::Render,
        (_, AuthState::Initializing) => GuardDecision::Wait,
        (Access::Protected, AuthState::Anonymous) => GuardDecision::RedirectToLogin,
        (Access::GuestOnly, AuthState::Authenticated(_)) => GuardDecision::RedirectToHome,
        (Access::Protected, AuthState::Authenticated(_)) | (Access::GuestOnly, AuthState::Anonymous) => {
            GuardDecision::Render
        }
    }
}
