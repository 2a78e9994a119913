//! Toast helpers shared by pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Failed requests surface here as dismissible toasts instead of breaking
//! the view. In the browser each toast dismisses itself after
//! `TOAST_TTL`.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::state::toast::{ToastKind, ToastState};

/// How long a toast stays on screen.
#[cfg(feature = "csr")]
const TOAST_TTL: std::time::Duration = std::time::Duration::from_secs(4);

/// Show a toast.
pub fn notify(toasts: RwSignal<ToastState>, kind: ToastKind, message: impl Into<String>) {
    let Some(id) = toasts.try_update(|t| t.push(kind, message)) else {
        return;
    };
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(TOAST_TTL).await;
        let _ = toasts.try_update(|t| t.dismiss(id));
    });
    #[cfg(not(feature = "csr"))]
    let _ = id;
}

pub fn notify_success(toasts: RwSignal<ToastState>, message: &str) {
    notify(toasts, ToastKind::Success, message);
}

/// Toast the backend's message for `err`, or `fallback` when it has none.
pub fn notify_error(toasts: RwSignal<ToastState>, err: &ApiError, fallback: &str) {
    log::warn!("{fallback}: {err}");
    notify(toasts, ToastKind::Error, err.user_message(fallback));
}
