//! Email + password login page.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::{use_session, use_toasts};
use crate::net::types::LoginRequest;
use crate::state::toast::ToastKind;
#[cfg(feature = "csr")]
use crate::util::auth::HOME_PATH;
use crate::util::mounted::MountFlag;
use crate::util::notify::notify;
#[cfg(feature = "csr")]
use crate::util::notify::{notify_error, notify_success};

/// `type` attribute for a password field with a show/hide toggle.
pub(crate) fn password_input_type(visible: bool) -> &'static str {
    if visible { "text" } else { "password" }
}

/// Trim and check the login form before sending it.
pub(crate) fn validate_login_input(email: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter your email and password.");
    }
    Ok(LoginRequest { email: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let navigate = use_navigate();
    let mounted = MountFlag::for_current_owner();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match validate_login_input(&email.get_untracked(), &password.get_untracked()) {
            Ok(request) => request,
            Err(message) => {
                notify(toasts, ToastKind::Error, message);
                return;
            }
        };
        busy.set(true);
        let client = session.with_untracked(|s| s.client().clone());
        let navigate = navigate.clone();
        let mounted = mounted.clone();

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match client.login(&request).await {
                Ok(resp) => {
                    session.update(|s| s.login(resp.access_token, resp.user));
                    notify_success(toasts, "Welcome back!");
                    navigate(HOME_PATH, NavigateOptions::default());
                }
                Err(err) => notify_error(toasts, &err, "Login failed"),
            }
            mounted.apply(|| busy.set(false));
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (client, request, navigate, mounted);
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">"Divine Yoga"</h1>
                <p class="auth-card__subtitle">"Welcome back to your wellness journey"</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="Email"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <div class="auth-input-row">
                        <input
                            class="auth-input"
                            type=move || password_input_type(show_password.get())
                            placeholder="Password"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <button
                            class="auth-input-row__toggle"
                            type="button"
                            on:click=move |_| show_password.update(|v| *v = !*v)
                        >
                            {move || if show_password.get() { "Hide" } else { "Show" }}
                        </button>
                    </div>
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Logging in..." } else { "Log In" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Don't have an account? "
                    <a href="/signup">"Sign Up"</a>
                </p>
            </div>
        </div>
    }
}
