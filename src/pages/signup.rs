//! Account creation page.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::login::password_input_type;
use crate::app::{use_session, use_toasts};
use crate::net::types::SignupRequest;
use crate::state::toast::ToastKind;
#[cfg(feature = "csr")]
use crate::util::auth::HOME_PATH;
use crate::util::mounted::MountFlag;
use crate::util::notify::notify;
#[cfg(feature = "csr")]
use crate::util::notify::{notify_error, notify_success};

/// Minimum password length accepted by the signup form.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Trim and check the signup form before sending it.
pub(crate) fn validate_signup_input(name: &str, email: &str, password: &str) -> Result<SignupRequest, &'static str> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() {
        return Err("Enter your name and email.");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters.");
    }
    Ok(SignupRequest { name: name.to_owned(), email: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let navigate = use_navigate();
    let mounted = MountFlag::for_current_owner();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match validate_signup_input(&name.get_untracked(), &email.get_untracked(), &password.get_untracked()) {
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
            match client.signup(&request).await {
                Ok(resp) => {
                    session.update(|s| s.login(resp.access_token, resp.user));
                    notify_success(toasts, "Account created successfully!");
                    navigate(HOME_PATH, NavigateOptions::default());
                }
                Err(err) => notify_error(toasts, &err, "Signup failed"),
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
        <div class="auth-page auth-page--signup">
            <div class="auth-card">
                <h1 class="auth-card__title">"Join Divine Yoga"</h1>
                <p class="auth-card__subtitle">"Begin your wellness journey today"</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Full Name"
                        required
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
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
                            minlength="6"
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
                        {move || if busy.get() { "Creating Account..." } else { "Sign Up" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already have an account? "
                    <a href="/login">"Log In"</a>
                </p>
            </div>
        </div>
    }
}
