//! Public landing page for signed-out visitors.

use leptos::prelude::*;

#[component]
pub fn WelcomePage() -> impl IntoView {
    view! {
        <div class="page page--welcome">
            <div class="welcome">
                <h1 class="welcome__title">"Divine Yoga"</h1>
                <p class="welcome__tagline">"Find your balance with guided yoga, meditation, and sleep sessions."</p>
                <a class="auth-button" href="/signup">"Get Started"</a>
                <a class="welcome__login" href="/login">"Log In"</a>
            </div>
        </div>
    }
}
