use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page page--not-found">
            <div class="empty-state">
                <h1 class="empty-state__title">"Page not found"</h1>
                <a href="/">"Go home"</a>
            </div>
        </div>
    }
}
