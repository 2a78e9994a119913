//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
    hooks::use_location,
};

use crate::components::toaster::Toaster;
use crate::config::AppConfig;
use crate::net::api::ApiClient;
use crate::net::transport::BrowserTransport;
use crate::pages::{
    explore::ExplorePage, home::HomePage, login::LoginPage, not_found::NotFoundPage, profile::ProfilePage,
    schedule::SchedulePage, session_detail::SessionDetailPage, signup::SignupPage, welcome::WelcomePage,
};
use crate::state::auth::SessionManager;
use crate::state::toast::ToastState;
use crate::state::token_store::LocalStorageTokenStore;
use crate::util::auth::{AppRoute, GuardDecision, LOGIN_PATH, guard};

/// The process-wide session: browser token storage plus `fetch` transport.
pub type AppSession = SessionManager<LocalStorageTokenStore, BrowserTransport>;

/// Root application component.
///
/// Creates the single session manager, starts its token validation, and
/// provides it with the toast queue to every page.
#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_meta_context();

    let client = ApiClient::new(config.backend_url.clone(), BrowserTransport);
    let session = RwSignal::new(SessionManager::new(LocalStorageTokenStore, client));
    let toasts = RwSignal::new(ToastState::default());

    provide_context(config);
    provide_context(session);
    provide_context(toasts);

    // Guards hold every route at `Wait` until this settles.
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let mut manager = session.get_untracked();
        manager.initialize().await;
        session.set(manager);
    });

    view! {
        <Title text="Divine Yoga"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("") view=|| view! { <Guarded><WelcomePage/></Guarded> }/>
                <Route path=StaticSegment("login") view=|| view! { <Guarded><LoginPage/></Guarded> }/>
                <Route path=StaticSegment("signup") view=|| view! { <Guarded><SignupPage/></Guarded> }/>
                <Route path=StaticSegment("home") view=|| view! { <Guarded><HomePage/></Guarded> }/>
                <Route path=StaticSegment("explore") view=|| view! { <Guarded><ExplorePage/></Guarded> }/>
                <Route path=StaticSegment("schedule") view=|| view! { <Guarded><SchedulePage/></Guarded> }/>
                <Route path=StaticSegment("profile") view=|| view! { <Guarded><ProfilePage/></Guarded> }/>
                <Route
                    path=(StaticSegment("session"), ParamSegment("id"))
                    view=|| view! { <Guarded><SessionDetailPage/></Guarded> }
                />
            </Routes>
        </Router>

        <Toaster/>
    }
}

/// Applies the auth guard for the current location to its children.
#[component]
fn Guarded(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let pathname = use_location().pathname;
    let decision = Memo::new(move |_| {
        let route = AppRoute::parse(&pathname.get());
        session.with(|s| guard(&route, s.state()))
    });

    move || match decision.get() {
        GuardDecision::Render => children().into_any(),
        GuardDecision::Wait => view! { <LoadingScreen/> }.into_any(),
        redirect => {
            let path = redirect.redirect_path().unwrap_or(LOGIN_PATH);
            view! { <Redirect path=path/> }.into_any()
        }
    }
}

#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="loading-screen">
            <p class="loading-screen__text">"Loading..."</p>
        </div>
    }
}

/// Session signal provided by [`App`].
pub fn use_session() -> RwSignal<AppSession> {
    expect_context::<RwSignal<AppSession>>()
}

/// Toast queue provided by [`App`].
pub fn use_toasts() -> RwSignal<ToastState> {
    expect_context::<RwSignal<ToastState>>()
}
