//! Single session view with a "Start Session" action.
//!
//! ERROR HANDLING
//! ==============
//! A missing session renders an inline not-found state. Any other failure
//! toasts and falls back to the same state so the page never stays blank.

#[cfg(test)]
#[path = "session_detail_test.rs"]
mod session_detail_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::app::{use_session, use_toasts};
use crate::components::bottom_nav::{BottomNav, NavTab};
use crate::net::error::ApiError;
use crate::net::types::{ProgressUpdate, YogaSession};
use crate::util::mounted::MountFlag;

pub(crate) const LOAD_FAILED: &str = "Failed to load session";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DetailState {
    Loading,
    Loaded(YogaSession),
    NotFound,
}

/// Page state for a fetch result, plus whether the failure deserves a toast.
pub(crate) fn detail_state(result: Result<YogaSession, ApiError>) -> (DetailState, Option<ApiError>) {
    match result {
        Ok(session) => (DetailState::Loaded(session), None),
        Err(err) if err.is_not_found() => (DetailState::NotFound, None),
        Err(err) => (DetailState::NotFound, Some(err)),
    }
}

#[component]
pub fn SessionDetailPage() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let params = use_params_map();
    let mounted = MountFlag::for_current_owner();

    let state = RwSignal::new(DetailState::Loading);
    let starting = RwSignal::new(false);
    let session_id = params.with_untracked(|p| p.get("id")).unwrap_or_default();
    let client = session.with_untracked(|s| s.client().clone());

    #[cfg(feature = "csr")]
    {
        let client = client.clone();
        let mounted = mounted.clone();
        let session_id = session_id.clone();
        leptos::task::spawn_local(async move {
            let result = client.get_session(&session_id).await;
            mounted.apply(|| {
                let (next, failure) = detail_state(result);
                if let Some(err) = failure {
                    crate::util::notify::notify_error(toasts, &err, LOAD_FAILED);
                }
                state.set(next);
            });
        });
    }

    let on_start = move |_: leptos::ev::MouseEvent| {
        if starting.get_untracked() {
            return;
        }
        starting.set(true);
        let update = ProgressUpdate::started(session_id.clone());

        #[cfg(feature = "csr")]
        {
            let client = client.clone();
            let mounted = mounted.clone();
            leptos::task::spawn_local(async move {
                match client.record_progress(&update).await {
                    Ok(_) => crate::util::notify::notify_success(toasts, "Session started!"),
                    Err(err) => crate::util::notify::notify_error(toasts, &err, "Failed to start session"),
                }
                mounted.apply(|| starting.set(false));
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&client, &mounted, toasts, update);
            starting.set(false);
        }
    };

    view! {
        <div class="page page--session">
            {move || match state.get() {
                DetailState::Loading => view! { <p class="muted">"Loading..."</p> }.into_any(),
                DetailState::NotFound => {
                    view! {
                        <div class="empty-state">
                            <h1 class="empty-state__title">"Session not found"</h1>
                            <a href="/explore">"Browse sessions"</a>
                        </div>
                    }
                        .into_any()
                }
                DetailState::Loaded(s) => {
                    let meta = format!("{} min • {}", s.duration, s.category);
                    view! {
                        <article class="session-detail">
                            <img class="session-detail__image" src={s.image} alt={s.title.clone()}/>
                            <h1 class="session-detail__title">{s.title}</h1>
                            <div class="session-detail__trainer">
                                <img class="avatar avatar--small" src={s.trainer_image} alt={s.trainer_name.clone()}/>
                                <span>{s.trainer_name}</span>
                            </div>
                            <p class="session-detail__meta">{meta}</p>
                            <p class="session-detail__description">{s.description}</p>
                            <button
                                class="start-button"
                                type="button"
                                disabled=move || starting.get()
                                on:click=on_start.clone()
                            >
                                {move || if starting.get() { "Starting..." } else { "Start Session" }}
                            </button>
                        </article>
                    }
                        .into_any()
                }
            }}
            <BottomNav active=NavTab::Explore/>
        </div>
    }
}
