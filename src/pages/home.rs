//! Signed-in landing page.
//!
//! Fetches sessions and programs together and renders the first few
//! sessions as today's picks next to the full program list.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::app::{use_session, use_toasts};
use crate::components::bottom_nav::{BottomNav, NavTab};
use crate::components::session_card::SessionCard;
use crate::net::types::{Program, User, YogaSession};
use crate::util::mounted::MountFlag;

/// Number of sessions shown under "Today's Sessions".
pub const TODAY_SESSION_COUNT: usize = 2;

/// Category shortcuts that open Explore pre-filtered.
pub const HOME_CATEGORIES: [&str; 3] = ["Yoga", "Meditation", "Sleep"];

pub(crate) fn today_sessions(sessions: &[YogaSession]) -> &[YogaSession] {
    &sessions[..sessions.len().min(TODAY_SESSION_COUNT)]
}

pub(crate) fn greeting(user: Option<&User>) -> String {
    match user.map(User::first_name).filter(|name| !name.is_empty()) {
        Some(name) => format!("Hi, {name}"),
        None => "Hi there".to_owned(),
    }
}

pub(crate) fn explore_link(category: &str) -> String {
    let query: String = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("category", category)
        .finish();
    format!("/explore?{query}")
}

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let mounted = MountFlag::for_current_owner();

    let sessions = RwSignal::new(Vec::<YogaSession>::new());
    let programs = RwSignal::new(Vec::<Program>::new());
    let loading = RwSignal::new(true);

    let user = move || session.with(|s| s.user().cloned());
    let client = session.with_untracked(|s| s.client().clone());

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let (fetched_sessions, fetched_programs) =
            futures::join!(client.list_sessions(None), client.list_programs());
        mounted.apply(|| {
            match fetched_sessions {
                Ok(list) => sessions.set(list),
                Err(err) => crate::util::notify::notify_error(toasts, &err, "Failed to load sessions"),
            }
            match fetched_programs {
                Ok(list) => programs.set(list),
                Err(err) => crate::util::notify::notify_error(toasts, &err, "Failed to load programs"),
            }
            loading.set(false);
        });
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (client, toasts, mounted);
        loading.set(false);
    }

    view! {
        <div class="page page--home">
            <header class="home-header">
                <h1 class="home-header__greeting">{move || greeting(user().as_ref())}</h1>
                <p class="home-header__subtitle">"Ready for today's practice?"</p>
                {move || {
                    user()
                        .and_then(|u| u.profile_image)
                        .map(|src| view! { <img class="avatar avatar--small" src=src alt="avatar"/> })
                }}
            </header>

            <section class="home-section">
                <h2 class="home-section__title">"Categories"</h2>
                <div class="category-shortcuts">
                    {HOME_CATEGORIES
                        .into_iter()
                        .map(|category| {
                            view! {
                                <a class="category-shortcut" href={explore_link(category)}>
                                    {category}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="home-section">
                <h2 class="home-section__title">"Today's Sessions"</h2>
                <Show when=move || !loading.get() fallback=|| view! { <p class="muted">"Loading..."</p> }>
                    {move || {
                        sessions
                            .with(|all| today_sessions(all).to_vec())
                            .into_iter()
                            .map(|s| view! { <SessionCard session=s trainer_first=true/> })
                            .collect_view()
                    }}
                </Show>
            </section>

            <section class="home-section">
                <h2 class="home-section__title">"Premium Programs"</h2>
                <div class="program-list">
                    {move || programs.get().into_iter().map(|p| view! { <ProgramCard program=p/> }).collect_view()}
                </div>
            </section>

            <BottomNav active=NavTab::Home/>
        </div>
    }
}

/// Card summarizing a program; shared with Explore.
#[component]
pub fn ProgramCard(program: Program) -> impl IntoView {
    let dates = program.date_range();
    let sessions_label = format!("{} sessions", program.sessions_count);

    view! {
        <div class="program-card">
            <img class="program-card__image" src={program.image} alt={program.title.clone()}/>
            <div class="program-card__body">
                <span class="program-card__title">{program.title}</span>
                {dates.map(|d| view! { <span class="program-card__dates">{d}</span> })}
                <span class="program-card__meta">{sessions_label}</span>
            </div>
        </div>
    }
}
