//! Session browser with category chips and client-side search.
//!
//! DESIGN
//! ======
//! The selected category drives a re-fetch; the search box only filters
//! what is already loaded. Each fetch is tagged with a generation number so
//! a slow response for a previous category cannot overwrite a newer one.

#[cfg(test)]
#[path = "explore_test.rs"]
mod explore_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use super::home::ProgramCard;
use crate::app::{use_session, use_toasts};
use crate::components::bottom_nav::{BottomNav, NavTab};
use crate::components::session_card::SessionCard;
use crate::net::api::ALL_CATEGORIES;
use crate::net::types::{Program, YogaSession};
use crate::util::mounted::MountFlag;

/// Filter chips, in display order.
pub const EXPLORE_CATEGORIES: [&str; 4] = [ALL_CATEGORIES, "Yoga", "Meditation", "Sleep"];

/// Canonical chip for a `?category=` value; unknown values select "All".
pub(crate) fn initial_category(raw: Option<String>) -> &'static str {
    raw.and_then(|value| {
        let value = value.trim().to_owned();
        EXPLORE_CATEGORIES.into_iter().find(|c| c.eq_ignore_ascii_case(&value))
    })
    .unwrap_or(ALL_CATEGORIES)
}

/// Category argument for `list_sessions`.
pub(crate) fn category_filter(selected: &str) -> Option<&str> {
    (selected != ALL_CATEGORIES).then_some(selected)
}

/// Case-insensitive match on title or trainer name. A blank query keeps
/// everything.
pub(crate) fn filter_sessions(sessions: &[YogaSession], query: &str) -> Vec<YogaSession> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return sessions.to_vec();
    }
    sessions
        .iter()
        .filter(|s| s.title.to_lowercase().contains(&needle) || s.trainer_name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[component]
pub fn ExplorePage() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let query = use_query_map();
    let mounted = MountFlag::for_current_owner();

    let category = RwSignal::new(initial_category(query.with_untracked(|q| q.get("category"))));
    let search = RwSignal::new(String::new());
    let sessions = RwSignal::new(Vec::<YogaSession>::new());
    let programs = RwSignal::new(Vec::<Program>::new());
    let loading = RwSignal::new(true);
    let generation = Arc::new(AtomicU64::new(0));

    let client = session.with_untracked(|s| s.client().clone());

    {
        let client = client.clone();
        let mounted = mounted.clone();
        Effect::new(move |_| {
            let selected = category.get();
            let ticket = generation.fetch_add(1, Ordering::Relaxed) + 1;
            loading.set(true);

            #[cfg(feature = "csr")]
            {
                let client = client.clone();
                let mounted = mounted.clone();
                let generation = Arc::clone(&generation);
                leptos::task::spawn_local(async move {
                    let result = client.list_sessions(category_filter(selected)).await;
                    if generation.load(Ordering::Relaxed) != ticket {
                        log::debug!("ignoring stale sessions for category {selected}");
                        return;
                    }
                    mounted.apply(|| {
                        match result {
                            Ok(list) => sessions.set(list),
                            Err(err) => crate::util::notify::notify_error(toasts, &err, "Failed to load sessions"),
                        }
                        loading.set(false);
                    });
                });
            }
            #[cfg(not(feature = "csr"))]
            {
                let _ = (&client, &mounted, selected, ticket);
                loading.set(false);
            }
        });
    }

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let result = client.list_programs().await;
        mounted.apply(|| match result {
            Ok(list) => programs.set(list),
            Err(err) => crate::util::notify::notify_error(toasts, &err, "Failed to load programs"),
        });
    });
    #[cfg(not(feature = "csr"))]
    let _ = (client, mounted, toasts);

    let visible = move || sessions.with(|all| search.with(|q| filter_sessions(all, q)));

    view! {
        <div class="page page--explore">
            <header class="page-header">
                <h1 class="page-header__title">"Explore"</h1>
            </header>

            <input
                class="search-input"
                type="search"
                placeholder="Search sessions or trainers"
                prop:value=move || search.get()
                on:input=move |ev| search.set(event_target_value(&ev))
            />

            <div class="category-chips">
                {EXPLORE_CATEGORIES
                    .into_iter()
                    .map(|chip| {
                        view! {
                            <button
                                class="category-chip"
                                class:category-chip--active=move || category.get() == chip
                                type="button"
                                on:click=move |_| category.set(chip)
                            >
                                {chip}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <section class="explore-section">
                <h2 class="explore-section__title">"Sessions"</h2>
                <Show when=move || !loading.get() fallback=|| view! { <p class="muted">"Loading..."</p> }>
                    {move || {
                        let list = visible();
                        if list.is_empty() {
                            view! { <p class="muted">"No sessions found"</p> }.into_any()
                        } else {
                            list.into_iter()
                                .map(|s| view! { <SessionCard session=s/> })
                                .collect_view()
                                .into_any()
                        }
                    }}
                </Show>
            </section>

            <section class="explore-section">
                <h2 class="explore-section__title">"Programs"</h2>
                <div class="program-list">
                    {move || programs.get().into_iter().map(|p| view! { <ProgramCard program=p/> }).collect_view()}
                </div>
            </section>

            <BottomNav active=NavTab::Explore/>
        </div>
    }
}
