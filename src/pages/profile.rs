//! Profile page: account details, practice stats, and logout.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use std::collections::HashSet;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::{use_session, use_toasts};
use crate::components::bottom_nav::{BottomNav, NavTab};
use crate::net::types::ProgressRecord;
use crate::util::auth::LOGIN_PATH;
use crate::util::mounted::MountFlag;

/// Practice statistics derived from the user's progress rows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProgressStats {
    /// Distinct sessions with any progress row.
    pub started: usize,
    /// Distinct sessions with a completed row.
    pub completed: usize,
}

impl ProgressStats {
    pub fn from_records(records: &[ProgressRecord]) -> Self {
        let mut started = HashSet::new();
        let mut completed = HashSet::new();
        for record in records {
            let Some(session_id) = record.session_id.as_deref() else {
                continue;
            };
            started.insert(session_id);
            if record.completed {
                completed.insert(session_id);
            }
        }
        Self { started: started.len(), completed: completed.len() }
    }

    /// Whole-number share of started sessions that were completed.
    pub fn completion_percent(self) -> usize {
        if self.started == 0 { 0 } else { self.completed * 100 / self.started }
    }

    /// `(value, label)` pairs in display order.
    pub fn tiles(self) -> [(String, &'static str); 3] {
        [
            (self.started.to_string(), "Sessions"),
            (self.completed.to_string(), "Completed"),
            (format!("{}%", self.completion_percent()), "Completion"),
        ]
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let navigate = use_navigate();
    let mounted = MountFlag::for_current_owner();

    let stats = RwSignal::new(ProgressStats::default());
    let user = move || session.with(|s| s.user().cloned());
    let client = session.with_untracked(|s| s.client().clone());

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let result = client.list_progress().await;
        mounted.apply(|| match result {
            Ok(records) => stats.set(ProgressStats::from_records(&records)),
            Err(err) => crate::util::notify::notify_error(toasts, &err, "Failed to load progress"),
        });
    });
    #[cfg(not(feature = "csr"))]
    let _ = (client, mounted, toasts);

    let on_logout = move |_: leptos::ev::MouseEvent| {
        session.update(|s| s.logout());
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <div class="page page--profile">
            <header class="page-header">
                <h1 class="page-header__title">"Profile"</h1>
            </header>

            {move || {
                user()
                    .map(|u| {
                        view! {
                            <section class="profile-card">
                                {u.profile_image.clone().map(|src| view! { <img class="avatar" src=src alt="avatar"/> })}
                                <h2 class="profile-card__name">{u.name.clone()}</h2>
                                <p class="profile-card__email">{u.email.clone()}</p>
                                {u.is_premium.then(|| view! { <span class="badge badge--premium">"Premium Member"</span> })}
                            </section>
                        }
                    })
            }}

            <section class="stats">
                {move || {
                    stats
                        .get()
                        .tiles()
                        .into_iter()
                        .map(|(value, label)| {
                            view! {
                                <div class="stats__tile">
                                    <span class="stats__value">{value}</span>
                                    <span class="stats__label">{label}</span>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </section>

            <button class="logout-button" type="button" on:click=on_logout>
                "Log Out"
            </button>

            <BottomNav active=NavTab::Profile/>
        </div>
    }
}
