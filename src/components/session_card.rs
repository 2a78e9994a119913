//! Card linking to a session's detail page.

#[cfg(test)]
#[path = "session_card_test.rs"]
mod session_card_test;

use leptos::prelude::*;

use crate::net::types::YogaSession;
use crate::util::auth::AppRoute;

/// `"45 min • Yoga"` style caption; category omitted when unknown.
pub(crate) fn session_meta(session: &YogaSession) -> String {
    if session.category.is_empty() {
        format!("{} min", session.duration)
    } else {
        format!("{} min • {}", session.duration, session.category)
    }
}

/// A clickable card representing a session.
///
/// `trainer_first` swaps the heading to the trainer's name, as on the home
/// feed.
#[component]
pub fn SessionCard(session: YogaSession, #[prop(optional)] trainer_first: bool) -> impl IntoView {
    let href = AppRoute::SessionDetail(session.id.clone()).path();
    let meta = session_meta(&session);
    let (heading, subheading) = if trainer_first {
        (session.trainer_name.clone(), session.title.clone())
    } else {
        (session.title.clone(), session.trainer_name.clone())
    };

    view! {
        <a class="session-card" href=href>
            <img class="session-card__image" src={session.trainer_image} alt={session.trainer_name}/>
            <span class="session-card__body">
                <span class="session-card__title">{heading}</span>
                <span class="session-card__subtitle">{subheading}</span>
                <span class="session-card__meta">{meta}</span>
            </span>
            <span class="session-card__play" aria-hidden="true">"▶"</span>
        </a>
    }
}
