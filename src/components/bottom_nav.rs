//! Fixed bottom navigation shared by the signed-in pages.

#[cfg(test)]
#[path = "bottom_nav_test.rs"]
mod bottom_nav_test;

use leptos::prelude::*;

use crate::util::auth::AppRoute;

/// Tabs shown in the bottom navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavTab {
    Home,
    Explore,
    Schedule,
    Profile,
}

impl NavTab {
    pub const ALL: [NavTab; 4] = [NavTab::Home, NavTab::Explore, NavTab::Schedule, NavTab::Profile];

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Explore => "Explore",
            Self::Schedule => "Schedule",
            Self::Profile => "Profile",
        }
    }

    pub fn route(self) -> AppRoute {
        match self {
            Self::Home => AppRoute::Home,
            Self::Explore => AppRoute::Explore,
            Self::Schedule => AppRoute::Schedule,
            Self::Profile => AppRoute::Profile,
        }
    }
}

#[component]
pub fn BottomNav(active: NavTab) -> impl IntoView {
    view! {
        <nav class="bottom-nav">
            {NavTab::ALL
                .into_iter()
                .map(|tab| {
                    view! {
                        <a
                            class="bottom-nav__item"
                            class:bottom-nav__item--active={tab == active}
                            href={tab.route().path()}
                        >
                            {tab.label()}
                        </a>
                    }
                })
                .collect_view()}
        </nav>
    }
}
