//! Static schedule: one calendar month and a fixed list of upcoming sessions.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

use leptos::prelude::*;

use crate::components::bottom_nav::{BottomNav, NavTab};

pub const CALENDAR_MONTH: &str = "January 2026";
pub const HIGHLIGHTED_DAY: u8 = 21;
pub const DAYS_IN_MONTH: u8 = 31;
pub const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
/// Blank cells before day 1 (the month starts on a Thursday).
pub const FIRST_WEEKDAY_OFFSET: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UpcomingSession {
    pub title: &'static str,
    pub trainer: &'static str,
    pub time: &'static str,
    pub date: &'static str,
    pub duration_min: u32,
}

pub const UPCOMING_SESSIONS: [UpcomingSession; 3] = [
    UpcomingSession {
        title: "Morning Flow Yoga",
        trainer: "Lisa Mary",
        time: "08:00 AM",
        date: "Tomorrow",
        duration_min: 45,
    },
    UpcomingSession {
        title: "Evening Meditation",
        trainer: "David John",
        time: "06:00 PM",
        date: "Tomorrow",
        duration_min: 20,
    },
    UpcomingSession {
        title: "Deep Sleep Journey",
        trainer: "Sarah Chen",
        time: "09:00 PM",
        date: "Jan 23, 2026",
        duration_min: 30,
    },
];

/// Calendar grid cells: leading blanks, then days `1..=DAYS_IN_MONTH`.
pub(crate) fn calendar_cells() -> Vec<Option<u8>> {
    std::iter::repeat_n(None, FIRST_WEEKDAY_OFFSET).chain((1..=DAYS_IN_MONTH).map(Some)).collect()
}

#[component]
pub fn SchedulePage() -> impl IntoView {
    view! {
        <div class="page page--schedule">
            <header class="page-header">
                <h1 class="page-header__title">"Schedule"</h1>
            </header>

            <section class="calendar">
                <h2 class="calendar__month">{CALENDAR_MONTH}</h2>
                <div class="calendar__grid">
                    {WEEKDAYS.into_iter().map(|d| view! { <span class="calendar__weekday">{d}</span> }).collect_view()}
                    {calendar_cells()
                        .into_iter()
                        .map(|cell| match cell {
                            Some(day) => {
                                view! {
                                    <span class="calendar__day" class:calendar__day--active={day == HIGHLIGHTED_DAY}>
                                        {day}
                                    </span>
                                }
                                    .into_any()
                            }
                            None => view! { <span class="calendar__blank"></span> }.into_any(),
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="upcoming">
                <h2 class="upcoming__title">"Upcoming Sessions"</h2>
                {UPCOMING_SESSIONS
                    .into_iter()
                    .map(|s| {
                        view! {
                            <div class="upcoming-item">
                                <div class="upcoming-item__time">
                                    <span>{s.time}</span>
                                    <span class="muted">{s.date}</span>
                                </div>
                                <div class="upcoming-item__body">
                                    <span class="upcoming-item__title">{s.title}</span>
                                    <span class="upcoming-item__meta">
                                        {format!("{} • {} min", s.trainer, s.duration_min)}
                                    </span>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>

            <BottomNav active=NavTab::Schedule/>
        </div>
    }
}
