//! Divine Yoga browser client.
//!
//! A single-page Leptos app for browsing and starting guided yoga,
//! meditation, and sleep sessions. Build with the `csr` feature for the
//! browser; without it the crate compiles natively so the session state
//! machine, API client, and route guard can be tested with mock storage
//! and transport.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
