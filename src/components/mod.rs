//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared page chrome (navigation, cards, toasts) and read
//! shared state from Leptos context providers.

pub mod bottom_nav;
pub mod session_card;
pub mod toaster;
