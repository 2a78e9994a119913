//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate routing policy and browser/environment concerns
//! from page and component logic to improve reuse and testability.

pub mod auth;
pub mod mounted;
pub mod notify;
