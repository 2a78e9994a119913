//! Route-level pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each page is mounted behind the auth guard in `app.rs`. Pages pull the
//! session and toast queue from context, fetch what they need on mount,
//! and never share fetched data with each other.

pub mod explore;
pub mod home;
pub mod login;
pub mod not_found;
pub mod profile;
pub mod schedule;
pub mod session_detail;
pub mod signup;
pub mod welcome;
