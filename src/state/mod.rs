//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `token_store`, `toast`) so pages can
//! depend on small focused models. Page data itself stays page-local.

pub mod auth;
pub mod toast;
pub mod token_store;
