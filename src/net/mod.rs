//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` builds and decodes requests, `transport` performs them, `error`
//! classifies failures, and `types` defines the wire records.

pub mod api;
pub mod error;
#[cfg(test)]
pub(crate) mod mock;
pub mod transport;
pub mod types;
