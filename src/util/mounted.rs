//! Liveness flag for page-scoped async work.
//!
//! Pages spawn fetches that may resolve after the user has navigated away.
//! A `MountFlag` created inside a component flips to unmounted on cleanup;
//! response handlers check it and drop late results.

#[cfg(test)]
#[path = "mounted_test.rs"]
mod mounted_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Clone, Debug)]
pub struct MountFlag(Arc<AtomicBool>);

impl Default for MountFlag {
    fn default() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }
}

impl MountFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// A flag cleared when the current reactive owner is cleaned up.
    pub fn for_current_owner() -> Self {
        let flag = Self::new();
        let on_drop = flag.clone();
        leptos::prelude::on_cleanup(move || on_drop.unmount());
        flag
    }

    pub fn is_mounted(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    pub fn unmount(&self) {
        self.0.store(false, Ordering::Relaxed);
    }

    /// Run `apply` only while still mounted. Returns whether it ran.
    pub fn apply<F: FnOnce()>(&self, apply: F) -> bool {
        if self.is_mounted() {
            apply();
            true
        } else {
            log::debug!("dropping response for unmounted view");
            false
        }
    }
}
