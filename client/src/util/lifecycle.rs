//! View lifetime flag for async completions.
//!
//! Pages spawn fetches with `spawn_local`; a reply can land after the page
//! was torn down. Every completion checks the flag before writing state and
//! drops the reply otherwise.

#[cfg(test)]
#[path = "lifecycle_test.rs"]
mod lifecycle_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Clone, Debug)]
pub struct ViewLifecycle {
    alive: Arc<AtomicBool>,
}

impl Default for ViewLifecycle {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewLifecycle {
    pub fn new() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }

    /// Create a flag that ends when the current reactive owner is cleaned up.
    pub fn for_current_view() -> Self {
        let lifecycle = Self::new();
        let ending = lifecycle.clone();
        leptos::prelude::on_cleanup(move || ending.end());
        lifecycle
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    pub fn end(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }

    /// Whether a completion for `what` may still touch view state.
    pub fn accepts(&self, what: &str) -> bool {
        let alive = self.is_alive();
        if !alive {
            #[cfg(feature = "hydrate")]
            log::debug!("dropping stale {what} response after view cleanup");
            #[cfg(not(feature = "hydrate"))]
            let _ = what;
        }
        alive
    }
}
