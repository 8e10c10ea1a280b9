//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds only the upstream adapter; the dashboard keeps no data of its own.

use std::sync::Arc;

use crate::upstream::UpstreamApi;

/// Clone is required by Axum; the adapter is shared behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub upstream: Arc<dyn UpstreamApi>,
}

impl AppState {
    #[must_use]
    pub fn new(upstream: Arc<dyn UpstreamApi>) -> Self {
        Self { upstream }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
