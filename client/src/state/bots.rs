//! Bot list state for the bots page.

#[cfg(test)]
#[path = "bots_test.rs"]
mod bots_test;

use research::bots::Bot;

/// Cached bot listing, replaced wholesale on every refresh.
///
/// Starts in the loading state so the first render never claims the list is
/// empty before the initial fetch.
#[derive(Clone, Debug)]
pub struct BotsState {
    pub items: Vec<Bot>,
    pub loading: bool,
}

impl Default for BotsState {
    fn default() -> Self {
        Self { items: Vec::new(), loading: true }
    }
}

impl BotsState {
    /// Mark a listing request as in flight.
    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// Store the outcome of a listing request.
    ///
    /// A failed request keeps the previous items; the server already merged
    /// whatever upstreams answered.
    pub fn finish_load(&mut self, result: Result<Vec<Bot>, String>) {
        if let Ok(items) = result {
            self.items = items;
        }
        self.loading = false;
    }
}
