//! Token search page state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Holds the search form, the watchlist selector options, the details dialog,
//! and the payload rendered below the form. `list_rev` and `watchlist_rev` are
//! the parent-owned refresh counters handed to list collaborators.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use research::tokens::{SearchOutcome, TokenDataPayload, TokenQuery, TokenReport, Watchlist};

/// Value stored in `TokenQuery.watchlist` when `watchlist` is selected.
/// The search endpoint files tokens by watchlist name.
pub fn watchlist_option_value(watchlist: &Watchlist) -> String {
    watchlist.name.clone()
}

/// What the details dialog is showing.
#[derive(Clone, Debug, PartialEq)]
pub enum DialogContent {
    Found(Box<TokenReport>),
    NotFound,
}

#[derive(Clone, Debug, Default)]
pub struct SearchState {
    pub query: TokenQuery,
    pub watchlists: Vec<Watchlist>,
    pub busy: bool,
    pub dialog: Option<DialogContent>,
    /// Payload rendered in full below the form once "View details" is chosen.
    pub token_data: Option<TokenDataPayload>,
    /// Blocking alert text.
    pub alert: Option<String>,
    pub list_rev: u64,
    pub watchlist_rev: u64,
}

impl SearchState {
    pub fn can_submit(&self) -> bool {
        self.query.is_submittable() && !self.busy
    }

    /// Apply a classified search reply.
    pub fn apply_outcome(&mut self, outcome: SearchOutcome) {
        self.busy = false;
        match outcome {
            SearchOutcome::Found(report) => {
                self.dialog = Some(DialogContent::Found(report));
                self.list_rev += 1;
            }
            SearchOutcome::NotFound => self.dialog = Some(DialogContent::NotFound),
            SearchOutcome::Failed(message) => self.alert = Some(message),
        }
    }

    /// The search request never reached the upstream.
    pub fn apply_transport_error(&mut self, error: String) {
        self.busy = false;
        self.alert = Some(error);
    }

    /// Move the dialog's payload below the form and close the dialog.
    pub fn view_details(&mut self) {
        if let Some(DialogContent::Found(report)) = self.dialog.take() {
            self.token_data = Some(report.response);
        }
    }

    pub fn close_dialog(&mut self) {
        self.dialog = None;
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Called after a watchlist is created elsewhere.
    pub fn bump_watchlists(&mut self) {
        self.watchlist_rev += 1;
    }
}
