//! Whitepaper table state: cached records, the label filter, and per-row expansion.

#[cfg(test)]
#[path = "whitepapers_test.rs"]
mod whitepapers_test;

use std::collections::HashMap;

use research::whitepapers::{SummaryView, WhitepaperRecord, filter_records, summary_view};

#[derive(Clone, Debug, Default)]
pub struct WhitepapersState {
    pub items: Vec<WhitepaperRecord>,
    pub loading: bool,
    pub filter: String,
    pub expanded: HashMap<String, bool>,
    pub error: Option<String>,
}

impl WhitepapersState {
    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// Store a full reload. Records only ever change through this path.
    pub fn finish_load(&mut self, result: Result<Vec<WhitepaperRecord>, String>) {
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(e) => self.error = Some(e),
        }
        self.loading = false;
    }

    /// Records whose label contains the filter text, in listing order.
    pub fn visible(&self) -> Vec<WhitepaperRecord> {
        filter_records(&self.items, &self.filter).into_iter().cloned().collect()
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.get(id).copied().unwrap_or(false)
    }

    pub fn toggle_expand(&mut self, id: &str) {
        let next = !self.is_expanded(id);
        self.expanded.insert(id.to_owned(), next);
    }

    /// Summary lines to render for `record` given its expansion flag.
    pub fn summary(&self, record: &WhitepaperRecord) -> SummaryView {
        summary_view(&record.perplexity_summary, self.is_expanded(&record.id))
    }
}
