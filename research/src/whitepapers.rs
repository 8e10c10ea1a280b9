//! Whitepaper summary records: filtering, collapsed/expanded summary shaping
//! and plain-text export.

#[cfg(test)]
#[path = "whitepapers_test.rs"]
mod whitepapers_test;

use serde::{Deserialize, Serialize};

use crate::format::format_date;
use crate::wire::lenient_id;

/// Lines of summary shown while a row is collapsed.
pub const SUMMARY_PREVIEW_LINES: usize = 5;

/// Phrases that mark a summary line as a bold subheading.
pub const SECTION_HEADINGS: [&str; 9] = [
    "General Summary",
    "Competitor Summary",
    "Community Summary",
    "Platform Data Summary",
    "Tokenomics Summary",
    "Circulating Supply Summary",
    "Revenue Summary",
    "Team Summary",
    "Partners and Investors Summary",
];

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhitepaperRecord {
    #[serde(deserialize_with = "lenient_id")]
    pub id: String,
    #[serde(default)]
    pub label: String,
    /// Newline-delimited text with section headings.
    #[serde(default)]
    pub perplexity_summary: String,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhitepaperListing {
    #[serde(default)]
    pub whitepapers: Vec<WhitepaperRecord>,
}

/// Case-insensitive substring match against the record label.
#[must_use]
pub fn matches_filter(record: &WhitepaperRecord, filter: &str) -> bool {
    record.label.to_lowercase().contains(&filter.to_lowercase())
}

#[must_use]
pub fn filter_records<'a>(records: &'a [WhitepaperRecord], filter: &str) -> Vec<&'a WhitepaperRecord> {
    records.iter().filter(|r| matches_filter(r, filter)).collect()
}

/// Expand/collapse control shown under a summary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SummaryToggle {
    ShowMore,
    ShowLess,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryLine {
    pub text: String,
    pub heading: bool,
}

/// The lines to render for one summary plus the control below them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryView {
    pub lines: Vec<SummaryLine>,
    pub toggle: Option<SummaryToggle>,
    pub total_lines: usize,
}

#[must_use]
pub fn is_section_heading(line: &str) -> bool {
    SECTION_HEADINGS.iter().any(|h| line.contains(h))
}

/// Shape a summary for display.
///
/// Collapsed summaries show the first [`SUMMARY_PREVIEW_LINES`] lines and a
/// "show more" control when there is more to show; expanded summaries show
/// everything and a "show less" control.
#[must_use]
pub fn summary_view(summary: &str, expanded: bool) -> SummaryView {
    let all: Vec<&str> = summary.split('\n').collect();
    let total_lines = all.len();
    let shown = if expanded { total_lines } else { total_lines.min(SUMMARY_PREVIEW_LINES) };
    let toggle = if expanded {
        Some(SummaryToggle::ShowLess)
    } else if total_lines > SUMMARY_PREVIEW_LINES {
        Some(SummaryToggle::ShowMore)
    } else {
        None
    };
    let lines = all
        .into_iter()
        .take(shown)
        .map(|text| SummaryLine { text: text.to_owned(), heading: is_section_heading(text) })
        .collect();
    SummaryView { lines, toggle, total_lines }
}

/// Plain-text export: label, summary, then the formatted creation time.
#[must_use]
pub fn export_text(record: &WhitepaperRecord) -> String {
    format!("{}\n{}\n{}", record.label, record.perplexity_summary, format_date(&record.created_at))
}

#[must_use]
pub fn export_file_name(record: &WhitepaperRecord) -> String {
    format!("{}_summary.txt", record.label)
}
