use super::*;

fn record(id: &str, label: &str, summary: &str) -> WhitepaperRecord {
    WhitepaperRecord {
        id: id.to_owned(),
        label: label.to_owned(),
        perplexity_summary: summary.to_owned(),
        created_at: "2024-03-05T14:30:00Z".to_owned(),
    }
}

fn numbered_lines(n: usize) -> String {
    (1..=n).map(|i| format!("line {i}")).collect::<Vec<_>>().join("\n")
}

#[test]
fn listing_decodes_numeric_ids() {
    let json = r#"{"whitepapers":[{"id":3,"label":"BTC","perplexity_summary":"x","created_at":"2024-01-01T00:00:00Z"}]}"#;
    let listing: WhitepaperListing = serde_json::from_str(json).unwrap();
    assert_eq!(listing.whitepapers[0].id, "3");
}

#[test]
fn filter_is_case_insensitive_substring() {
    let records = vec![record("1", "Bitcoin", ""), record("2", "Ethereum", ""), record("3", "BitTorrent", "")];
    let hits: Vec<&str> = filter_records(&records, "BIT").iter().map(|r| r.id.as_str()).collect();
    assert_eq!(hits, vec!["1", "3"]);
    assert_eq!(filter_records(&records, "").len(), 3);
    assert!(filter_records(&records, "solana").is_empty());
}

#[test]
fn collapsed_long_summary_shows_preview_and_show_more() {
    let view = summary_view(&numbered_lines(8), false);
    assert_eq!(view.lines.len(), 5);
    assert_eq!(view.lines[4].text, "line 5");
    assert_eq!(view.toggle, Some(SummaryToggle::ShowMore));
    assert_eq!(view.total_lines, 8);
    assert!(view.lines.iter().all(|l| !l.heading));
}

#[test]
fn expanded_long_summary_shows_everything_and_show_less() {
    let view = summary_view(&numbered_lines(8), true);
    assert_eq!(view.lines.len(), 8);
    assert_eq!(view.toggle, Some(SummaryToggle::ShowLess));
}

#[test]
fn short_summary_has_no_control() {
    let view = summary_view(&numbered_lines(5), false);
    assert_eq!(view.lines.len(), 5);
    assert_eq!(view.toggle, None);
}

#[test]
fn heading_lines_are_flagged() {
    let view = summary_view(
        "General Summary\nBitcoin is a currency.\n  Team Summary  \n1. Tokenomics Summary:\nrevenue summary is lowercase",
        true,
    );
    let flags: Vec<bool> = view.lines.iter().map(|l| l.heading).collect();
    assert_eq!(flags, vec![true, false, true, true, false]);
}

#[test]
fn empty_summary_is_one_blank_line() {
    let view = summary_view("", false);
    assert_eq!(view.lines, vec![SummaryLine { text: String::new(), heading: false }]);
    assert_eq!(view.toggle, None);
}

#[test]
fn export_joins_label_summary_and_date() {
    let r = record("1", "Bitcoin", "General Summary\nDigital cash.");
    assert_eq!(export_text(&r), "Bitcoin\nGeneral Summary\nDigital cash.\n05/03/2024, 14:30");
    assert_eq!(export_file_name(&r), "Bitcoin_summary.txt");
}
