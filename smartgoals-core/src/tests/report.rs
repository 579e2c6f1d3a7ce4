use chrono::NaiveDate;

use crate::classify::classify_messages;
use crate::models::ResolvedMessage;
use crate::report::render_report;
use crate::tests::{eastern, message};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
}

#[test]
fn test_report_layout() {
    let roster = ["Alice", "Bob"];
    let messages = vec![message("Alice", eastern(2024, 3, 5, 10, 0), "Did X")];

    let digest = classify_messages(&messages, today()).into_digest(&roster, today());
    let report = render_report(&digest);

    assert!(report.starts_with("*Daily Update - 2024-03-05*"));
    assert!(report.contains("*Submitted Users:*"));
    assert!(report.contains("Alice           | 10:00 AM"));
    assert!(report.contains("*Not Submitted Users:*"));
    assert!(report.contains("Bob"));
    assert!(report.contains("*Summaries for 2024-03-05:*"));
    assert!(report.contains("• Alice: summary of Did X"));
}

#[test]
fn test_summary_blocks_in_date_order() {
    let roster = ["Alice"];
    let messages = vec![
        message("Alice", eastern(2024, 3, 5, 10, 0), "Today's work"),
        message("Alice", eastern(2024, 3, 5, 10, 5), "Backfill for 2024-03-01"),
    ];

    let digest = classify_messages(&messages, today()).into_digest(&roster, today());
    let report = render_report(&digest);

    let first = report.find("*Summaries for 2024-03-01:*").unwrap();
    let second = report.find("*Summaries for 2024-03-05:*").unwrap();
    assert!(first < second);
}

#[test]
fn test_failed_summary_still_reported() {
    let roster = ["Alice", "Bob"];
    let messages = vec![
        ResolvedMessage {
            person: "Alice".to_string(),
            timestamp: eastern(2024, 3, 5, 10, 0),
            text: "Did X".to_string(),
            summary: "Error generating summary.".to_string(),
        },
        message("Bob", eastern(2024, 3, 5, 11, 0), "Did Y"),
    ];

    let digest = classify_messages(&messages, today()).into_digest(&roster, today());
    let report = render_report(&digest);

    // One failed summary never hides the others
    assert!(report.contains("• Alice: Error generating summary."));
    assert!(report.contains("• Bob: summary of Did Y"));
}

#[test]
fn test_empty_digest_still_renders_sections() {
    let roster = ["Alice"];
    let digest = classify_messages(&[], today()).into_digest(&roster, today());
    let report = render_report(&digest);

    assert!(report.contains("*Submitted Users:*"));
    assert!(report.contains("*Not Submitted Users:*"));
    assert!(!report.contains("*Summaries for"));
}
