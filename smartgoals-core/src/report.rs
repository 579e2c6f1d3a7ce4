use std::fmt::Write;

use crate::digest::DailyDigest;

/// Render the digest into a single Slack-markdown report string.
///
/// Header, fixed-width submitted table, not-submitted list, then one
/// summary block per date in ascending date order.
pub fn render_report(digest: &DailyDigest) -> String {
    let mut report = format!("*Daily Update - {}*\n", digest.today.format("%Y-%m-%d"));

    report.push_str("\n*Submitted Users:*\n");
    report.push_str("```");
    report.push_str("Name            | Timestamp\n");
    report.push_str("----------------|----------------\n");
    for (person, timestamp) in &digest.submitted {
        let _ = writeln!(report, "{person:<15} | {}", timestamp.format("%I:%M %p"));
    }
    report.push_str("```\n");

    report.push_str("\n*Not Submitted Users:*\n");
    report.push_str("```");
    report.push_str("Name\n");
    report.push_str("---------------\n");
    for person in &digest.absent {
        let _ = writeln!(report, "{person}");
    }
    report.push_str("```\n");

    for (date, entries) in &digest.buckets {
        let _ = writeln!(report, "\n*Summaries for {}:*", date.format("%Y-%m-%d"));
        for entry in entries {
            let _ = writeln!(report, "• {}: {}", entry.person, entry.summary);
        }
    }

    report
}
