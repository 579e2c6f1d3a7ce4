use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

pub(crate) const ISO_PATTERN_STR: &str = r"\b\d{4}-\d{2}-\d{2}\b";
pub(crate) const US_PATTERN_STR: &str = r"\b\d{2}/\d{2}/\d{4}\b";
pub(crate) const EUROPEAN_PATTERN_STR: &str = r"\b\d{2}-\d{2}-\d{4}\b";

static ISO_PATTERN: OnceLock<Regex> = OnceLock::new();
static US_PATTERN: OnceLock<Regex> = OnceLock::new();
static EUROPEAN_PATTERN: OnceLock<Regex> = OnceLock::new();

fn iso_pattern() -> &'static Regex {
    ISO_PATTERN.get_or_init(|| Regex::new(ISO_PATTERN_STR).unwrap())
}

fn us_pattern() -> &'static Regex {
    US_PATTERN.get_or_init(|| Regex::new(US_PATTERN_STR).unwrap())
}

fn european_pattern() -> &'static Regex {
    EUROPEAN_PATTERN.get_or_init(|| Regex::new(EUROPEAN_PATTERN_STR).unwrap())
}

/// Pull every embedded calendar date out of a message.
///
/// Patterns are tried in precedence order (ISO `YYYY-MM-DD`, then US
/// `MM/DD/YYYY`, then European `DD-MM-YYYY`); the first pattern that parses a
/// given text span claims it. Day/month order is inherently ambiguous and the
/// precedence is policy, not validation. Calendar-invalid matches are skipped.
///
/// Returned dates are unique and in order of first appearance.
pub fn extract_dates(text: &str) -> Vec<NaiveDate> {
    let candidates = [
        (iso_pattern(), "%Y-%m-%d"),
        (us_pattern(), "%m/%d/%Y"),
        (european_pattern(), "%d-%m-%Y"),
    ];

    let mut claimed: Vec<(usize, usize)> = Vec::new();
    let mut found: Vec<(usize, NaiveDate)> = Vec::new();

    for (pattern, format) in candidates {
        for m in pattern.find_iter(text) {
            if claimed.iter().any(|&(start, end)| m.start() < end && start < m.end()) {
                continue;
            }

            let Ok(date) = NaiveDate::parse_from_str(m.as_str(), format) else {
                continue;
            };

            claimed.push((m.start(), m.end()));
            found.push((m.start(), date));
        }
    }

    found.sort_by_key(|&(offset, _)| offset);

    let mut dates: Vec<NaiveDate> = Vec::with_capacity(found.len());
    for (_, date) in found {
        if !dates.contains(&date) {
            dates.push(date);
        }
    }

    dates
}
