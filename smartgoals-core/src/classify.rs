use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate};
use chrono_tz::Tz;

use crate::extract::extract_dates;
use crate::models::{DatedEntry, ResolvedMessage};

/// Where each roster message landed: date-keyed entry buckets plus the
/// submission index for today.
#[derive(Debug, Default)]
pub struct Classification {
    submissions: Vec<(String, DateTime<Tz>)>,
    pub buckets: BTreeMap<NaiveDate, Vec<DatedEntry>>,
}

impl Classification {
    /// Person → timestamp counted as "submitted today", in first-seen order.
    pub fn submissions(&self) -> &[(String, DateTime<Tz>)] {
        &self.submissions
    }

    // Last write wins. A person keeps their first-seen position so equal
    // timestamps later sort in arrival order.
    fn record_submission(&mut self, person: &str, timestamp: DateTime<Tz>) {
        match self.submissions.iter_mut().find(|(name, _)| name == person) {
            Some((_, ts)) => *ts = timestamp,
            None => self.submissions.push((person.to_string(), timestamp)),
        }
    }

    pub(crate) fn into_parts(
        self,
    ) -> (
        Vec<(String, DateTime<Tz>)>,
        BTreeMap<NaiveDate, Vec<DatedEntry>>,
    ) {
        (self.submissions, self.buckets)
    }
}

/// Bucket every message by the calendar dates it is "for".
///
/// A message with no embedded date is for `today`; a date equal to `today`
/// also marks its sender as submitted.
pub fn classify_messages(messages: &[ResolvedMessage], today: NaiveDate) -> Classification {
    let mut classification = Classification::default();

    for msg in messages {
        let mut dates = extract_dates(&msg.text);
        if dates.is_empty() {
            dates.push(today);
        }

        for date in dates {
            classification
                .buckets
                .entry(date)
                .or_default()
                .push(DatedEntry {
                    person: msg.person.clone(),
                    timestamp: msg.timestamp,
                    text: msg.text.clone(),
                    summary: msg.summary.clone(),
                });

            if date == today {
                classification.record_submission(&msg.person, msg.timestamp);
            }
        }
    }

    classification
}
