use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate};
use chrono_tz::Tz;

use crate::classify::Classification;
use crate::models::DatedEntry;

/// Immutable aggregate handed to the reporter.
#[derive(Debug)]
pub struct DailyDigest {
    pub today: NaiveDate,
    /// Submitted roster members, ascending by submission timestamp.
    pub submitted: Vec<(String, DateTime<Tz>)>,
    /// Roster members without a submission today, in roster order.
    pub absent: Vec<String>,
    pub buckets: BTreeMap<NaiveDate, Vec<DatedEntry>>,
}

impl Classification {
    pub fn into_digest(self, roster: &[&str], today: NaiveDate) -> DailyDigest {
        let (mut submitted, buckets) = self.into_parts();

        // Stable sort: equal timestamps keep arrival order
        submitted.sort_by_key(|&(_, timestamp)| timestamp);

        let absent = roster
            .iter()
            .filter(|name| !submitted.iter().any(|(person, _)| person == *name))
            .map(|name| name.to_string())
            .collect();

        DailyDigest {
            today,
            submitted,
            absent,
            buckets,
        }
    }
}
