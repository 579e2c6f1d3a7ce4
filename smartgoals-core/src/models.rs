use chrono::DateTime;
use chrono_tz::Tz;

/// A channel message attributed to a roster member, with its summary attached.
#[derive(Debug, Clone)]
pub struct ResolvedMessage {
    pub person: String,
    pub timestamp: DateTime<Tz>,
    pub text: String,
    pub summary: String,
}

/// One (message, mentioned-date) pairing, destined for that date's bucket.
#[derive(Debug, Clone)]
pub struct DatedEntry {
    pub person: String,
    pub timestamp: DateTime<Tz>,
    pub text: String,
    pub summary: String,
}
