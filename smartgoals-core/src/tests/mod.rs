mod extract;
mod report;

use chrono::{DateTime, TimeZone};
use chrono_tz::Tz;
use chrono_tz::US::Eastern;

use crate::models::ResolvedMessage;

pub(crate) fn eastern(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Tz> {
    Eastern.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
}

pub(crate) fn message(person: &str, timestamp: DateTime<Tz>, text: &str) -> ResolvedMessage {
    ResolvedMessage {
        person: person.to_string(),
        timestamp,
        text: text.to_string(),
        summary: format!("summary of {text}"),
    }
}
