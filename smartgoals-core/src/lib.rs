mod classify;
mod digest;
mod error;
mod export;
mod extract;
mod models;
mod report;
mod roster;

#[cfg(test)]
mod tests;

pub use classify::{Classification, classify_messages};
pub use digest::DailyDigest;
pub use error::{ExportError, ExportResult};
pub use export::write_report_file;
pub use extract::extract_dates;
pub use models::{DatedEntry, ResolvedMessage};
pub use report::render_report;
pub use roster::{ROSTER, is_roster_member};
