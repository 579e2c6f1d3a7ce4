use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::digest::DailyDigest;
use crate::error::ExportResult;

/// Write the digest to a flat file: submitted and not-submitted blocks
/// followed by a name/date/summary CSV table.
pub fn write_report_file(path: &Path, digest: &DailyDigest) -> ExportResult<()> {
    let mut file = File::create(path)?;

    writeln!(file, "Submitted Users:")?;
    for (person, timestamp) in &digest.submitted {
        writeln!(file, "{person} - {}", timestamp.format("%Y-%m-%d %H:%M:%S"))?;
    }
    writeln!(file)?;

    writeln!(file, "Not Submitted Users:")?;
    for person in &digest.absent {
        writeln!(file, "{person}")?;
    }
    writeln!(file)?;

    let mut writer = csv::Writer::from_writer(file);
    writer.write_record(["name", "date", "summary"])?;
    for (date, entries) in &digest.buckets {
        let date = date.format("%Y-%m-%d").to_string();
        for entry in entries {
            writer.write_record([entry.person.as_str(), &date, entry.summary.as_str()])?;
        }
    }
    writer.flush()?;

    Ok(())
}
