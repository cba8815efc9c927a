//! CSV export: visible columns only, over the full filtered/sorted set.

use anyhow::Result;
use chrono::NaiveDate;

use crate::model::{Column, Record};

/// Serialize records to CSV text.
///
/// The header row carries the column ids; each data row carries exactly the
/// given columns' fields in column order. Absent fields serialize as empty
/// strings. Callers pass the full filtered/sorted sequence; pagination is
/// deliberately not applied here.
pub fn export_csv(records: &[&Record], columns: &[Column]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record(columns.iter().map(|c| c.id.as_str()))?;
    for record in records {
        writer.write_record(columns.iter().map(|c| record.display_value(&c.id)))?;
    }

    let bytes = writer.into_inner()?;
    Ok(String::from_utf8(bytes)?)
}

/// `table-export-<ISO-date>.csv`
pub fn export_filename(date: NaiveDate) -> String {
    format!("table-export-{}.csv", date.format("%Y-%m-%d"))
}
