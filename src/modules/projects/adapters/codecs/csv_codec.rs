use crate::modules::projects::adapters::codecs::{CodecError, RawRecord};
use crate::modules::projects::core::record::ProjectRecord;
use csv::{ReaderBuilder, Trim, WriterBuilder};
use serde::Deserialize;

pub const CSV_HEADER: [&str; 4] = ["date", "name", "category", "hours"];

// Every column is read as text so non-numeric hours reach the coercion rules intact.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(default)]
    date: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    category: String,
    #[serde(default)]
    hours: String,
}

pub fn encode(records: &[ProjectRecord]) -> Result<String, CodecError> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;
    for record in records {
        let date = record.date.format("%Y-%m-%d").to_string();
        let hours = record.hours.to_string();
        writer.write_record([
            date.as_str(),
            record.name.as_str(),
            record.category.as_str(),
            hours.as_str(),
        ])?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| CodecError::Encode(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| CodecError::Encode(e.to_string()))
}

/// Reads rows by header name, so columns may come in any order.
pub fn decode(content: &str) -> Result<Vec<RawRecord>, CodecError> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .from_reader(content.as_bytes());

    let mut rows = Vec::new();
    for row in reader.deserialize::<CsvRow>() {
        let row = row?;
        rows.push(RawRecord {
            name: row.name,
            category: row.category,
            hours: serde_json::Value::String(row.hours),
            date: row.date,
        });
    }
    Ok(rows)
}
