// File formats for exporting and importing the record collection.
//
// Responsibilities
// - Encode validated records as CSV (`date,name,category,hours`) or as the JSON persistence array.
// - Decode uploads into raw, unvalidated rows. Validation happens in the import use case.

use crate::modules::projects::core::record::ProjectRecord;
use serde::Deserialize;
use std::str::FromStr;
use thiserror::Error;

pub mod csv_codec;
pub mod json_codec;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("could not encode export: {0}")]
    Encode(String),

    #[error("unsupported format {0:?}, expected csv or json")]
    UnsupportedFormat(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileFormat {
    #[default]
    Csv,
    Json,
}

impl FileFormat {
    pub fn content_type(self) -> &'static str {
        match self {
            Self::Csv => "text/csv; charset=utf-8",
            Self::Json => "application/json",
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            Self::Csv => "projects.csv",
            Self::Json => "projects.json",
        }
    }
}

impl FromStr for FileFormat {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(CodecError::UnsupportedFormat(other.to_string())),
        }
    }
}

pub fn encode(format: FileFormat, records: &[ProjectRecord]) -> Result<String, CodecError> {
    match format {
        FileFormat::Csv => csv_codec::encode(records),
        FileFormat::Json => json_codec::encode(records),
    }
}

pub fn decode(format: FileFormat, content: &str) -> Result<Vec<RawRecord>, CodecError> {
    match format {
        FileFormat::Csv => csv_codec::decode(content),
        FileFormat::Json => json_codec::decode(content),
    }
}

/// One uploaded row before the ingestion rules ran.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub hours: serde_json::Value,
    #[serde(default)]
    pub date: String,
}

#[cfg(test)]
mod file_format_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("csv", FileFormat::Csv)]
    #[case(" JSON ", FileFormat::Json)]
    fn it_should_parse_the_format(#[case] raw: &str, #[case] expected: FileFormat) {
        assert_eq!(raw.parse::<FileFormat>().unwrap(), expected);
    }

    #[rstest]
    fn it_should_reject_unknown_formats() {
        assert!(matches!(
            "xlsx".parse::<FileFormat>(),
            Err(CodecError::UnsupportedFormat(_))
        ));
    }

    #[rstest]
    fn it_should_name_the_download() {
        assert_eq!(FileFormat::Csv.file_name(), "projects.csv");
        assert_eq!(FileFormat::Json.content_type(), "application/json");
    }
}
