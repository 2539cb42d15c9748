// Command data type for logging a project.
//
// Purpose
// - Express a user submission exactly as it arrived, before any ingestion rule ran.
//
// Responsibilities
// - Carry raw input for the decider to trim, coerce and validate.
// - Be independent of transport layer details (not tied to HTTP, GraphQL or an import file).

use crate::modules::projects::adapters::codecs::RawRecord;

#[derive(Debug, Clone, PartialEq)]
pub struct AddProject {
    pub name: String,
    pub category: String,
    /// Used when `category` is the "other" selector.
    pub custom_category: Option<String>,
    /// Number, numeric text, or anything else (coerced to zero).
    pub hours: serde_json::Value,
    /// `YYYY-MM-DD`. Missing means today.
    pub date: Option<String>,
}

impl From<RawRecord> for AddProject {
    fn from(row: RawRecord) -> Self {
        Self {
            name: row.name,
            category: row.category,
            custom_category: None,
            hours: row.hours,
            date: Some(row.date),
        }
    }
}
