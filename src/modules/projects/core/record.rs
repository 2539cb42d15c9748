// One logged unit of craft work.
//
// Purpose
// - The sole entity of the projects context. Everything else reads or produces it.
//
// Responsibilities
// - Carry already validated data. Validation lives in the add_project use case.
// - Serialize in the persistence shape: `{name, category, hours, date}`,
//   with the date as `YYYY-MM-DD`.
//
// Category is an opaque, case sensitive grouping key. Display casing is a presentation concern.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const SUGGESTED_CATEGORIES: [&str; 5] = ["knitting", "painting", "paper", "sewing", "3D"];

/// Selector value meaning "use the custom category supplied alongside".
pub const OTHER_CATEGORY: &str = "other";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub name: String,
    pub category: String,
    pub hours: f64,
    pub date: NaiveDate,
}

impl ProjectRecord {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        hours: f64,
        date: NaiveDate,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            hours,
            date,
        }
    }
}
