// Shared test fixtures for ProjectRecord collections.

use crate::modules::projects::core::record::ProjectRecord;
use chrono::NaiveDate;

pub fn date(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap()
}

pub fn record(category: &str, hours: f64, on: &str) -> ProjectRecord {
    ProjectRecordBuilder::new()
        .name(format!("{category} on {on}"))
        .category(category)
        .hours(hours)
        .date(on)
        .build()
}

/// knitting 2h + 3h in January, painting 1h in February.
pub fn scenario_a() -> Vec<ProjectRecord> {
    vec![
        record("knitting", 2.0, "2024-01-05"),
        record("knitting", 3.0, "2024-01-20"),
        record("painting", 1.0, "2024-02-01"),
    ]
}

pub struct ProjectRecordBuilder {
    inner: ProjectRecord,
}

impl Default for ProjectRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectRecordBuilder {
    pub fn new() -> Self {
        Self {
            inner: ProjectRecord::new("Winter scarf", "knitting", 2.0, date("2024-01-05")),
        }
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn category(mut self, v: impl Into<String>) -> Self {
        self.inner.category = v.into();
        self
    }

    pub fn hours(mut self, v: f64) -> Self {
        self.inner.hours = v;
        self
    }

    pub fn date(mut self, v: &str) -> Self {
        self.inner.date = date(v);
        self
    }

    pub fn build(self) -> ProjectRecord {
        self.inner
    }
}

#[cfg(test)]
mod project_record_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new() {
        let built = ProjectRecordBuilder::default().build();
        assert_eq!(built.name, "Winter scarf");
        assert_eq!(built.category, "knitting");
        assert_eq!(built.hours, 2.0);
        assert_eq!(built.date, date("2024-01-05"));
    }

    #[rstest]
    fn setters_override_all_fields() {
        let built = ProjectRecordBuilder::new()
            .name("Tote bag")
            .category("sewing")
            .hours(4.5)
            .date("2024-03-09")
            .build();
        assert_eq!(built.name, "Tote bag");
        assert_eq!(built.category, "sewing");
        assert_eq!(built.hours, 4.5);
        assert_eq!(built.date, date("2024-03-09"));
    }
}
