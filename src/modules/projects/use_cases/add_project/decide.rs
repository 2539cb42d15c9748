// Pure decision function for the record ingestion boundary.
//
// Purpose
// - Turn a raw submission into a well formed ProjectRecord, or reject it.
//
// Responsibilities
// - Trim the name and reject it when empty.
// - Resolve the "other" selector to the custom category, rejecting it when none was given.
// - Coerce non-numeric, missing or non-finite hours to 0.0. Reject negative hours.
// - Parse the date as `YYYY-MM-DD`, defaulting to `today` when absent.
// - Never perform input or output.

use crate::modules::projects::core::record::{OTHER_CATEGORY, ProjectRecord};
use crate::modules::projects::use_cases::add_project::command::AddProject;
use chrono::NaiveDate;
use serde_json::Value;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("project name must not be empty")]
    EmptyName,

    #[error("category must not be empty")]
    EmptyCategory,

    #[error("category \"other\" needs a custom category")]
    UnresolvedOtherCategory,

    #[error("hours must not be negative")]
    NegativeHours,

    #[error("invalid date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),
}

pub fn decide_add(command: AddProject, today: NaiveDate) -> Result<ProjectRecord, DecideError> {
    let name = command.name.trim();
    if name.is_empty() {
        return Err(DecideError::EmptyName);
    }

    let category = resolve_category(&command.category, command.custom_category.as_deref())?;

    let hours = coerce_hours(&command.hours);
    if hours < 0.0 {
        return Err(DecideError::NegativeHours);
    }

    let date = match command.date.as_deref() {
        None => today,
        Some(raw) => NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
            .map_err(|_| DecideError::InvalidDate(raw.to_string()))?,
    };

    Ok(ProjectRecord::new(name, category, hours, date))
}

fn resolve_category(category: &str, custom: Option<&str>) -> Result<String, DecideError> {
    if category == OTHER_CATEGORY {
        return match custom.map(str::trim) {
            Some(custom) if !custom.is_empty() => Ok(custom.to_string()),
            _ => Err(DecideError::UnresolvedOtherCategory),
        };
    }
    if category.trim().is_empty() {
        return Err(DecideError::EmptyCategory);
    }
    Ok(category.to_string())
}

pub fn coerce_hours(raw: &Value) -> f64 {
    let parsed = match raw {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    // `+ 0.0` turns "-0" into a plain zero.
    parsed
        .filter(|hours| hours.is_finite())
        .map(|hours| hours + 0.0)
        .unwrap_or(0.0)
}

#[cfg(test)]
mod add_project_decide_tests {
    use super::*;
    use crate::tests::fixtures::records::date;
    use rstest::{fixture, rstest};
    use serde_json::json;

    #[fixture]
    fn today() -> NaiveDate {
        date("2024-06-01")
    }

    #[fixture]
    fn command() -> AddProject {
        AddProject {
            name: "  Winter scarf ".into(),
            category: "knitting".into(),
            custom_category: None,
            hours: json!(2.5),
            date: Some("2024-01-05".into()),
        }
    }

    #[rstest]
    fn it_should_decide_a_well_formed_record(command: AddProject, today: NaiveDate) {
        let record = decide_add(command, today).unwrap();
        assert_eq!(
            record,
            ProjectRecord::new("Winter scarf", "knitting", 2.5, date("2024-01-05"))
        );
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn it_should_reject_an_empty_name(command: AddProject, today: NaiveDate, #[case] name: &str) {
        let command = AddProject {
            name: name.into(),
            ..command
        };
        assert_eq!(decide_add(command, today), Err(DecideError::EmptyName));
    }

    #[rstest]
    fn it_should_resolve_other_to_the_custom_category(command: AddProject, today: NaiveDate) {
        let command = AddProject {
            category: OTHER_CATEGORY.into(),
            custom_category: Some(" Pottery ".into()),
            ..command
        };
        assert_eq!(decide_add(command, today).unwrap().category, "Pottery");
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[case(Some("  "))]
    fn it_should_reject_other_without_a_custom_category(
        command: AddProject,
        today: NaiveDate,
        #[case] custom: Option<&str>,
    ) {
        let command = AddProject {
            category: OTHER_CATEGORY.into(),
            custom_category: custom.map(str::to_string),
            ..command
        };
        assert_eq!(
            decide_add(command, today),
            Err(DecideError::UnresolvedOtherCategory)
        );
    }

    #[rstest]
    fn it_should_ignore_the_custom_category_for_suggested_ones(
        command: AddProject,
        today: NaiveDate,
    ) {
        let command = AddProject {
            custom_category: Some("Pottery".into()),
            ..command
        };
        assert_eq!(decide_add(command, today).unwrap().category, "knitting");
    }

    #[rstest]
    fn it_should_keep_free_form_categories_as_given(command: AddProject, today: NaiveDate) {
        let command = AddProject {
            category: "Macramé".into(),
            ..command
        };
        assert_eq!(decide_add(command, today).unwrap().category, "Macramé");
    }

    #[rstest]
    fn it_should_reject_an_empty_category(command: AddProject, today: NaiveDate) {
        let command = AddProject {
            category: " ".into(),
            ..command
        };
        assert_eq!(decide_add(command, today), Err(DecideError::EmptyCategory));
    }

    #[rstest]
    #[case(json!(3), 3.0)]
    #[case(json!(0.1), 0.1)]
    #[case(json!("4.25"), 4.25)]
    #[case(json!(" 2 "), 2.0)]
    #[case(json!("lots"), 0.0)]
    #[case(json!(""), 0.0)]
    #[case(json!("NaN"), 0.0)]
    #[case(json!("inf"), 0.0)]
    #[case(json!(null), 0.0)]
    #[case(json!(true), 0.0)]
    #[case(json!([1]), 0.0)]
    fn it_should_coerce_hours(#[case] raw: Value, #[case] expected: f64) {
        assert_eq!(coerce_hours(&raw), expected);
    }

    #[rstest]
    #[case(json!("-0"))]
    #[case(json!(-0.0))]
    fn it_should_store_negative_zero_as_plain_zero(#[case] raw: Value) {
        let hours = coerce_hours(&raw);
        assert_eq!(hours, 0.0);
        assert!(hours.is_sign_positive());
    }

    #[rstest]
    #[case(json!(-1))]
    #[case(json!("-0.5"))]
    fn it_should_reject_negative_hours(
        command: AddProject,
        today: NaiveDate,
        #[case] hours: Value,
    ) {
        let command = AddProject { hours, ..command };
        assert_eq!(decide_add(command, today), Err(DecideError::NegativeHours));
    }

    #[rstest]
    fn it_should_default_a_missing_date_to_today(command: AddProject, today: NaiveDate) {
        let command = AddProject {
            date: None,
            ..command
        };
        assert_eq!(decide_add(command, today).unwrap().date, today);
    }

    #[rstest]
    #[case("")]
    #[case("2024-02-30")]
    #[case("05/01/2024")]
    #[case("2024-01-05T10:00:00")]
    fn it_should_reject_invalid_dates(command: AddProject, today: NaiveDate, #[case] raw: &str) {
        let command = AddProject {
            date: Some(raw.into()),
            ..command
        };
        assert_eq!(
            decide_add(command, today),
            Err(DecideError::InvalidDate(raw.to_string()))
        );
    }
}
