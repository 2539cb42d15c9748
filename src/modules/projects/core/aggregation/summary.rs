use crate::modules::projects::core::aggregation::breakdown::{
    CategoryBreakdown, category_breakdown,
};
use crate::modules::projects::core::aggregation::window::{TRAILING_WINDOW_DAYS, windowed_sum};
use crate::modules::projects::core::record::ProjectRecord;
use serde::Serialize;

/// Shown as the top category when there are no records.
pub const NO_TOP_CATEGORY: &str = "—";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub total_projects: usize,
    pub total_hours: f64,
    pub average_hours_per_project: f64,
    pub top_category: String,
    pub category_breakdown: CategoryBreakdown,
    pub trailing_7day_hours: f64,
}

pub fn summarize(records: &[ProjectRecord]) -> Summary {
    let total_projects = records.len();
    let total_hours = records.iter().fold(0.0, |acc, record| acc + record.hours);
    let average_hours_per_project = if total_projects == 0 {
        0.0
    } else {
        round_to_cents(total_hours / total_projects as f64)
    };

    let category_breakdown = category_breakdown(records);
    let top_category = category_breakdown
        .top()
        .map_or_else(|| NO_TOP_CATEGORY.to_string(), |top| top.category.clone());

    Summary {
        total_projects,
        total_hours,
        average_hours_per_project,
        top_category,
        category_breakdown,
        trailing_7day_hours: windowed_sum(records, TRAILING_WINDOW_DAYS),
    }
}

pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
