// Read model behind the dashboard.
//
// Responsibilities
// - Combine the summary, the monthly series and the three rankings into one snapshot.
// - Recomputed from the full collection on every request. Nothing here is cached.

use crate::modules::projects::core::aggregation::{
    CategoryHours, MonthlyHours, Summary, monthly_series, most_recent, summarize,
    top_n_categories, top_n_projects,
};
use crate::modules::projects::core::record::ProjectRecord;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub summary: Summary,
    pub monthly_series: Vec<MonthlyHours>,
    pub top_categories: Vec<CategoryHours>,
    pub top_projects: Vec<ProjectRecord>,
    pub recent_projects: Vec<ProjectRecord>,
}

impl DashboardView {
    pub fn build(records: &[ProjectRecord], top_n: usize, recent_n: usize) -> Self {
        Self {
            summary: summarize(records),
            monthly_series: monthly_series(records),
            top_categories: top_n_categories(records, top_n),
            top_projects: top_n_projects(records, top_n).into_iter().cloned().collect(),
            recent_projects: most_recent(records, recent_n).into_iter().cloned().collect(),
        }
    }
}
