// Top-N rankings.
//
// All sorts are stable, so records or categories that tie keep their input order.

use crate::modules::projects::core::aggregation::breakdown::{
    CategoryHours, category_breakdown, descending_hours,
};
use crate::modules::projects::core::record::ProjectRecord;

pub const DEFAULT_TOP_N: usize = 5;
pub const DEFAULT_RECENT_N: usize = 10;

/// First `n` entries of the category breakdown.
pub fn top_n_categories(records: &[ProjectRecord], n: usize) -> Vec<CategoryHours> {
    let mut entries = category_breakdown(records).into_entries();
    entries.truncate(n);
    entries
}

pub fn top_n_projects(records: &[ProjectRecord], n: usize) -> Vec<&ProjectRecord> {
    let mut ranked: Vec<&ProjectRecord> = records.iter().collect();
    ranked.sort_by(|a, b| descending_hours(a.hours, b.hours));
    ranked.truncate(n);
    ranked
}

/// Latest `n` records by work date. Same-day records keep their input order.
pub fn most_recent(records: &[ProjectRecord], n: usize) -> Vec<&ProjectRecord> {
    let mut ranked: Vec<&ProjectRecord> = records.iter().collect();
    ranked.sort_by(|a, b| b.date.cmp(&a.date));
    ranked.truncate(n);
    ranked
}
