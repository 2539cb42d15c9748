use crate::modules::projects::core::record::ProjectRecord;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryHours {
    pub category: String,
    pub hours: f64,
}

/// Summed hours per category, ordered by descending hours.
///
/// Categories with equal sums keep the order in which they were first seen in the input.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CategoryBreakdown(Vec<CategoryHours>);

impl CategoryBreakdown {
    pub fn entries(&self) -> &[CategoryHours] {
        &self.0
    }

    pub fn into_entries(self) -> Vec<CategoryHours> {
        self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CategoryHours> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, category: &str) -> Option<f64> {
        self.0
            .iter()
            .find(|entry| entry.category == category)
            .map(|entry| entry.hours)
    }

    pub fn top(&self) -> Option<&CategoryHours> {
        self.0.first()
    }

    pub fn total_hours(&self) -> f64 {
        self.0.iter().fold(0.0, |acc, entry| acc + entry.hours)
    }
}

impl<'a> IntoIterator for &'a CategoryBreakdown {
    type Item = &'a CategoryHours;
    type IntoIter = std::slice::Iter<'a, CategoryHours>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

pub fn category_breakdown(records: &[ProjectRecord]) -> CategoryBreakdown {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut entries: Vec<CategoryHours> = Vec::new();

    for record in records {
        match positions.get(record.category.as_str()) {
            Some(&index) => entries[index].hours += record.hours,
            None => {
                positions.insert(record.category.as_str(), entries.len());
                entries.push(CategoryHours {
                    category: record.category.clone(),
                    hours: record.hours,
                });
            }
        }
    }

    // sort_by is stable: ties stay in first-seen order.
    entries.sort_by(|a, b| descending_hours(a.hours, b.hours));
    CategoryBreakdown(entries)
}

/// Larger hours first. Signed zeros compare equal so they tie like any other equal sums.
pub(crate) fn descending_hours(a: f64, b: f64) -> Ordering {
    (b + 0.0).total_cmp(&(a + 0.0))
}
