// Monthly time-series bucketing.
//
// Only months holding at least one record are emitted. Gaps are not filled in, so a chart
// built on this series may have uneven spacing between points.

use crate::modules::projects::core::record::ProjectRecord;
use chrono::{Datelike, NaiveDate};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// A calendar month, ordered chronologically. Renders as `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month(NaiveDate);

impl Month {
    pub fn of(date: NaiveDate) -> Self {
        Self(date.with_day(1).unwrap_or(date))
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl Serialize for Month {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyHours {
    pub month: Month,
    pub hours: f64,
}

pub fn monthly_series(records: &[ProjectRecord]) -> Vec<MonthlyHours> {
    let mut buckets: BTreeMap<Month, f64> = BTreeMap::new();
    for record in records {
        *buckets.entry(Month::of(record.date)).or_insert(0.0) += record.hours;
    }
    buckets
        .into_iter()
        .map(|(month, hours)| MonthlyHours { month, hours })
        .collect()
}
