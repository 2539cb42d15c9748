use crate::modules::projects::core::record::ProjectRecord;
use chrono::{Days, NaiveDate};

pub const TRAILING_WINDOW_DAYS: u64 = 7;

/// Sums hours over the `days`-long inclusive window ending at the latest record date.
///
/// The window is anchored to the data, never to the wall clock, so the result only depends
/// on the records passed in. A zero-length window sums nothing.
pub fn windowed_sum(records: &[ProjectRecord], days: u64) -> f64 {
    if days == 0 {
        return 0.0;
    }
    let Some(end) = records.iter().map(|record| record.date).max() else {
        return 0.0;
    };
    let start = end
        .checked_sub_days(Days::new(days - 1))
        .unwrap_or(NaiveDate::MIN);

    records
        .iter()
        .filter(|record| record.date >= start && record.date <= end)
        .fold(0.0, |acc, record| acc + record.hours)
}
