// Aggregation engine for project records.
//
// Purpose
// - Turn a snapshot of the record collection into dashboard metrics.
//
// Responsibilities
// - Pure, synchronous functions over `&[ProjectRecord]`. No input or output, no retained state.
// - Every function accepts an empty slice and returns an empty or zeroed result.
// - Linear in the number of records apart from the sorts.

pub mod breakdown;
pub mod monthly;
pub mod ranking;
pub mod summary;
pub mod window;

pub use breakdown::{CategoryBreakdown, CategoryHours, category_breakdown};
pub use monthly::{Month, MonthlyHours, monthly_series};
pub use ranking::{DEFAULT_RECENT_N, DEFAULT_TOP_N, most_recent, top_n_categories, top_n_projects};
pub use summary::{NO_TOP_CATEGORY, Summary, round_to_cents, summarize};
pub use window::{TRAILING_WINDOW_DAYS, windowed_sum};
