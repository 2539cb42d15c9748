use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::projects::core::aggregation::{
    CategoryHours, DEFAULT_RECENT_N, DEFAULT_TOP_N, MonthlyHours, Summary, category_breakdown,
    monthly_series, most_recent, summarize, top_n_categories, top_n_projects,
};
use crate::modules::projects::core::record::ProjectRecord;
use crate::modules::projects::use_cases::view_dashboard::dashboard::DashboardView;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlProjectRecord {
    pub name: String,
    pub category: String,
    pub hours: f64,
    /// `YYYY-MM-DD`
    pub date: String,
}

impl From<ProjectRecord> for GqlProjectRecord {
    fn from(r: ProjectRecord) -> Self {
        Self {
            name: r.name,
            category: r.category,
            hours: r.hours,
            date: r.date.format("%Y-%m-%d").to_string(),
        }
    }
}

impl From<&ProjectRecord> for GqlProjectRecord {
    fn from(r: &ProjectRecord) -> Self {
        r.clone().into()
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlCategoryHours {
    pub category: String,
    pub hours: f64,
}

impl From<CategoryHours> for GqlCategoryHours {
    fn from(c: CategoryHours) -> Self {
        Self {
            category: c.category,
            hours: c.hours,
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlMonthlyHours {
    /// `YYYY-MM`
    pub month: String,
    pub hours: f64,
}

impl From<MonthlyHours> for GqlMonthlyHours {
    fn from(m: MonthlyHours) -> Self {
        Self {
            month: m.month.to_string(),
            hours: m.hours,
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlSummary {
    pub total_projects: u64,
    pub total_hours: f64,
    pub average_hours_per_project: f64,
    pub top_category: String,
    pub category_breakdown: Vec<GqlCategoryHours>,
    pub trailing_7day_hours: f64,
}

impl From<Summary> for GqlSummary {
    fn from(s: Summary) -> Self {
        Self {
            total_projects: s.total_projects as u64,
            total_hours: s.total_hours,
            average_hours_per_project: s.average_hours_per_project,
            top_category: s.top_category,
            category_breakdown: s
                .category_breakdown
                .into_entries()
                .into_iter()
                .map(Into::into)
                .collect(),
            trailing_7day_hours: s.trailing_7day_hours,
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlDashboard {
    pub summary: GqlSummary,
    pub monthly_series: Vec<GqlMonthlyHours>,
    pub top_categories: Vec<GqlCategoryHours>,
    pub top_projects: Vec<GqlProjectRecord>,
    pub recent_projects: Vec<GqlProjectRecord>,
}

impl From<DashboardView> for GqlDashboard {
    fn from(v: DashboardView) -> Self {
        Self {
            summary: v.summary.into(),
            monthly_series: v.monthly_series.into_iter().map(Into::into).collect(),
            top_categories: v.top_categories.into_iter().map(Into::into).collect(),
            top_projects: v.top_projects.into_iter().map(Into::into).collect(),
            recent_projects: v.recent_projects.into_iter().map(Into::into).collect(),
        }
    }
}

fn size(n: Option<i64>, default: usize) -> usize {
    n.map_or(default, |n| n.max(0) as usize)
}

async fn snapshot(context: &Context<'_>) -> GqlResult<Vec<ProjectRecord>> {
    let state = context.data_unchecked::<AppState>();
    Ok(state.dashboard_handler.records().await?)
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn dashboard(
        &self,
        context: &Context<'_>,
        top_n: Option<i64>,
        recent_n: Option<i64>,
    ) -> GqlResult<GqlDashboard> {
        let state = context.data_unchecked::<AppState>();
        let view = state
            .dashboard_handler
            .dashboard(size(top_n, DEFAULT_TOP_N), size(recent_n, DEFAULT_RECENT_N))
            .await?;
        Ok(view.into())
    }

    async fn summary(&self, context: &Context<'_>) -> GqlResult<GqlSummary> {
        Ok(summarize(&snapshot(context).await?).into())
    }

    async fn monthly_series(&self, context: &Context<'_>) -> GqlResult<Vec<GqlMonthlyHours>> {
        let records = snapshot(context).await?;
        Ok(monthly_series(&records).into_iter().map(Into::into).collect())
    }

    async fn category_breakdown(&self, context: &Context<'_>) -> GqlResult<Vec<GqlCategoryHours>> {
        let records = snapshot(context).await?;
        Ok(category_breakdown(&records)
            .into_entries()
            .into_iter()
            .map(Into::into)
            .collect())
    }

    async fn top_categories(
        &self,
        context: &Context<'_>,
        n: Option<i64>,
    ) -> GqlResult<Vec<GqlCategoryHours>> {
        let records = snapshot(context).await?;
        Ok(top_n_categories(&records, size(n, DEFAULT_TOP_N))
            .into_iter()
            .map(Into::into)
            .collect())
    }

    async fn top_projects(
        &self,
        context: &Context<'_>,
        n: Option<i64>,
    ) -> GqlResult<Vec<GqlProjectRecord>> {
        let records = snapshot(context).await?;
        Ok(top_n_projects(&records, size(n, DEFAULT_TOP_N))
            .into_iter()
            .map(Into::into)
            .collect())
    }

    async fn recent_projects(
        &self,
        context: &Context<'_>,
        n: Option<i64>,
    ) -> GqlResult<Vec<GqlProjectRecord>> {
        let records = snapshot(context).await?;
        Ok(most_recent(&records, size(n, DEFAULT_RECENT_N))
            .into_iter()
            .map(Into::into)
            .collect())
    }

    async fn projects(&self, context: &Context<'_>) -> GqlResult<Vec<GqlProjectRecord>> {
        let records = snapshot(context).await?;
        Ok(records.into_iter().map(Into::into).collect())
    }
}
