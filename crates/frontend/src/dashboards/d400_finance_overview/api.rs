use contracts::dashboards::d400_finance_overview::{
    DashboardData, MonthlyComparison, MonthlyComparisonQuery,
};
use contracts::shared::period::Period;

use crate::shared::api_utils::{get_json, with_query, ApiResult};

/// Everything the dashboard shows for one period, in a single request.
pub async fn get_dashboard(period: &Period) -> ApiResult<DashboardData> {
    let path = with_query("/dashboard", &period.query().to_query_string());
    get_json(&path).await
}

/// Income against expense for the last `query.months` months.
pub async fn get_monthly_comparison(
    query: MonthlyComparisonQuery,
) -> ApiResult<Vec<MonthlyComparison>> {
    let qs = serde_qs::to_string(&query).unwrap_or_default();
    get_json(&with_query("/dashboard/monthly-comparison", &qs)).await
}
