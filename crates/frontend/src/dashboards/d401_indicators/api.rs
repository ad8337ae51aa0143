use contracts::shared::indicators::{IndicatorDefinition, IndicatorValuesResponse};
use contracts::shared::period::Period;

use crate::shared::api_utils::{get_json, with_query, ApiResult};

/// Catalog of indicators the server can compute
pub async fn get_indicators() -> ApiResult<Vec<IndicatorDefinition>> {
    get_json("/indicators").await
}

/// Values for `period`
pub async fn get_indicator_values(period: &Period) -> ApiResult<IndicatorValuesResponse> {
    let path = with_query("/indicators/values", &period.query().to_query_string());
    get_json(&path).await
}
