use contracts::domain::a005_investment::{
    EntryCreate, InvestmentEntry, InvestmentPortfolio, PortfolioCreate, PortfolioUpdate,
};
use serde::Serialize;
use uuid::Uuid;

use crate::shared::api_utils::{delete, get_json, post_json, put_json, segment, with_query, ApiResult};

#[derive(Serialize)]
struct ListQuery {
    include_inactive: bool,
}

fn portfolio_path(id: Uuid) -> String {
    format!("/investments/portfolios/{}", segment(&id.to_string()))
}

pub async fn list_portfolios(include_inactive: bool) -> ApiResult<Vec<InvestmentPortfolio>> {
    let qs = serde_qs::to_string(&ListQuery { include_inactive }).unwrap_or_default();
    get_json(&with_query("/investments/portfolios", &qs)).await
}

pub async fn create_portfolio(portfolio: &PortfolioCreate) -> ApiResult<InvestmentPortfolio> {
    post_json("/investments/portfolios", portfolio).await
}

pub async fn update_portfolio(id: Uuid, update: &PortfolioUpdate) -> ApiResult<InvestmentPortfolio> {
    put_json(&portfolio_path(id), update).await
}

pub async fn delete_portfolio(id: Uuid) -> ApiResult<()> {
    delete(&portfolio_path(id)).await
}

/// Entries in server order; the balance chart relies on it.
pub async fn list_entries(portfolio_id: Uuid) -> ApiResult<Vec<InvestmentEntry>> {
    get_json(&format!("{}/entries", portfolio_path(portfolio_id))).await
}

pub async fn create_entry(portfolio_id: Uuid, entry: &EntryCreate) -> ApiResult<InvestmentEntry> {
    post_json(&format!("{}/entries", portfolio_path(portfolio_id)), entry).await
}
