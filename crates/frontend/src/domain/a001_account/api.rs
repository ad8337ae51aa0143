use contracts::domain::a001_account::{
    Account, AccountCreate, AccountListResponse, AccountUpdate,
};
use serde::Serialize;
use uuid::Uuid;

use crate::shared::api_utils::{delete, get_json, post_json, put_json, segment, with_query, ApiResult};

#[derive(Serialize)]
struct ListQuery {
    include_inactive: bool,
}

fn account_path(id: Uuid) -> String {
    format!("/accounts/{}", segment(&id.to_string()))
}

pub async fn list_accounts(include_inactive: bool) -> ApiResult<AccountListResponse> {
    let qs = serde_qs::to_string(&ListQuery { include_inactive }).unwrap_or_default();
    get_json(&with_query("/accounts", &qs)).await
}

pub async fn create_account(account: &AccountCreate) -> ApiResult<Account> {
    post_json("/accounts", account).await
}

pub async fn update_account(id: Uuid, update: &AccountUpdate) -> ApiResult<Account> {
    put_json(&account_path(id), update).await
}

pub async fn delete_account(id: Uuid) -> ApiResult<()> {
    delete(&account_path(id)).await
}
