use contracts::domain::a003_transaction::{
    Transaction, TransactionCreate, TransactionFilters, TransactionListResponse,
    TransactionUpdate,
};
use uuid::Uuid;

use crate::shared::api_utils::{delete, get_json, post_json, put_json, segment, with_query, ApiResult};

fn transaction_path(id: Uuid) -> String {
    format!("/transactions/{}", segment(&id.to_string()))
}

pub async fn list_transactions(filters: &TransactionFilters) -> ApiResult<TransactionListResponse> {
    get_json(&with_query("/transactions", &filters.to_query_string())).await
}

pub async fn create_transaction(transaction: &TransactionCreate) -> ApiResult<Transaction> {
    post_json("/transactions", transaction).await
}

pub async fn update_transaction(id: Uuid, update: &TransactionUpdate) -> ApiResult<Transaction> {
    put_json(&transaction_path(id), update).await
}

pub async fn delete_transaction(id: Uuid) -> ApiResult<()> {
    delete(&transaction_path(id)).await
}
