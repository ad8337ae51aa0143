use contracts::domain::a003_transaction::TransactionType;
use contracts::domain::a004_category::{Category, CategoryCreate, CategoryQuery};

use crate::shared::api_utils::{get_json, post_json, with_query, ApiResult};

/// System and user categories, optionally restricted to one type.
pub async fn list_categories(kind: Option<TransactionType>) -> ApiResult<Vec<Category>> {
    let query = CategoryQuery { category_type: kind };
    get_json(&with_query("/categories", &query.to_query_string())).await
}

pub async fn create_category(category: &CategoryCreate) -> ApiResult<Category> {
    post_json("/categories", category).await
}
