use contracts::domain::a002_credit_card::{
    CreditCard, CreditCardCreate, CreditCardListResponse, CreditCardUpdate,
};
use serde::Serialize;
use uuid::Uuid;

use crate::shared::api_utils::{delete, get_json, post_json, put_json, segment, with_query, ApiResult};

#[derive(Serialize)]
struct ListQuery {
    include_inactive: bool,
}

fn card_path(id: Uuid) -> String {
    format!("/credit-cards/{}", segment(&id.to_string()))
}

pub async fn list_cards(include_inactive: bool) -> ApiResult<CreditCardListResponse> {
    let qs = serde_qs::to_string(&ListQuery { include_inactive }).unwrap_or_default();
    get_json(&with_query("/credit-cards", &qs)).await
}

pub async fn create_card(card: &CreditCardCreate) -> ApiResult<CreditCard> {
    post_json("/credit-cards", card).await
}

pub async fn update_card(id: Uuid, update: &CreditCardUpdate) -> ApiResult<CreditCard> {
    put_json(&card_path(id), update).await
}

pub async fn delete_card(id: Uuid) -> ApiResult<()> {
    delete(&card_path(id)).await
}
