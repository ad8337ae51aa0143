use contracts::domain::a006_integration::{
    BankAction, BankIntegration, BankProvider, WhatsAppSettings, WhatsAppSettingsUpdate,
};

use crate::shared::api_utils::{get_json, post_action, put_json, segment, ApiResult};

pub async fn list_providers() -> ApiResult<Vec<BankProvider>> {
    get_json("/integrations/banks/providers").await
}

pub async fn list_banks() -> ApiResult<Vec<BankIntegration>> {
    get_json("/integrations/banks").await
}

/// `POST /integrations/banks/{provider}/{connect|disconnect|sync}`
pub async fn bank_action(provider: &str, action: BankAction) -> ApiResult<()> {
    post_action(&format!(
        "/integrations/banks/{}/{}",
        segment(provider),
        action.path_segment()
    ))
    .await
}

pub async fn get_whatsapp() -> ApiResult<WhatsAppSettings> {
    get_json("/integrations/whatsapp").await
}

pub async fn update_whatsapp(update: &WhatsAppSettingsUpdate) -> ApiResult<WhatsAppSettings> {
    put_json("/integrations/whatsapp", update).await
}
