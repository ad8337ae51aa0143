use crate::shared::amount;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Banks
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankProvider {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub logo_url: Option<String>,
    pub available: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntegrationStatus {
    #[default]
    Disconnected,
    Connected,
    Error,
}

impl IntegrationStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Disconnected => "Desconectado",
            Self::Connected => "Conectado",
            Self::Error => "Erro",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankIntegration {
    pub id: String,
    pub provider: String,
    pub status: IntegrationStatus,
    #[serde(default)]
    pub connected_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_sync_at: Option<DateTime<Utc>>,
}

/// Bank actions addressed by provider code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BankAction {
    Connect,
    Disconnect,
    Sync,
}

impl BankAction {
    pub fn path_segment(self) -> &'static str {
        match self {
            Self::Connect => "connect",
            Self::Disconnect => "disconnect",
            Self::Sync => "sync",
        }
    }

    /// Marker for the in-flight action on a provider card.
    pub fn busy_key(self, provider: &str) -> String {
        match self {
            Self::Sync => format!("sync-{provider}"),
            Self::Connect | Self::Disconnect => provider.to_string(),
        }
    }
}

/// Integration state of `provider`, if one exists.
pub fn integration_for<'a>(
    integrations: &'a [BankIntegration],
    provider: &str,
) -> Option<&'a BankIntegration> {
    integrations.iter().find(|i| i.provider == provider)
}

// ============================================================================
// WhatsApp
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WhatsAppSettings {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    pub is_active: bool,
    pub alert_on_high_expense: bool,
    #[serde(default, deserialize_with = "amount::option::deserialize")]
    pub high_expense_threshold: Option<f64>,
    pub daily_summary: bool,
    pub weekly_summary: bool,
}

/// Partial update for `PUT /integrations/whatsapp`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WhatsAppSettingsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_on_high_expense: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high_expense_threshold: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_summary: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekly_summary: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn busy_keys_distinguish_sync() {
        assert_eq!(BankAction::Connect.busy_key("nubank"), "nubank");
        assert_eq!(BankAction::Disconnect.busy_key("nubank"), "nubank");
        assert_eq!(BankAction::Sync.busy_key("nubank"), "sync-nubank");
    }

    #[test]
    fn finds_integration_by_provider() {
        let list = vec![BankIntegration {
            id: "1".into(),
            provider: "itau".into(),
            status: IntegrationStatus::Connected,
            connected_at: None,
            last_sync_at: None,
        }];
        assert!(integration_for(&list, "itau").is_some());
        assert!(integration_for(&list, "inter").is_none());
    }

    #[test]
    fn whatsapp_update_only_sends_changes() {
        let update = WhatsAppSettingsUpdate {
            daily_summary: Some(true),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&update).unwrap(),
            r#"{"daily_summary":true}"#
        );
    }
}
