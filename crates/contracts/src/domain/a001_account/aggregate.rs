use crate::shared::amount;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Account type
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    #[default]
    Checking,
    Savings,
    Wallet,
    Investment,
    Other,
}

impl AccountType {
    pub const ALL: [AccountType; 5] = [
        Self::Checking,
        Self::Savings,
        Self::Wallet,
        Self::Investment,
        Self::Other,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Self::Checking => "checking",
            Self::Savings => "savings",
            Self::Wallet => "wallet",
            Self::Investment => "investment",
            Self::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Checking => "Conta Corrente",
            Self::Savings => "Poupança",
            Self::Wallet => "Carteira",
            Self::Investment => "Investimento",
            Self::Other => "Outra",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }
}

// ============================================================================
// Account
// ============================================================================

/// Bank account or wallet owned by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub account_type: AccountType,
    #[serde(default)]
    pub institution: Option<String>,
    #[serde(deserialize_with = "amount::deserialize")]
    pub initial_balance: f64,
    #[serde(deserialize_with = "amount::deserialize")]
    pub current_balance: f64,
    #[serde(default)]
    pub color: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountCreate {
    pub name: String,
    #[serde(rename = "type")]
    pub account_type: AccountType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,
    pub initial_balance: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Partial update; unset fields are left untouched by the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub account_type: Option<AccountType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountListResponse {
    pub accounts: Vec<Account>,
    pub total: u32,
    #[serde(deserialize_with = "amount::deserialize")]
    pub total_balance: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_response_with_decimal_strings() {
        let json = r##"{
            "accounts":[{
                "id":"0b6f8a3e-2f7c-4d0e-9a55-1f2e3d4c5b6a",
                "user_id":"9d8c7b6a-5f4e-4d3c-8b2a-1a2b3c4d5e6f",
                "name":"Nubank",
                "type":"checking",
                "institution":null,
                "initial_balance":"100.00",
                "current_balance":"250.75",
                "color":"#8b5cf6",
                "is_active":true,
                "created_at":"2024-01-01T00:00:00Z",
                "updated_at":"2024-01-01T00:00:00Z"
            }],
            "total":1,
            "total_balance":"250.75"
        }"##;
        let list: AccountListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(list.accounts[0].account_type, AccountType::Checking);
        assert_eq!(list.accounts[0].current_balance, 250.75);
        assert_eq!(list.total_balance, 250.75);
    }

    #[test]
    fn create_body_uses_type_key() {
        let body = AccountCreate {
            name: "Carteira".into(),
            account_type: AccountType::Wallet,
            institution: None,
            initial_balance: 50.0,
            color: None,
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["type"], "wallet");
        assert!(value.get("institution").is_none());
    }

    #[test]
    fn type_codes_and_labels() {
        assert_eq!(AccountType::from_code("savings"), Some(AccountType::Savings));
        assert_eq!(AccountType::from_code("broker"), None);
        assert_eq!(AccountType::Checking.label(), "Conta Corrente");
    }
}
