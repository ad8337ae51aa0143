use crate::shared::amount;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Credit card with its billing cycle days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditCard {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub institution: String,
    #[serde(deserialize_with = "amount::deserialize")]
    pub limit: f64,
    pub closing_day: u8,
    pub due_day: u8,
    #[serde(default)]
    pub color: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "amount::option::deserialize")]
    pub current_invoice: Option<f64>,
    #[serde(default, deserialize_with = "amount::option::deserialize")]
    pub available_limit: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditCardCreate {
    pub name: String,
    pub institution: String,
    pub limit: f64,
    pub closing_day: u8,
    pub due_day: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Default for CreditCardCreate {
    fn default() -> Self {
        Self {
            name: String::new(),
            institution: String::new(),
            limit: 0.0,
            closing_day: 1,
            due_day: 10,
            color: None,
        }
    }
}

impl CreditCardCreate {
    /// Billing days must be valid days of month.
    pub fn days_valid(&self) -> bool {
        (1..=31).contains(&self.closing_day) && (1..=31).contains(&self.due_day)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreditCardUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closing_day: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_day: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditCardListResponse {
    pub cards: Vec<CreditCard>,
    pub total: u32,
    #[serde(deserialize_with = "amount::deserialize")]
    pub total_limit: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_form_days_are_valid() {
        assert!(CreditCardCreate::default().days_valid());
        let bad = CreditCardCreate {
            closing_day: 0,
            ..Default::default()
        };
        assert!(!bad.days_valid());
        let bad = CreditCardCreate {
            due_day: 32,
            ..Default::default()
        };
        assert!(!bad.days_valid());
    }

    #[test]
    fn invoice_fields_are_optional() {
        let json = r#"{
            "id":"0b6f8a3e-2f7c-4d0e-9a55-1f2e3d4c5b6a",
            "user_id":"9d8c7b6a-5f4e-4d3c-8b2a-1a2b3c4d5e6f",
            "name":"Roxinho","institution":"Nubank","limit":"5000.00",
            "closing_day":3,"due_day":10,"is_active":true,
            "created_at":"2024-01-01T00:00:00Z","updated_at":"2024-01-01T00:00:00Z"
        }"#;
        let card: CreditCard = serde_json::from_str(json).unwrap();
        assert_eq!(card.limit, 5000.0);
        assert_eq!(card.current_invoice, None);
        assert_eq!(card.available_limit, None);
    }
}
