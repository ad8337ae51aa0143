use crate::shared::amount;
use crate::shared::period::Period;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

// ============================================================================
// Enums
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    #[default]
    Expense,
}

impl TransactionType {
    pub const ALL: [TransactionType; 2] = [Self::Income, Self::Expense];

    pub fn code(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Income => "Receita",
            Self::Expense => "Despesa",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Self::Income => "#22c55e",
            Self::Expense => "#ef4444",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "income" => Some(Self::Income),
            "expense" => Some(Self::Expense),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Pending,
    #[default]
    Paid,
    Cancelled,
}

impl TransactionStatus {
    pub const ALL: [TransactionStatus; 3] = [Self::Pending, Self::Paid, Self::Cancelled];

    pub fn code(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::Cancelled => "cancelled",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pendente",
            Self::Paid => "Pago",
            Self::Cancelled => "Cancelado",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.code() == code)
    }
}

// ============================================================================
// Transaction
// ============================================================================

/// A single income or expense entry, paid from an account or a card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub user_id: Uuid,
    #[serde(default)]
    pub account_id: Option<Uuid>,
    #[serde(default)]
    pub credit_card_id: Option<Uuid>,
    #[serde(default)]
    pub category_id: Option<Uuid>,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub description: String,
    #[serde(deserialize_with = "amount::deserialize")]
    pub amount: f64,
    pub date: NaiveDate,
    pub status: TransactionStatus,
    pub is_recurring: bool,
    #[serde(default)]
    pub recurring_id: Option<Uuid>,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    // Denormalised names filled in by the server
    #[serde(default)]
    pub account_name: Option<String>,
    #[serde(default)]
    pub credit_card_name: Option<String>,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub category_color: Option<String>,
}

impl Transaction {
    /// Name of the account or card the entry was booked on.
    pub fn source_name(&self) -> Option<&str> {
        self.account_name
            .as_deref()
            .or(self.credit_card_name.as_deref())
    }

    /// Amount with sign applied: expenses are negative.
    pub fn signed_amount(&self) -> f64 {
        match self.transaction_type {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransactionFormError {
    #[error("Informe uma conta ou um cartão")]
    Missing,
    #[error("Transação não pode ter conta e cartão ao mesmo tempo")]
    Both,
    #[error("Cartão de crédito não aceita receitas")]
    IncomeOnCard,
    #[error("O valor deve ser maior que zero")]
    NonPositiveAmount,
    #[error("Informe a descrição")]
    EmptyDescription,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionCreate {
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub description: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub status: TransactionStatus,
    pub is_recurring: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_card_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<Uuid>,
}

impl TransactionCreate {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            transaction_type: TransactionType::Expense,
            description: String::new(),
            amount: 0.0,
            date,
            status: TransactionStatus::Paid,
            is_recurring: false,
            notes: None,
            account_id: None,
            credit_card_id: None,
            category_id: None,
        }
    }

    /// Same checks the server applies, so the form can fail fast.
    pub fn validate(&self) -> Result<(), TransactionFormError> {
        if self.description.trim().is_empty() {
            return Err(TransactionFormError::EmptyDescription);
        }
        if self.amount.is_nan() || self.amount <= 0.0 {
            return Err(TransactionFormError::NonPositiveAmount);
        }
        match (self.account_id, self.credit_card_id) {
            (Some(_), Some(_)) => Err(TransactionFormError::Both),
            (None, None) => Err(TransactionFormError::Missing),
            (None, Some(_)) if self.transaction_type == TransactionType::Income => {
                Err(TransactionFormError::IncomeOnCard)
            }
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TransactionStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

// ============================================================================
// Listing
// ============================================================================

/// Query filters for `GET /transactions`. Unset fields are omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<TransactionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TransactionStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_card_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<Uuid>,
}

impl TransactionFilters {
    pub fn for_period(period: Period) -> Self {
        Self {
            start_date: Some(period.start),
            end_date: Some(period.end),
            ..Default::default()
        }
    }

    pub fn to_query_string(&self) -> String {
        serde_qs::to_string(self).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionListResponse {
    pub transactions: Vec<Transaction>,
    pub total: u32,
    #[serde(deserialize_with = "amount::deserialize")]
    pub total_income: f64,
    #[serde(deserialize_with = "amount::deserialize")]
    pub total_expense: f64,
    #[serde(deserialize_with = "amount::deserialize")]
    pub balance: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn valid_form() -> TransactionCreate {
        TransactionCreate {
            description: "Mercado".into(),
            amount: 150.0,
            account_id: Some(Uuid::nil()),
            ..TransactionCreate::new(date(2024, 5, 2))
        }
    }

    #[test]
    fn empty_filters_produce_empty_query() {
        assert_eq!(TransactionFilters::default().to_query_string(), "");
    }

    #[test]
    fn filters_skip_unset_fields() {
        let filters = TransactionFilters {
            transaction_type: Some(TransactionType::Income),
            ..TransactionFilters::for_period(Period::new(date(2024, 5, 1), date(2024, 5, 31)))
        };
        assert_eq!(
            filters.to_query_string(),
            "start_date=2024-05-01&end_date=2024-05-31&type=income"
        );
    }

    #[test]
    fn source_rules() {
        assert_eq!(valid_form().validate(), Ok(()));

        let both = TransactionCreate {
            credit_card_id: Some(Uuid::nil()),
            ..valid_form()
        };
        assert_eq!(both.validate(), Err(TransactionFormError::Both));

        let none = TransactionCreate {
            account_id: None,
            ..valid_form()
        };
        assert_eq!(none.validate(), Err(TransactionFormError::Missing));

        let income_on_card = TransactionCreate {
            transaction_type: TransactionType::Income,
            account_id: None,
            credit_card_id: Some(Uuid::nil()),
            ..valid_form()
        };
        assert_eq!(
            income_on_card.validate(),
            Err(TransactionFormError::IncomeOnCard)
        );
    }

    #[test]
    fn amount_and_description_rules() {
        let zero = TransactionCreate {
            amount: 0.0,
            ..valid_form()
        };
        assert_eq!(zero.validate(), Err(TransactionFormError::NonPositiveAmount));

        let nan = TransactionCreate {
            amount: f64::NAN,
            ..valid_form()
        };
        assert_eq!(nan.validate(), Err(TransactionFormError::NonPositiveAmount));

        let blank = TransactionCreate {
            description: "   ".into(),
            ..valid_form()
        };
        assert_eq!(blank.validate(), Err(TransactionFormError::EmptyDescription));
    }

    #[test]
    fn create_body_omits_empty_links() {
        let value = serde_json::to_value(valid_form()).unwrap();
        assert_eq!(value["type"], "expense");
        assert_eq!(value["status"], "paid");
        assert_eq!(value["date"], "2024-05-02");
        assert!(value.get("credit_card_id").is_none());
        assert!(value.get("category_id").is_none());
    }

    #[test]
    fn signed_amount_and_source() {
        let json = r#"{
            "id":"0b6f8a3e-2f7c-4d0e-9a55-1f2e3d4c5b6a",
            "user_id":"9d8c7b6a-5f4e-4d3c-8b2a-1a2b3c4d5e6f",
            "credit_card_id":"1b6f8a3e-2f7c-4d0e-9a55-1f2e3d4c5b6a",
            "type":"expense","description":"Cinema","amount":"42.00",
            "date":"2024-05-10","status":"pending","is_recurring":false,
            "created_at":"2024-05-10T12:00:00Z","updated_at":"2024-05-10T12:00:00Z",
            "credit_card_name":"Roxinho"
        }"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.signed_amount(), -42.0);
        assert_eq!(tx.source_name(), Some("Roxinho"));
        assert_eq!(tx.status.label(), "Pendente");
    }
}
