use crate::shared::amount;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Named bucket of investment movements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentPortfolio {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    /// Free text, e.g. "Renda Fixa".
    #[serde(rename = "type", default)]
    pub portfolio_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "amount::option::deserialize")]
    pub total_invested: Option<f64>,
    #[serde(default, deserialize_with = "amount::option::deserialize")]
    pub current_balance: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PortfolioCreate {
    pub name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub portfolio_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PortfolioUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub portfolio_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Totals across portfolios: (invested, current balance). Missing values count as zero.
pub fn portfolio_totals(portfolios: &[InvestmentPortfolio]) -> (f64, f64) {
    portfolios.iter().fold((0.0, 0.0), |(invested, balance), p| {
        (
            invested + p.total_invested.unwrap_or(0.0),
            balance + p.current_balance.unwrap_or(0.0),
        )
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    #[default]
    Deposit,
    Withdrawal,
}

impl EntryType {
    pub const ALL: [EntryType; 2] = [Self::Deposit, Self::Withdrawal];

    pub fn code(self) -> &'static str {
        match self {
            Self::Deposit => "deposit",
            Self::Withdrawal => "withdrawal",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Deposit => "Aporte",
            Self::Withdrawal => "Resgate",
        }
    }

    /// +1 for deposits, -1 for withdrawals.
    pub fn sign(self) -> f64 {
        match self {
            Self::Deposit => 1.0,
            Self::Withdrawal => -1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentEntry {
    pub id: Uuid,
    pub portfolio_id: Uuid,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    #[serde(deserialize_with = "amount::deserialize")]
    pub amount: f64,
    pub date: NaiveDate,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl InvestmentEntry {
    pub fn signed_amount(&self) -> f64 {
        self.entry_type.sign() * self.amount
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryCreate {
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    pub amount: f64,
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn portfolio(invested: Option<f64>, balance: Option<f64>) -> InvestmentPortfolio {
        InvestmentPortfolio {
            id: Uuid::new_v4(),
            user_id: Uuid::nil(),
            name: "Tesouro".into(),
            portfolio_type: Some("Renda Fixa".into()),
            description: None,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            total_invested: invested,
            current_balance: balance,
        }
    }

    #[test]
    fn totals_treat_missing_as_zero() {
        let list = vec![
            portfolio(Some(1000.0), Some(800.0)),
            portfolio(None, None),
            portfolio(Some(250.0), Some(250.0)),
        ];
        assert_eq!(portfolio_totals(&list), (1250.0, 1050.0));
        assert_eq!(portfolio_totals(&[]), (0.0, 0.0));
    }

    #[test]
    fn entry_body() {
        let body = EntryCreate {
            entry_type: EntryType::Withdrawal,
            amount: 30.0,
            date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            description: None,
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["type"], "withdrawal");
        assert_eq!(value["date"], "2024-02-01");
        assert!(value.get("description").is_none());
    }
}
