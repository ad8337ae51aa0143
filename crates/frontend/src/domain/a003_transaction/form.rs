//! Raw form and filter inputs of the transactions page, turned into typed
//! requests.

use chrono::NaiveDate;
use contracts::domain::a003_transaction::{
    TransactionCreate, TransactionFilters, TransactionStatus, TransactionType,
};
use uuid::Uuid;

use crate::shared::date_utils::{input_date, parse_input_date};
use crate::shared::number_format::parse_amount;

/// Where an entry is booked. Encoded as `account:<id>` / `card:<id>` in the
/// source dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Account(Uuid),
    Card(Uuid),
}

impl Source {
    pub fn key(&self) -> String {
        match self {
            Source::Account(id) => format!("account:{id}"),
            Source::Card(id) => format!("card:{id}"),
        }
    }

    pub fn parse(key: &str) -> Option<Self> {
        let (kind, id) = key.split_once(':')?;
        let id = Uuid::parse_str(id).ok()?;
        match kind {
            "account" => Some(Source::Account(id)),
            "card" => Some(Source::Card(id)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransactionForm {
    pub kind: String,
    pub description: String,
    pub amount: String,
    pub date: String,
    pub status: String,
    pub source: String,
    pub category: String,
    pub is_recurring: bool,
    pub notes: String,
}

impl TransactionForm {
    pub fn new(today: NaiveDate) -> Self {
        let defaults = TransactionCreate::new(today);
        Self {
            kind: defaults.transaction_type.code().to_string(),
            description: String::new(),
            amount: String::new(),
            date: input_date(today),
            status: defaults.status.code().to_string(),
            source: String::new(),
            category: String::new(),
            is_recurring: false,
            notes: String::new(),
        }
    }

    pub fn to_create(&self) -> Result<TransactionCreate, String> {
        let date = parse_input_date(&self.date).ok_or_else(|| "Data inválida".to_string())?;
        let mut create = TransactionCreate::new(date);
        create.transaction_type = TransactionType::from_code(&self.kind).unwrap_or_default();
        create.description = self.description.trim().to_string();
        create.amount = parse_amount(&self.amount).unwrap_or(0.0);
        create.status = TransactionStatus::from_code(&self.status).unwrap_or_default();
        create.is_recurring = self.is_recurring;
        create.category_id = Uuid::parse_str(&self.category).ok();
        let notes = self.notes.trim();
        create.notes = (!notes.is_empty()).then(|| notes.to_string());
        match Source::parse(&self.source) {
            Some(Source::Account(id)) => create.account_id = Some(id),
            Some(Source::Card(id)) => create.credit_card_id = Some(id),
            None => {}
        }
        create.validate().map_err(|e| e.to_string())?;
        Ok(create)
    }
}

/// Filter bar state; empty strings mean "any".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterForm {
    pub kind: String,
    pub account: String,
    pub start: String,
    pub end: String,
}

impl FilterForm {
    pub fn to_filters(&self) -> TransactionFilters {
        TransactionFilters {
            start_date: parse_input_date(&self.start),
            end_date: parse_input_date(&self.end),
            transaction_type: TransactionType::from_code(&self.kind),
            account_id: Uuid::parse_str(&self.account).ok(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 20).unwrap()
    }

    fn filled(source: Source) -> TransactionForm {
        TransactionForm {
            description: "Almoço".into(),
            amount: "35,90".into(),
            source: source.key(),
            ..TransactionForm::new(day())
        }
    }

    #[test]
    fn source_keys_parse_back() {
        let id = Uuid::new_v4();
        assert_eq!(Source::parse(&Source::Card(id).key()), Some(Source::Card(id)));
        assert_eq!(Source::parse("wallet:abc"), None);
        assert_eq!(Source::parse(""), None);
    }

    #[test]
    fn defaults_to_paid_expense_today() {
        let form = TransactionForm::new(day());
        assert_eq!(form.kind, "expense");
        assert_eq!(form.status, "paid");
        assert_eq!(form.date, "2024-05-20");
    }

    #[test]
    fn card_source_sets_only_card() {
        let id = Uuid::new_v4();
        let create = filled(Source::Card(id)).to_create().unwrap();
        assert_eq!(create.credit_card_id, Some(id));
        assert_eq!(create.account_id, None);
        assert_eq!(create.amount, 35.9);
        assert_eq!(create.notes, None);
    }

    #[test]
    fn income_on_card_is_rejected() {
        let mut form = filled(Source::Card(Uuid::new_v4()));
        form.kind = "income".into();
        assert_eq!(form.to_create().unwrap_err(), "Cartão de crédito não aceita receitas");
    }

    #[test]
    fn missing_source_and_amount() {
        let mut form = filled(Source::Account(Uuid::new_v4()));
        form.source.clear();
        assert_eq!(form.to_create().unwrap_err(), "Informe uma conta ou um cartão");
        let mut form = filled(Source::Account(Uuid::new_v4()));
        form.amount = "".into();
        assert_eq!(form.to_create().unwrap_err(), "O valor deve ser maior que zero");
    }

    #[test]
    fn filters_ignore_empty_fields() {
        assert_eq!(FilterForm::default().to_filters(), TransactionFilters::default());
        let filters = FilterForm {
            kind: "income".into(),
            start: "2024-05-01".into(),
            ..Default::default()
        }
        .to_filters();
        assert_eq!(filters.transaction_type, Some(TransactionType::Income));
        assert_eq!(filters.start_date, NaiveDate::from_ymd_opt(2024, 5, 1));
        assert_eq!(filters.end_date, None);
    }
}
