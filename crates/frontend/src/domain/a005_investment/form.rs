use chrono::NaiveDate;
use contracts::domain::a005_investment::{EntryCreate, EntryType, PortfolioCreate};

use crate::shared::date_utils::{input_date, parse_input_date};
use crate::shared::form_utils::non_empty;
use crate::shared::number_format::parse_amount;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PortfolioForm {
    pub name: String,
    pub portfolio_type: String,
    pub description: String,
}

impl PortfolioForm {
    pub fn to_create(&self) -> Result<PortfolioCreate, String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Informe o nome da carteira".to_string());
        }
        Ok(PortfolioCreate {
            name: name.to_string(),
            portfolio_type: non_empty(&self.portfolio_type),
            description: non_empty(&self.description),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EntryForm {
    pub entry_type: String,
    pub amount: String,
    pub date: String,
    pub description: String,
}

impl EntryForm {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            entry_type: EntryType::default().code().to_string(),
            amount: String::new(),
            date: input_date(today),
            description: String::new(),
        }
    }

    pub fn to_create(&self) -> Result<EntryCreate, String> {
        let amount = parse_amount(&self.amount)
            .filter(|a| *a > 0.0)
            .ok_or_else(|| "O valor deve ser maior que zero".to_string())?;
        let date = parse_input_date(&self.date).ok_or_else(|| "Data inválida".to_string())?;
        Ok(EntryCreate {
            entry_type: EntryType::from_code(&self.entry_type).unwrap_or_default(),
            amount,
            date,
            description: non_empty(&self.description),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portfolio_requires_name() {
        assert!(PortfolioForm::default().to_create().is_err());
        let create = PortfolioForm {
            name: "Tesouro Selic".into(),
            portfolio_type: " Renda Fixa ".into(),
            description: "".into(),
        }
        .to_create()
        .unwrap();
        assert_eq!(create.portfolio_type.as_deref(), Some("Renda Fixa"));
        assert_eq!(create.description, None);
    }

    #[test]
    fn withdrawal_entry() {
        let form = EntryForm {
            entry_type: "withdrawal".into(),
            amount: "1.000,00".into(),
            ..EntryForm::new(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap())
        };
        let create = form.to_create().unwrap();
        assert_eq!(create.entry_type, EntryType::Withdrawal);
        assert_eq!(create.amount, 1000.0);
        assert_eq!(create.date, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
    }

    #[test]
    fn entry_rejects_zero_and_bad_date() {
        let mut form = EntryForm::new(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        form.amount = "0".into();
        assert!(form.to_create().is_err());
        form.amount = "10".into();
        form.date = "01/02/2024".into();
        assert_eq!(form.to_create().unwrap_err(), "Data inválida");
    }
}
