use contracts::domain::a001_account::{AccountCreate, AccountType};

use crate::shared::form_utils::non_empty;
use crate::shared::number_format::parse_amount;

/// Colour preselected for new accounts and cards.
pub const DEFAULT_COLOR: &str = "#166534";

/// Raw input of the new account dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountForm {
    pub name: String,
    pub account_type: String,
    pub institution: String,
    pub initial_balance: String,
    pub color: String,
}

impl Default for AccountForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            account_type: AccountType::Checking.code().to_string(),
            institution: String::new(),
            initial_balance: String::new(),
            color: DEFAULT_COLOR.to_string(),
        }
    }
}

impl AccountForm {
    /// Empty balance means zero; anything else must parse.
    pub fn to_create(&self) -> Result<AccountCreate, String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Informe o nome da conta".to_string());
        }
        let initial_balance = if self.initial_balance.trim().is_empty() {
            0.0
        } else {
            parse_amount(&self.initial_balance).ok_or_else(|| "Saldo inicial inválido".to_string())?
        };
        Ok(AccountCreate {
            name: name.to_string(),
            account_type: AccountType::from_code(&self.account_type).unwrap_or_default(),
            institution: non_empty(&self.institution),
            initial_balance,
            color: non_empty(&self.color),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_create_request() {
        let form = AccountForm {
            name: " Nubank ".into(),
            account_type: "savings".into(),
            institution: "".into(),
            initial_balance: "1.500,25".into(),
            ..Default::default()
        };
        let create = form.to_create().unwrap();
        assert_eq!(create.name, "Nubank");
        assert_eq!(create.account_type, AccountType::Savings);
        assert_eq!(create.institution, None);
        assert_eq!(create.initial_balance, 1500.25);
        assert_eq!(create.color.as_deref(), Some(DEFAULT_COLOR));
    }

    #[test]
    fn empty_balance_is_zero() {
        let form = AccountForm {
            name: "Carteira".into(),
            ..Default::default()
        };
        assert_eq!(form.to_create().unwrap().initial_balance, 0.0);
    }

    #[test]
    fn rejects_missing_name_and_bad_balance() {
        assert!(AccountForm::default().to_create().is_err());
        let form = AccountForm {
            name: "X".into(),
            initial_balance: "abc".into(),
            ..Default::default()
        };
        assert_eq!(form.to_create().unwrap_err(), "Saldo inicial inválido");
    }
}
