use contracts::domain::a002_credit_card::CreditCardCreate;

use crate::domain::a001_account::form::DEFAULT_COLOR;
use crate::shared::form_utils::non_empty;
use crate::shared::number_format::parse_amount;

/// Raw input of the new card dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct CardForm {
    pub name: String,
    pub institution: String,
    pub limit: String,
    pub closing_day: String,
    pub due_day: String,
    pub color: String,
}

impl Default for CardForm {
    fn default() -> Self {
        let defaults = CreditCardCreate::default();
        Self {
            name: String::new(),
            institution: String::new(),
            limit: String::new(),
            closing_day: defaults.closing_day.to_string(),
            due_day: defaults.due_day.to_string(),
            color: DEFAULT_COLOR.to_string(),
        }
    }
}

impl CardForm {
    pub fn to_create(&self) -> Result<CreditCardCreate, String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Informe o nome do cartão".to_string());
        }
        let institution = self.institution.trim();
        if institution.is_empty() {
            return Err("Informe o banco emissor".to_string());
        }
        let limit = parse_amount(&self.limit)
            .filter(|l| *l >= 0.0)
            .ok_or_else(|| "Limite inválido".to_string())?;
        let create = CreditCardCreate {
            name: name.to_string(),
            institution: institution.to_string(),
            limit,
            closing_day: self.closing_day.trim().parse().unwrap_or(0),
            due_day: self.due_day.trim().parse().unwrap_or(0),
            color: non_empty(&self.color),
        };
        if !create.days_valid() {
            return Err("Dias de fechamento e vencimento devem estar entre 1 e 31".to_string());
        }
        Ok(create)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> CardForm {
        CardForm {
            name: "Platinum".into(),
            institution: "Nubank".into(),
            limit: "5000".into(),
            ..Default::default()
        }
    }

    #[test]
    fn defaults_to_day_1_and_10() {
        let create = filled().to_create().unwrap();
        assert_eq!((create.closing_day, create.due_day), (1, 10));
        assert_eq!(create.limit, 5000.0);
    }

    #[test]
    fn rejects_days_out_of_range() {
        let mut form = filled();
        form.due_day = "32".into();
        assert!(form.to_create().is_err());
        form.due_day = "0".into();
        assert!(form.to_create().is_err());
        form.due_day = "31".into();
        assert!(form.to_create().is_ok());
    }

    #[test]
    fn requires_institution_and_limit() {
        let mut form = filled();
        form.institution = "  ".into();
        assert_eq!(form.to_create().unwrap_err(), "Informe o banco emissor");
        let mut form = filled();
        form.limit = "".into();
        assert_eq!(form.to_create().unwrap_err(), "Limite inválido");
    }
}
