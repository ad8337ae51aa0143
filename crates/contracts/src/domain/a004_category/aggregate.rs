use crate::domain::a003_transaction::TransactionType;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Transaction category. System categories have no `user_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: Uuid,
    #[serde(default)]
    pub user_id: Option<Uuid>,
    pub name: String,
    #[serde(rename = "type")]
    pub category_type: TransactionType,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    pub is_active: bool,
}

impl Category {
    pub fn is_system(&self) -> bool {
        self.user_id.is_none()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCreate {
    pub name: String,
    #[serde(rename = "type")]
    pub category_type: TransactionType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Query for `GET /categories`; no type means both.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryQuery {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub category_type: Option<TransactionType>,
}

impl CategoryQuery {
    pub fn to_query_string(&self) -> String {
        serde_qs::to_string(self).unwrap_or_default()
    }
}

/// Keep only categories usable for the given transaction type.
pub fn categories_for(categories: &[Category], kind: TransactionType) -> Vec<Category> {
    categories
        .iter()
        .filter(|c| c.is_active && c.category_type == kind)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(name: &str, kind: TransactionType, active: bool) -> Category {
        Category {
            id: Uuid::new_v4(),
            user_id: None,
            name: name.into(),
            category_type: kind,
            icon: None,
            color: None,
            is_active: active,
        }
    }

    #[test]
    fn filters_by_type_and_activity() {
        let all = vec![
            category("Salário", TransactionType::Income, true),
            category("Mercado", TransactionType::Expense, true),
            category("Antiga", TransactionType::Expense, false),
        ];
        let expenses = categories_for(&all, TransactionType::Expense);
        assert_eq!(expenses.len(), 1);
        assert_eq!(expenses[0].name, "Mercado");
        assert!(expenses[0].is_system());
    }

    #[test]
    fn query_string() {
        assert_eq!(CategoryQuery::default().to_query_string(), "");
        let q = CategoryQuery {
            category_type: Some(TransactionType::Income),
        };
        assert_eq!(q.to_query_string(), "type=income");
    }
}
