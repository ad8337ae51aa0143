use contracts::domain::a003_transaction::{
    Transaction, TransactionStatus, TransactionType, TransactionUpdate,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use uuid::Uuid;

use crate::domain::a003_transaction::api;
use crate::shared::charts::palette::NEUTRAL_COLOR;
use crate::shared::components::EmptyState;
use crate::shared::date_utils::format_date;
use crate::shared::dialogs::{alert, confirm};
use crate::shared::icons::icon;
use crate::shared::number_format::format_currency;

#[derive(Clone, Debug, PartialEq)]
pub struct TransactionRow {
    pub id: Uuid,
    pub date: String,
    pub description: String,
    pub category: String,
    pub category_color: String,
    pub source: String,
    pub status: TransactionStatus,
    pub amount: String,
    pub is_income: bool,
    pub is_recurring: bool,
}

impl From<Transaction> for TransactionRow {
    fn from(t: Transaction) -> Self {
        let is_income = t.transaction_type == TransactionType::Income;
        let sign = if is_income { "+" } else { "-" };
        Self {
            id: t.id,
            date: format_date(t.date),
            source: t.source_name().unwrap_or("-").to_string(),
            description: t.description,
            category: t.category_name.unwrap_or_else(|| "-".to_string()),
            category_color: t.category_color.unwrap_or_else(|| NEUTRAL_COLOR.to_string()),
            status: t.status,
            amount: format!("{sign}{}", format_currency(t.amount.abs())),
            is_income,
            is_recurring: t.is_recurring,
        }
    }
}

fn status_badge(status: TransactionStatus) -> impl IntoView {
    let color = match status {
        TransactionStatus::Paid => BadgeColor::Success,
        TransactionStatus::Pending => BadgeColor::Warning,
        TransactionStatus::Cancelled => BadgeColor::Informative,
    };
    view! {
        <Badge appearance=BadgeAppearance::Tint color=color>
            {status.label()}
        </Badge>
    }
}

#[component]
pub fn TransactionTable(
    #[prop(into)] transactions: Signal<Vec<Transaction>>,
    on_changed: Callback<()>,
) -> impl IntoView {
    let mark_paid = move |id: Uuid| {
        let update = TransactionUpdate {
            status: Some(TransactionStatus::Paid),
            ..Default::default()
        };
        spawn_local(async move {
            match api::update_transaction(id, &update).await {
                Ok(_) => on_changed.run(()),
                Err(e) => {
                    log::error!("Failed to mark transaction {} as paid: {}", id, e);
                    alert(&e.to_string());
                }
            }
        });
    };

    let remove = move |id: Uuid| {
        if !confirm("Deseja realmente excluir este lançamento?") {
            return;
        }
        spawn_local(async move {
            match api::delete_transaction(id).await {
                Ok(()) => on_changed.run(()),
                Err(e) => {
                    log::error!("Failed to delete transaction {}: {}", id, e);
                    alert(&e.to_string());
                }
            }
        });
    };

    move || {
        let rows: Vec<TransactionRow> = transactions.get().into_iter().map(Into::into).collect();
        if rows.is_empty() {
            return view! { <EmptyState message="Nenhum lançamento encontrado" /> }.into_any();
        }
        view! {
            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Data"</th>
                            <th class="table__header-cell">"Descrição"</th>
                            <th class="table__header-cell">"Categoria"</th>
                            <th class="table__header-cell">"Conta"</th>
                            <th class="table__header-cell">"Status"</th>
                            <th class="table__header-cell table__header-cell--right">"Valor"</th>
                            <th class="table__header-cell table__header-cell--center">"Ações"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {rows.into_iter().map(|row| {
                            let id = row.id;
                            let pending = row.status == TransactionStatus::Pending;
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{row.date}</td>
                                    <td class="table__cell">
                                        {row.description}
                                        {row.is_recurring.then(|| view! {
                                            <span class="table__hint" title="Recorrente">{icon("refresh")}</span>
                                        })}
                                    </td>
                                    <td class="table__cell">
                                        <span class="color-dot" style=format!("background: {}", row.category_color)></span>
                                        {row.category}
                                    </td>
                                    <td class="table__cell">{row.source}</td>
                                    <td class="table__cell">{status_badge(row.status)}</td>
                                    <td
                                        class="table__cell table__cell--right"
                                        class:amount--positive=row.is_income
                                        class:amount--negative=!row.is_income
                                    >
                                        {row.amount}
                                    </td>
                                    <td class="table__cell table__cell--actions">
                                        {pending.then(|| view! {
                                            <button
                                                class="button button--ghost"
                                                title="Marcar como pago"
                                                on:click=move |_| mark_paid(id)
                                            >
                                                {icon("check")}
                                            </button>
                                        })}
                                        <button
                                            class="button button--ghost button--danger"
                                            title="Excluir"
                                            on:click=move |_| remove(id)
                                        >
                                            {icon("trash")}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        }
        .into_any()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    fn transaction(kind: TransactionType) -> Transaction {
        Transaction {
            id: Uuid::nil(),
            user_id: Uuid::nil(),
            account_id: None,
            credit_card_id: Some(Uuid::nil()),
            category_id: None,
            transaction_type: kind,
            description: "Mercado".into(),
            amount: 120.5,
            date: NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
            status: TransactionStatus::Pending,
            is_recurring: false,
            recurring_id: None,
            notes: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            account_name: None,
            credit_card_name: Some("Roxinho".into()),
            category_name: None,
            category_color: None,
        }
    }

    #[test]
    fn expense_row_is_signed_and_uses_card_name() {
        let row = TransactionRow::from(transaction(TransactionType::Expense));
        assert_eq!(row.amount, "-R$ 120,50");
        assert_eq!(row.source, "Roxinho");
        assert_eq!(row.date, "09/03/2024");
        assert_eq!(row.category, "-");
        assert_eq!(row.category_color, NEUTRAL_COLOR);
    }

    #[test]
    fn income_row_has_plus_sign() {
        let row = TransactionRow::from(transaction(TransactionType::Income));
        assert_eq!(row.amount, "+R$ 120,50");
        assert!(row.is_income);
    }
}
