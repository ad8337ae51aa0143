use contracts::domain::a002_credit_card::{CreditCard, CreditCardUpdate};
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

use crate::domain::a002_credit_card::api;
use crate::shared::components::EmptyState;
use crate::shared::dialogs::{alert, confirm};
use crate::shared::icons::icon;
use crate::shared::number_format::format_currency;

#[derive(Clone, Debug, PartialEq)]
pub struct CardRow {
    pub id: Uuid,
    pub name: String,
    pub institution: String,
    pub limit: String,
    pub invoice: String,
    pub available: String,
    pub closing: String,
    pub due: String,
    pub color: Option<String>,
    pub is_active: bool,
}

impl From<CreditCard> for CardRow {
    fn from(c: CreditCard) -> Self {
        let money = |v: Option<f64>| v.map(format_currency).unwrap_or_else(|| "-".to_string());
        Self {
            id: c.id,
            name: c.name,
            institution: c.institution,
            limit: format_currency(c.limit),
            invoice: money(c.current_invoice),
            available: money(c.available_limit),
            closing: format!("Dia {}", c.closing_day),
            due: format!("Dia {}", c.due_day),
            color: c.color,
            is_active: c.is_active,
        }
    }
}

#[component]
pub fn CardList(
    #[prop(into)] cards: Signal<Vec<CreditCard>>,
    on_changed: Callback<()>,
) -> impl IntoView {
    let toggle_active = move |id: Uuid, active: bool| {
        let update = CreditCardUpdate {
            is_active: Some(!active),
            ..Default::default()
        };
        spawn_local(async move {
            match api::update_card(id, &update).await {
                Ok(_) => on_changed.run(()),
                Err(e) => {
                    log::error!("Failed to update card {}: {}", id, e);
                    alert("Erro ao atualizar cartão");
                }
            }
        });
    };

    let remove = move |id: Uuid| {
        if !confirm("Deseja realmente excluir este cartão?") {
            return;
        }
        spawn_local(async move {
            match api::delete_card(id).await {
                Ok(()) => on_changed.run(()),
                Err(e) => {
                    log::error!("Failed to delete card {}: {}", id, e);
                    alert("Erro ao excluir cartão");
                }
            }
        });
    };

    move || {
        let rows: Vec<CardRow> = cards.get().into_iter().map(Into::into).collect();
        if rows.is_empty() {
            return view! { <EmptyState message="Nenhum cartão cadastrado" /> }.into_any();
        }
        view! {
            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Cartão"</th>
                            <th class="table__header-cell">"Banco Emissor"</th>
                            <th class="table__header-cell table__header-cell--right">"Limite"</th>
                            <th class="table__header-cell table__header-cell--right">"Fatura atual"</th>
                            <th class="table__header-cell table__header-cell--right">"Disponível"</th>
                            <th class="table__header-cell">"Fechamento"</th>
                            <th class="table__header-cell">"Vencimento"</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {rows.into_iter().map(|row| {
                            let id = row.id;
                            let active = row.is_active;
                            let swatch = row.color.clone().unwrap_or_default();
                            view! {
                                <tr class="table__row" class:table__row--inactive=!active>
                                    <td class="table__cell">
                                        <span class="color-dot" style=format!("background: {swatch}")></span>
                                        {row.name}
                                    </td>
                                    <td class="table__cell">{row.institution}</td>
                                    <td class="table__cell table__cell--right">{row.limit}</td>
                                    <td class="table__cell table__cell--right">{row.invoice}</td>
                                    <td class="table__cell table__cell--right">{row.available}</td>
                                    <td class="table__cell">{row.closing}</td>
                                    <td class="table__cell">{row.due}</td>
                                    <td class="table__cell table__cell--actions">
                                        <button
                                            class="button button--ghost"
                                            title=if active { "Desativar" } else { "Ativar" }
                                            on:click=move |_| toggle_active(id, active)
                                        >
                                            {icon(if active { "power" } else { "check" })}
                                        </button>
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
    use chrono::Utc;

    #[test]
    fn row_shows_days_and_missing_invoice() {
        let card = CreditCard {
            id: Uuid::nil(),
            user_id: Uuid::nil(),
            name: "Roxinho".into(),
            institution: "Nubank".into(),
            limit: 5000.0,
            closing_day: 3,
            due_day: 10,
            color: None,
            is_active: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            current_invoice: None,
            available_limit: Some(4200.5),
        };
        let row = CardRow::from(card);
        assert_eq!(row.limit, "R$ 5.000,00");
        assert_eq!(row.invoice, "-");
        assert_eq!(row.available, "R$ 4.200,50");
        assert_eq!((row.closing.as_str(), row.due.as_str()), ("Dia 3", "Dia 10"));
        assert!(!row.is_active);
    }
}
