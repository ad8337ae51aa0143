use contracts::domain::a001_account::{Account, AccountUpdate};
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

use crate::domain::a001_account::api;
use crate::shared::components::EmptyState;
use crate::shared::dialogs::{alert, confirm};
use crate::shared::icons::icon;
use crate::shared::number_format::format_currency;

#[derive(Clone, Debug, PartialEq)]
pub struct AccountRow {
    pub id: Uuid,
    pub name: String,
    pub type_label: &'static str,
    pub institution: String,
    pub balance: String,
    pub negative: bool,
    pub color: Option<String>,
    pub is_active: bool,
}

impl From<Account> for AccountRow {
    fn from(a: Account) -> Self {
        Self {
            id: a.id,
            name: a.name,
            type_label: a.account_type.label(),
            institution: a.institution.unwrap_or_else(|| "-".to_string()),
            balance: format_currency(a.current_balance),
            negative: a.current_balance < 0.0,
            color: a.color,
            is_active: a.is_active,
        }
    }
}

#[component]
pub fn AccountList(
    #[prop(into)] accounts: Signal<Vec<Account>>,
    /// Fired after a row was changed or removed on the server.
    on_changed: Callback<()>,
) -> impl IntoView {
    let toggle_active = move |id: Uuid, active: bool| {
        let update = AccountUpdate {
            is_active: Some(!active),
            ..Default::default()
        };
        spawn_local(async move {
            match api::update_account(id, &update).await {
                Ok(_) => on_changed.run(()),
                Err(e) => {
                    log::error!("Failed to update account {}: {}", id, e);
                    alert("Erro ao atualizar conta");
                }
            }
        });
    };

    let remove = move |id: Uuid| {
        if !confirm("Deseja realmente excluir esta conta?") {
            return;
        }
        spawn_local(async move {
            match api::delete_account(id).await {
                Ok(()) => on_changed.run(()),
                Err(e) => {
                    log::error!("Failed to delete account {}: {}", id, e);
                    alert("Erro ao excluir conta");
                }
            }
        });
    };

    move || {
        let rows: Vec<AccountRow> = accounts.get().into_iter().map(Into::into).collect();
        if rows.is_empty() {
            return view! { <EmptyState message="Nenhuma conta cadastrada" /> }.into_any();
        }
        view! {
            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Nome"</th>
                            <th class="table__header-cell">"Tipo"</th>
                            <th class="table__header-cell">"Instituição"</th>
                            <th class="table__header-cell table__header-cell--right">"Saldo atual"</th>
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
                                    <td class="table__cell">{row.type_label}</td>
                                    <td class="table__cell">{row.institution}</td>
                                    <td
                                        class="table__cell table__cell--right"
                                        class:amount--negative=row.negative
                                    >
                                        {row.balance}
                                    </td>
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
    use contracts::domain::a001_account::AccountType;

    fn account(balance: f64, institution: Option<&str>) -> Account {
        Account {
            id: Uuid::nil(),
            user_id: Uuid::nil(),
            name: "Nubank".into(),
            account_type: AccountType::Savings,
            institution: institution.map(str::to_string),
            initial_balance: 0.0,
            current_balance: balance,
            color: None,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn row_formats_balance_and_type() {
        let row = AccountRow::from(account(-12.5, Some("Nu Pagamentos")));
        assert_eq!(row.type_label, "Poupança");
        assert_eq!(row.balance, "-R$ 12,50");
        assert!(row.negative);
        assert_eq!(row.institution, "Nu Pagamentos");
    }

    #[test]
    fn missing_institution_shows_dash() {
        let row = AccountRow::from(account(10.0, None));
        assert_eq!(row.institution, "-");
        assert!(!row.negative);
    }
}
