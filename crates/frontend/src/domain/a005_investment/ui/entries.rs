use contracts::domain::a005_investment::{running_balance, EntryType, InvestmentEntry};
use leptos::prelude::*;

use crate::shared::charts::AreaChart;
use crate::shared::components::EmptyState;
use crate::shared::date_utils::{format_date, format_day_month};
use crate::shared::number_format::format_currency;

/// Chart labels and running balance values, in server order.
pub fn balance_chart(entries: &[InvestmentEntry]) -> (Vec<String>, Vec<f64>) {
    running_balance(entries)
        .into_iter()
        .map(|p| (format_day_month(p.date), p.value))
        .unzip()
}

#[derive(Clone, Debug, PartialEq)]
pub struct EntryRow {
    pub label: &'static str,
    pub is_deposit: bool,
    pub amount: String,
    pub date: String,
    pub description: Option<String>,
}

impl From<&InvestmentEntry> for EntryRow {
    fn from(e: &InvestmentEntry) -> Self {
        let is_deposit = e.entry_type == EntryType::Deposit;
        Self {
            label: e.entry_type.label(),
            is_deposit,
            amount: format!("{}{}", if is_deposit { "+" } else { "-" }, format_currency(e.amount)),
            date: format_date(e.date),
            description: e.description.clone(),
        }
    }
}

#[component]
pub fn EntriesPanel(#[prop(into)] entries: Signal<Vec<InvestmentEntry>>) -> impl IntoView {
    let chart = Memo::new(move |_| entries.with(|e| balance_chart(e)));

    move || {
        let rows: Vec<EntryRow> = entries.with(|e| e.iter().map(EntryRow::from).collect());
        if rows.is_empty() {
            return view! { <EmptyState message="Nenhuma movimentação registrada" /> }.into_any();
        }
        view! {
            <div class="card">
                <h3 class="card__title">"Evolução do saldo"</h3>
                <AreaChart
                    labels=Signal::derive(move || chart.with(|c| c.0.clone()))
                    values=Signal::derive(move || chart.with(|c| c.1.clone()))
                />
            </div>
            <div class="card">
                <h3 class="card__title">"Movimentações"</h3>
                <ul class="entry-list">
                    {rows.into_iter().map(|row| view! {
                        <li class="entry-list__item">
                            <span
                                class="entry-list__badge"
                                class:entry-list__badge--deposit=row.is_deposit
                                class:entry-list__badge--withdrawal=!row.is_deposit
                            >
                                {row.label}
                            </span>
                            <div class="entry-list__body">
                                <p class="entry-list__date">{row.date}</p>
                                {row.description.map(|d| view! { <p class="entry-list__description">{d}</p> })}
                            </div>
                            <span
                                class="entry-list__amount"
                                class:amount--positive=row.is_deposit
                                class:amount--negative=!row.is_deposit
                            >
                                {row.amount}
                            </span>
                        </li>
                    }).collect_view()}
                </ul>
            </div>
        }
        .into_any()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use uuid::Uuid;

    fn entry(kind: EntryType, amount: f64, day: u32) -> InvestmentEntry {
        InvestmentEntry {
            id: Uuid::new_v4(),
            portfolio_id: Uuid::nil(),
            entry_type: kind,
            amount,
            date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            description: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn chart_follows_server_order() {
        let entries = vec![
            entry(EntryType::Deposit, 100.0, 10),
            entry(EntryType::Withdrawal, 30.0, 5),
            entry(EntryType::Deposit, 20.0, 20),
        ];
        let (labels, values) = balance_chart(&entries);
        assert_eq!(labels, ["10/01", "05/01", "20/01"]);
        assert_eq!(values, [100.0, 70.0, 90.0]);
    }

    #[test]
    fn withdrawal_row_is_negative() {
        let row = EntryRow::from(&entry(EntryType::Withdrawal, 30.0, 5));
        assert_eq!(row.label, "Resgate");
        assert_eq!(row.amount, "-R$ 30,00");
        assert!(!row.is_deposit);
    }
}
