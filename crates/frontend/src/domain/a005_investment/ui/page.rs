//! Portfolios on the left, the selected one's entries and balance chart on
//! the right.

use contracts::domain::a005_investment::{
    portfolio_totals, InvestmentEntry, InvestmentPortfolio, PortfolioUpdate,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use uuid::Uuid;

use crate::domain::a005_investment::api;
use crate::domain::a005_investment::ui::dialogs::{EntryDialog, PortfolioDialog};
use crate::domain::a005_investment::ui::entries::EntriesPanel;
use crate::shared::components::{EmptyState, LoadingState, StatCard};
use crate::shared::dialogs::{alert, confirm};
use crate::shared::icons::icon;
use crate::shared::number_format::format_currency;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::request_guard::RequestGuard;

#[component]
pub fn InvestmentsPage() -> impl IntoView {
    let show_inactive = RwSignal::new(false);
    let portfolios = RwSignal::new(Option::<Vec<InvestmentPortfolio>>::None);
    let selected = RwSignal::new(Option::<Uuid>::None);
    let entries = RwSignal::new(Vec::<InvestmentEntry>::new());
    let entries_loading = RwSignal::new(false);
    let portfolio_dialog = RwSignal::new(false);
    let entry_dialog = RwSignal::new(false);
    let list_guard = StoredValue::new_local(RequestGuard::new());
    let entries_guard = StoredValue::new_local(RequestGuard::new());

    let load_portfolios = move || {
        let include_inactive = show_inactive.get_untracked();
        let ticket = list_guard.with_value(|g| g.begin());
        spawn_local(async move {
            let result = api::list_portfolios(include_inactive).await;
            if !ticket.is_current() {
                log::debug!("Dropping portfolios response #{}", ticket.generation());
                return;
            }
            let list = result.unwrap_or_else(|e| {
                log::error!("Failed to load portfolios: {}", e);
                Vec::new()
            });
            // Keep the selection only while it is still listed
            if let Some(id) = selected.get_untracked() {
                if !list.iter().any(|p| p.id == id) {
                    selected.set(None);
                }
            }
            portfolios.set(Some(list));
        });
    };

    let load_entries = move |portfolio: Option<Uuid>| {
        let ticket = entries_guard.with_value(|g| g.begin());
        let Some(id) = portfolio else {
            entries.set(Vec::new());
            return;
        };
        entries_loading.set(true);
        spawn_local(async move {
            let result = api::list_entries(id).await;
            if !ticket.is_current() {
                log::debug!("Dropping entries response #{}", ticket.generation());
                return;
            }
            match result {
                Ok(list) => entries.set(list),
                Err(e) => {
                    log::error!("Failed to load entries of portfolio {}: {}", id, e);
                    entries.set(Vec::new());
                }
            }
            entries_loading.set(false);
        });
    };

    Effect::new(move |_| {
        show_inactive.track();
        load_portfolios();
    });

    Effect::new(move |_| load_entries(selected.get()));

    let on_portfolio_saved = Callback::new(move |_: ()| load_portfolios());
    let on_entry_saved = Callback::new(move |_: ()| {
        load_portfolios();
        load_entries(selected.get_untracked());
    });

    let selected_portfolio = Memo::new(move |_| {
        let id = selected.get()?;
        portfolios.with(|list| list.as_ref()?.iter().find(|p| p.id == id).cloned())
    });

    let totals = Memo::new(move |_| {
        portfolios.with(|list| portfolio_totals(list.as_deref().unwrap_or_default()))
    });

    let set_active = move |id: Uuid, active: bool| {
        let update = PortfolioUpdate {
            is_active: Some(active),
            ..Default::default()
        };
        spawn_local(async move {
            match api::update_portfolio(id, &update).await {
                Ok(_) => load_portfolios(),
                Err(e) => {
                    log::error!("Failed to update portfolio {}: {}", id, e);
                    alert(&e.to_string());
                }
            }
        });
    };

    let remove = move |id: Uuid| {
        if !confirm("Deseja realmente excluir esta carteira e suas movimentações?") {
            return;
        }
        spawn_local(async move {
            match api::delete_portfolio(id).await {
                Ok(()) => {
                    selected.set(None);
                    load_portfolios();
                }
                Err(e) => {
                    log::error!("Failed to delete portfolio {}: {}", id, e);
                    alert(&e.to_string());
                }
            }
        });
    };

    let actions = move || {
        view! {
            <button class="button button--primary" on:click=move |_| portfolio_dialog.set(true)>
                {icon("plus")}
                "Nova Carteira"
            </button>
        }
    };

    let portfolio_list = move || {
        let Some(list) = portfolios.get() else {
            return view! { <LoadingState /> }.into_any();
        };
        if list.is_empty() {
            return view! { <EmptyState message="Nenhuma carteira" /> }.into_any();
        }
        list.into_iter()
            .map(|p| {
                let id = p.id;
                view! {
                    <button
                        class="portfolio-item"
                        class:portfolio-item--selected=move || selected.get() == Some(id)
                        class:portfolio-item--inactive=!p.is_active
                        on:click=move |_| selected.set(Some(id))
                    >
                        <p class="portfolio-item__name">{p.name}</p>
                        <p class="portfolio-item__type">
                            {p.portfolio_type.unwrap_or_else(|| "Geral".to_string())}
                        </p>
                        <p class="portfolio-item__balance">
                            {format_currency(p.current_balance.unwrap_or(0.0))}
                        </p>
                    </button>
                }
            })
            .collect_view()
            .into_any()
    };

    let detail = move || {
        let Some(portfolio) = selected_portfolio.get() else {
            return view! { <EmptyState message="Selecione uma carteira para ver detalhes" /> }
                .into_any();
        };
        let id = portfolio.id;
        let active = portfolio.is_active;
        view! {
            <div class="card portfolio-detail__header">
                <div>
                    <h3 class="card__title">{portfolio.name}</h3>
                    {portfolio.description.map(|d| view! { <p class="card__subtitle">{d}</p> })}
                </div>
                <Flex gap=FlexGap::Small align=FlexAlign::Center>
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=!active
                        on_click=move |_| entry_dialog.set(true)
                    >
                        "Registrar Movimentação"
                    </Button>
                    <button
                        class="button button--ghost"
                        title=if active { "Arquivar" } else { "Reativar" }
                        on:click=move |_| set_active(id, !active)
                    >
                        {icon(if active { "archive" } else { "check" })}
                    </button>
                    <button
                        class="button button--ghost button--danger"
                        title="Excluir"
                        on:click=move |_| remove(id)
                    >
                        {icon("trash")}
                    </button>
                </Flex>
            </div>
            {move || if entries_loading.get() {
                view! { <LoadingState /> }.into_any()
            } else {
                view! { <EntriesPanel entries=entries /> }.into_any()
            }}
        }
        .into_any()
    };

    view! {
        <PageFrame
            page_id="a005_investment--list"
            category=PAGE_CAT_LIST
            title="Investimentos"
            subtitle="Acompanhe suas carteiras de investimento"
            actions=actions
        >
            <div class="page__content">
                <div class="stat-grid">
                    <StatCard
                        label="Total Investido"
                        icon_name="dollar-sign"
                        value=Signal::derive(move || format_currency(totals.get().0))
                    />
                    <StatCard
                        label="Saldo Atual"
                        icon_name="trending-up"
                        value=Signal::derive(move || format_currency(totals.get().1))
                    />
                </div>

                <div class="portfolio-layout">
                    <div class="card portfolio-layout__list">
                        <Flex gap=FlexGap::Small align=FlexAlign::Center>
                            <h3 class="card__title">"Carteiras"</h3>
                            <Switch checked=show_inactive label="Mostrar arquivadas" />
                        </Flex>
                        {portfolio_list}
                    </div>
                    <div class="portfolio-layout__detail">
                        {detail}
                    </div>
                </div>
            </div>

            <PortfolioDialog open=portfolio_dialog on_saved=on_portfolio_saved />
            <EntryDialog open=entry_dialog portfolio_id=selected on_saved=on_entry_saved />
        </PageFrame>
    }
}
