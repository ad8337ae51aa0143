use contracts::domain::a001_account::Account;
use contracts::domain::a002_credit_card::CreditCard;
use contracts::domain::a003_transaction::{TransactionListResponse, TransactionType};
use contracts::domain::a004_category::Category;
use contracts::shared::indicators::IndicatorStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_account::api as account_api;
use crate::domain::a002_credit_card::api as card_api;
use crate::domain::a003_transaction::api;
use crate::domain::a003_transaction::form::FilterForm;
use crate::domain::a003_transaction::ui::dialog::TransactionDialog;
use crate::domain::a003_transaction::ui::list::TransactionTable;
use crate::domain::a004_category::api as category_api;
use crate::shared::components::{LoadingState, StatCard};
use crate::shared::icons::icon;
use crate::shared::number_format::format_currency;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::request_guard::RequestGuard;

#[component]
pub fn TransactionsPage() -> impl IntoView {
    let filter_kind = RwSignal::new(String::new());
    let filter_account = RwSignal::new(String::new());
    let filter_start = RwSignal::new(String::new());
    let filter_end = RwSignal::new(String::new());

    let list = RwSignal::new(Option::<TransactionListResponse>::None);
    let loading = RwSignal::new(true);
    let categories = RwSignal::new(Vec::<Category>::new());
    let accounts = RwSignal::new(Vec::<Account>::new());
    let cards = RwSignal::new(Vec::<CreditCard>::new());
    let dialog_open = RwSignal::new(false);
    let guard = StoredValue::new_local(RequestGuard::new());

    // Lookups for the filter bar and the form
    spawn_local(async move {
        match category_api::list_categories(None).await {
            Ok(all) => categories.set(all),
            Err(e) => log::error!("Failed to load categories: {}", e),
        }
        match account_api::list_accounts(false).await {
            Ok(response) => accounts.set(response.accounts),
            Err(e) => log::error!("Failed to load accounts: {}", e),
        }
        match card_api::list_cards(false).await {
            Ok(response) => cards.set(response.cards),
            Err(e) => log::error!("Failed to load credit cards: {}", e),
        }
    });

    let load = move || {
        let filters = FilterForm {
            kind: filter_kind.get_untracked(),
            account: filter_account.get_untracked(),
            start: filter_start.get_untracked(),
            end: filter_end.get_untracked(),
        }
        .to_filters();
        let ticket = guard.with_value(|g| g.begin());
        loading.set(true);

        spawn_local(async move {
            let result = api::list_transactions(&filters).await;
            if !ticket.is_current() {
                log::debug!("Dropping transactions response #{}", ticket.generation());
                return;
            }
            match result {
                Ok(response) => list.set(Some(response)),
                Err(e) => {
                    log::error!("Failed to load transactions: {}", e);
                    list.set(None);
                }
            }
            loading.set(false);
        });
    };

    Effect::new(move |_| {
        filter_kind.track();
        filter_account.track();
        filter_start.track();
        filter_end.track();
        load();
    });

    let reload = Callback::new(move |_: ()| load());

    let total = move |pick: fn(&TransactionListResponse) -> f64| {
        Signal::derive(move || format_currency(list.with(|l| l.as_ref().map_or(0.0, pick))))
    };

    let actions = move || {
        view! {
            <button class="button button--primary" on:click=move |_| dialog_open.set(true)>
                {icon("plus")}
                "Novo Lançamento"
            </button>
        }
    };

    view! {
        <PageFrame
            page_id="a003_transaction--list"
            category=PAGE_CAT_LIST
            title="Transações"
            subtitle="Receitas e despesas lançadas"
            actions=actions
        >
            <div class="page__content">
                <div class="stat-grid">
                    <StatCard
                        label="Receitas"
                        icon_name="trending-up"
                        value=total(|l| l.total_income)
                        status=IndicatorStatus::Good
                    />
                    <StatCard
                        label="Despesas"
                        icon_name="trending-down"
                        value=total(|l| l.total_expense)
                        status=IndicatorStatus::Bad
                    />
                    <StatCard label="Saldo" icon_name="dollar-sign" value=total(|l| l.balance) />
                </div>

                <div class="filter-bar">
                    <Flex gap=FlexGap::Small align=FlexAlign::Center>
                        <Select value=filter_kind size=SelectSize::Small>
                            <option value="">"Todos os tipos"</option>
                            {TransactionType::ALL
                                .iter()
                                .map(|t| view! { <option value=t.code()>{t.label()}</option> })
                                .collect_view()}
                        </Select>
                        <Select value=filter_account size=SelectSize::Small>
                            <option value="">"Todas as contas"</option>
                            {move || accounts.get().into_iter().map(|a| {
                                view! { <option value=a.id.to_string()>{a.name}</option> }
                            }).collect_view()}
                        </Select>
                        <input type="date" class="form__input" title="De" bind:value=filter_start />
                        <input type="date" class="form__input" title="Até" bind:value=filter_end />
                        <button
                            class="button button--secondary"
                            on:click=move |_| {
                                filter_kind.set(String::new());
                                filter_account.set(String::new());
                                filter_start.set(String::new());
                                filter_end.set(String::new());
                            }
                        >
                            "Limpar filtros"
                        </button>
                    </Flex>
                </div>

                {move || {
                    if loading.get() && list.with(Option::is_none) {
                        view! { <LoadingState /> }.into_any()
                    } else {
                        view! {
                            <TransactionTable
                                transactions=Signal::derive(move || {
                                    list.with(|l| l.as_ref().map(|l| l.transactions.clone()).unwrap_or_default())
                                })
                                on_changed=reload
                            />
                        }
                        .into_any()
                    }
                }}
            </div>

            <TransactionDialog
                open=dialog_open
                categories=categories
                accounts=accounts
                cards=cards
                on_saved=reload
            />
        </PageFrame>
    }
}
