//! Accounts and credit cards on one page, split into two sections.

use contracts::domain::a001_account::AccountListResponse;
use contracts::domain::a002_credit_card::CreditCardListResponse;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_account::api as account_api;
use crate::domain::a001_account::ui::dialog::AccountDialog;
use crate::domain::a001_account::ui::list::AccountList;
use crate::domain::a002_credit_card::api as card_api;
use crate::domain::a002_credit_card::ui::{CardDialog, CardList};
use crate::shared::api_utils::ApiError;
use crate::shared::components::{LoadingState, StatCard};
use crate::shared::icons::icon;
use crate::shared::number_format::format_currency;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::request_guard::RequestGuard;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Accounts,
    Cards,
}

#[component]
pub fn AccountsPage() -> impl IntoView {
    let section = RwSignal::new(Section::Accounts);
    let show_inactive = RwSignal::new(false);
    let accounts = RwSignal::new(Option::<AccountListResponse>::None);
    let cards = RwSignal::new(Option::<CreditCardListResponse>::None);
    let error = RwSignal::new(Option::<String>::None);
    let account_dialog = RwSignal::new(false);
    let card_dialog = RwSignal::new(false);
    let guard = StoredValue::new_local(RequestGuard::new());

    let load = move || {
        let include_inactive = show_inactive.get_untracked();
        let ticket = guard.with_value(|g| g.begin());
        spawn_local(async move {
            let result = async {
                let accounts = account_api::list_accounts(include_inactive).await?;
                let cards = card_api::list_cards(include_inactive).await?;
                Ok::<_, ApiError>((accounts, cards))
            }
            .await;
            if !ticket.is_current() {
                log::debug!("Dropping accounts response #{}", ticket.generation());
                return;
            }
            match result {
                Ok((account_list, card_list)) => {
                    accounts.set(Some(account_list));
                    cards.set(Some(card_list));
                    error.set(None);
                }
                Err(e) => {
                    log::error!("Failed to load accounts and cards: {}", e);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    Effect::new(move |_| {
        show_inactive.track();
        load();
    });

    let reload = Callback::new(move |_: ()| load());

    let account_count = move || accounts.with(|a| a.as_ref().map_or(0, |a| a.accounts.len()));
    let card_count = move || cards.with(|c| c.as_ref().map_or(0, |c| c.cards.len()));

    let actions = move || {
        view! {
            <button class="button button--secondary" on:click=move |_| load()>
                {icon("refresh")}
                "Atualizar"
            </button>
            <button
                class="button button--primary"
                on:click=move |_| match section.get_untracked() {
                    Section::Accounts => account_dialog.set(true),
                    Section::Cards => card_dialog.set(true),
                }
            >
                {icon("plus")}
                {move || match section.get() {
                    Section::Accounts => "Nova Conta",
                    Section::Cards => "Novo Cartão",
                }}
            </button>
        }
    };

    view! {
        <PageFrame
            page_id="a001_account--list"
            category=PAGE_CAT_LIST
            title="Contas e Cartões"
            subtitle="Gerencie suas contas bancárias e cartões de crédito"
            actions=actions
        >
            <div class="page__content">
                {move || error.get().map(|e| view! {
                    <div class="alert alert--error">{e}</div>
                })}

                <div class="stat-grid">
                    <StatCard
                        label="Saldo Total em Contas"
                        icon_name="wallet"
                        value=Signal::derive(move || {
                            format_currency(accounts.with(|a| a.as_ref().map_or(0.0, |a| a.total_balance)))
                        })
                    />
                    <StatCard
                        label="Limite Total em Cartões"
                        icon_name="credit-card"
                        value=Signal::derive(move || {
                            format_currency(cards.with(|c| c.as_ref().map_or(0.0, |c| c.total_limit)))
                        })
                    />
                </div>

                <Flex gap=FlexGap::Small align=FlexAlign::Center>
                    <div class="segmented">
                        <button
                            class="segmented__item"
                            class:segmented__item--active=move || section.get() == Section::Accounts
                            on:click=move |_| section.set(Section::Accounts)
                        >
                            {icon("wallet")}
                            {move || format!("Contas ({})", account_count())}
                        </button>
                        <button
                            class="segmented__item"
                            class:segmented__item--active=move || section.get() == Section::Cards
                            on:click=move |_| section.set(Section::Cards)
                        >
                            {icon("credit-card")}
                            {move || format!("Cartões ({})", card_count())}
                        </button>
                    </div>
                    <Switch checked=show_inactive label="Mostrar inativos" />
                </Flex>

                {move || {
                    if accounts.with(Option::is_none) && error.with(Option::is_none) {
                        return view! { <LoadingState /> }.into_any();
                    }
                    match section.get() {
                        Section::Accounts => view! {
                            <AccountList
                                accounts=Signal::derive(move || {
                                    accounts.with(|a| a.as_ref().map(|a| a.accounts.clone()).unwrap_or_default())
                                })
                                on_changed=reload
                            />
                        }
                        .into_any(),
                        Section::Cards => view! {
                            <CardList
                                cards=Signal::derive(move || {
                                    cards.with(|c| c.as_ref().map(|c| c.cards.clone()).unwrap_or_default())
                                })
                                on_changed=reload
                            />
                        }
                        .into_any(),
                    }
                }}
            </div>

            <AccountDialog open=account_dialog on_saved=reload />
            <CardDialog open=card_dialog on_saved=reload />
        </PageFrame>
    }
}
