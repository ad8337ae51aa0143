use contracts::domain::a006_integration::{BankAction, BankIntegration, BankProvider};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a006_integration::api;
use crate::domain::a006_integration::view_model::{provider_cards, ProviderCard};
use crate::shared::components::EmptyState;
use crate::shared::date_utils::format_datetime;
use crate::shared::dialogs::{alert, confirm};
use crate::shared::icons::icon;

#[component]
pub fn BankSection(
    #[prop(into)] providers: Signal<Vec<BankProvider>>,
    #[prop(into)] integrations: Signal<Vec<BankIntegration>>,
    /// Fired after any action succeeded.
    on_changed: Callback<()>,
) -> impl IntoView {
    // Busy key of the action in flight, see `BankAction::busy_key`
    let busy = RwSignal::new(Option::<String>::None);

    let run = Callback::new(move |(provider, action): (String, BankAction)| {
        if action == BankAction::Disconnect && !confirm("Deseja desconectar esta integração?") {
            return;
        }
        busy.set(Some(action.busy_key(&provider)));
        spawn_local(async move {
            match api::bank_action(&provider, action).await {
                Ok(()) => {
                    log::info!("Bank {} {}", provider, action.path_segment());
                    on_changed.run(());
                }
                Err(e) => {
                    log::error!("Bank {} {} failed: {}", provider, action.path_segment(), e);
                    alert(&e.to_string());
                }
            }
            busy.set(None);
        });
    });

    let cards = Memo::new(move |_| {
        let busy = busy.get();
        providers.with(|p| integrations.with(|i| provider_cards(p, i, busy.as_deref())))
    });

    view! {
        <section class="integration-section">
            <div class="integration-section__header">
                <div class="integration-section__icon">{icon("landmark")}</div>
                <div>
                    <h2 class="integration-section__title">"Integrações Bancárias"</h2>
                    <p class="integration-section__hint">
                        "Conecte suas contas para importar transações automaticamente"
                    </p>
                </div>
            </div>
            {move || {
                let cards = cards.get();
                if cards.is_empty() {
                    return view! { <EmptyState message="Nenhum banco disponível" /> }.into_any();
                }
                view! {
                    <div class="provider-grid">
                        {cards.into_iter().map(|card| view! { <ProviderTile card=card run=run /> }).collect_view()}
                    </div>
                }
                .into_any()
            }}
        </section>
    }
}

#[component]
fn ProviderTile(
    card: ProviderCard,
    run: Callback<(String, BankAction)>,
) -> impl IntoView {
    let connected = card.is_connected();
    let badge_color = if connected { BadgeColor::Success } else { BadgeColor::Subtle };
    let code = StoredValue::new(card.code.clone());
    let busy = card.syncing || card.toggling;

    let buttons = if connected {
        view! {
            <Button
                size=ButtonSize::Small
                appearance=ButtonAppearance::Secondary
                disabled=busy
                on_click=move |_| run.run((code.get_value(), BankAction::Sync))
            >
                {if card.syncing { "Sincronizando..." } else { "Sincronizar" }}
            </Button>
            <Button
                size=ButtonSize::Small
                appearance=ButtonAppearance::Subtle
                disabled=busy
                on_click=move |_| run.run((code.get_value(), BankAction::Disconnect))
            >
                {if card.toggling { "Aguarde..." } else { "Desconectar" }}
            </Button>
        }
        .into_any()
    } else {
        view! {
            <Button
                size=ButtonSize::Small
                appearance=ButtonAppearance::Primary
                disabled=busy || !card.available
                on_click=move |_| run.run((code.get_value(), BankAction::Connect))
            >
                {if card.toggling { "Aguarde..." } else { "Conectar" }}
            </Button>
        }
        .into_any()
    };

    view! {
        <div class="provider-card" data-provider=card.code>
            <div class="provider-card__top">
                <div class="provider-card__logo">{card.initial}</div>
                <div class="provider-card__info">
                    <p class="provider-card__name">{card.name}</p>
                    {card.last_sync.map(|ts| view! {
                        <p class="provider-card__sync">{format!("Sincronizado: {}", format_datetime(ts))}</p>
                    })}
                </div>
                <Badge appearance=BadgeAppearance::Tint color=badge_color>
                    {card.status.label()}
                </Badge>
            </div>
            <Flex gap=FlexGap::Small>{buttons}</Flex>
        </div>
    }
}
