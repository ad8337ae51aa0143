use crate::dashboards::d401_indicators::api;
use crate::dashboards::d401_indicators::view_model::{status_modifier, type_icon, IndicatorCardView};
use crate::shared::components::{LoadingState, PeriodSelect};
use crate::shared::date_utils::today;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::shared::request_guard::RequestGuard;
use contracts::shared::indicators::{IndicatorDefinition, IndicatorStatus, IndicatorType};
use contracts::shared::period::PeriodPreset;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[derive(Debug, Clone, PartialEq)]
enum Phase {
    Loading,
    Ready(Vec<IndicatorCardView>),
}

#[component]
pub fn IndicatorsDashboard() -> impl IntoView {
    let preset = RwSignal::new(PeriodPreset::Current);
    let phase = RwSignal::new(Phase::Loading);
    let catalog = RwSignal::new(Vec::<IndicatorDefinition>::new());
    let guard = StoredValue::new_local(RequestGuard::new());

    // Catalog is period independent, load once
    spawn_local(async move {
        match api::get_indicators().await {
            Ok(definitions) => catalog.set(definitions),
            Err(e) => log::error!("Failed to load indicator catalog: {}", e),
        }
    });

    Effect::new(move |_| {
        let period = preset.get().resolve(today());
        let ticket = guard.with_value(|g| g.begin());
        phase.set(Phase::Loading);

        spawn_local(async move {
            let result = api::get_indicator_values(&period).await;
            if !ticket.is_current() {
                log::debug!("Dropping indicator values #{}", ticket.generation());
                return;
            }
            let cards = match result {
                Ok(response) => response
                    .indicators
                    .iter()
                    .map(IndicatorCardView::from_value)
                    .collect(),
                Err(e) => {
                    log::error!("Failed to load indicators: {}", e);
                    Vec::new()
                }
            };
            phase.set(Phase::Ready(cards));
        });
    });

    let content = move || match phase.get() {
        Phase::Loading => view! { <LoadingState /> }.into_any(),
        Phase::Ready(cards) if cards.is_empty() => view! {
            <div class="empty-state">
                {icon("activity")}
                <p class="empty-state__message">"Nenhum indicador disponível"</p>
                <p class="empty-state__hint">"Adicione transações para ver seus indicadores"</p>
            </div>
        }
        .into_any(),
        Phase::Ready(cards) => view! {
            <div class="indicator-grid">
                {cards
                    .into_iter()
                    .map(|card| view! { <IndicatorCard card=card /> })
                    .collect_view()}
            </div>
        }
        .into_any(),
    };

    view! {
        <PageFrame
            page_id="d401_indicators--dashboard"
            category=PAGE_CAT_DASHBOARD
            title="Indicadores"
            subtitle="Acompanhe sua saúde financeira"
            actions=move || view! { <PeriodSelect preset=preset /> }
        >
            <div class="page__content">
                {content}

                <Show when=move || catalog.with(|c| !c.is_empty())>
                    <div class="card indicator-about">
                        <h3 class="card__title">"Sobre os Indicadores"</h3>
                        {move || catalog.get().into_iter().map(|def| {
                            let kind = def.kind.unwrap_or(IndicatorType::Number);
                            view! {
                                <div class="indicator-about__row">
                                    <div class="indicator-about__icon">{icon(type_icon(kind))}</div>
                                    <div>
                                        <p class="indicator-about__name">{def.name}</p>
                                        <p>{def.description.unwrap_or_default()}</p>
                                    </div>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                </Show>
            </div>
        </PageFrame>
    }
}

#[component]
fn IndicatorCard(card: IndicatorCardView) -> impl IntoView {
    let modifier = status_modifier(card.status);
    let badge = card.status.label().map(|label| {
        let color = match card.status {
            IndicatorStatus::Good => BadgeColor::Success,
            IndicatorStatus::Warning => BadgeColor::Warning,
            _ => BadgeColor::Danger,
        };
        view! {
            <Badge appearance=BadgeAppearance::Tint color=color>
                {label}
            </Badge>
        }
    });
    let progress = card.progress.map(|width| {
        view! {
            <div class="indicator-card__track">
                <div
                    class=format!("indicator-card__bar indicator-card__bar--{modifier}")
                    style=format!("width: {width}")
                ></div>
            </div>
        }
    });

    view! {
        <div class="indicator-card" data-code=card.code>
            <div class="indicator-card__top">
                <div class=format!("indicator-card__icon indicator-card__icon--{modifier}")>
                    {icon(card.icon)}
                </div>
                {badge}
            </div>
            <p class="indicator-card__name">{card.name}</p>
            <p class="indicator-card__value">{card.value}</p>
            {progress}
        </div>
    }
}
