use crate::dashboards::d400_finance_overview::api;
use crate::dashboards::d400_finance_overview::view_model::{
    bar_width, monthly_bars, settle, DashboardPhase, DashboardView, SeriesSet, TopCategory,
};
use crate::shared::charts::{BarChart, LineChart, PieChart};
use crate::shared::components::{EmptyState, LoadingState, PeriodSelect, StatCard};
use crate::shared::date_utils::today;
use crate::shared::icons::icon;
use crate::shared::number_format::format_currency;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::shared::request_guard::RequestGuard;
use contracts::dashboards::d400_finance_overview::{
    MonthlyComparisonQuery, DEFAULT_COMPARISON_MONTHS,
};
use contracts::shared::period::{Period, PeriodPreset};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Comparison windows offered on the monthly chart.
const COMPARISON_WINDOWS: [u8; 3] = [3, 6, 12];

/// Finance overview for the selected period
#[component]
pub fn FinanceOverviewDashboard() -> impl IntoView {
    let preset = RwSignal::new(PeriodPreset::Current);
    let phase = RwSignal::new(DashboardPhase::Loading);
    let guard = StoredValue::new_local(RequestGuard::new());

    let load = move |period: Period| {
        let ticket = guard.with_value(|g| g.begin());
        phase.set(DashboardPhase::Loading);

        spawn_local(async move {
            let result = api::get_dashboard(&period).await;
            if let Some(next) = settle(&ticket, result) {
                phase.set(next);
            }
        });
    };

    Effect::new(move |_| {
        let period = preset.get().resolve(today());
        load(period);
    });

    let refresh = move |_| load(preset.get_untracked().resolve(today()));

    // Monthly comparison window; the default comes with the dashboard payload
    let months_value = RwSignal::new(DEFAULT_COMPARISON_MONTHS.to_string());
    let monthly_override = RwSignal::new(None::<SeriesSet>);
    let comparison_guard = StoredValue::new_local(RequestGuard::new());

    Effect::new(move |_| {
        let months = months_value
            .get()
            .parse::<u8>()
            .unwrap_or(DEFAULT_COMPARISON_MONTHS);
        if months == DEFAULT_COMPARISON_MONTHS {
            comparison_guard.with_value(|g| g.cancel());
            monthly_override.set(None);
            return;
        }

        let ticket = comparison_guard.with_value(|g| g.begin());
        spawn_local(async move {
            let result = api::get_monthly_comparison(MonthlyComparisonQuery::new(months)).await;
            if !ticket.is_current() {
                log::debug!("Dropping monthly comparison #{}", ticket.generation());
                return;
            }
            match result {
                Ok(rows) => monthly_override.set(Some(monthly_bars(&rows))),
                Err(e) => {
                    log::error!("Failed to load monthly comparison: {}", e);
                    monthly_override.set(Some(SeriesSet::default()));
                }
            }
        });
    });

    let content = move || match phase.get() {
        DashboardPhase::Loading => view! { <LoadingState /> }.into_any(),
        DashboardPhase::Unavailable => {
            view! { <EmptyState message="Nenhum dado encontrado" /> }.into_any()
        }
        DashboardPhase::Ready(dashboard) => view! {
            <DashboardBody
                dashboard=dashboard
                months_value=months_value
                monthly_override=monthly_override
            />
        }
        .into_any(),
    };

    view! {
        <PageFrame
            page_id="d400_finance_overview--dashboard"
            category=PAGE_CAT_DASHBOARD
            title="Dashboard"
            actions=move || view! {
                <Flex gap=FlexGap::Small align=FlexAlign::Center>
                    <PeriodSelect preset=preset />
                    <Button appearance=ButtonAppearance::Secondary on_click=refresh>
                        {icon("refresh")}
                        " Atualizar"
                    </Button>
                </Flex>
            }
        >
            <div class="page__content">{content}</div>
        </PageFrame>
    }
}

#[component]
fn DashboardBody(
    dashboard: DashboardView,
    months_value: RwSignal<String>,
    monthly_override: RwSignal<Option<SeriesSet>>,
) -> impl IntoView {
    let DashboardView {
        cards,
        cash_flow,
        expense_slices,
        monthly,
        top_expenses,
    } = dashboard;

    let cash_flow_view = if cash_flow.is_empty() {
        view! { <EmptyState message="Nenhuma movimentação no período" /> }.into_any()
    } else {
        view! { <LineChart labels=cash_flow.labels series=cash_flow.series /> }.into_any()
    };

    let pie_view = if expense_slices.is_empty() {
        view! { <EmptyState message="Nenhuma despesa no período" /> }.into_any()
    } else {
        view! { <PieChart slices=expense_slices /> }.into_any()
    };

    let monthly_view = move || {
        let set = monthly_override.get().unwrap_or_else(|| monthly.clone());
        if set.is_empty() {
            view! { <EmptyState message="Nenhum dado para comparação" /> }.into_any()
        } else {
            view! { <BarChart labels=set.labels series=set.series /> }.into_any()
        }
    };

    let months_label = move || format!("Receitas vs Despesas nos últimos {} meses", months_value.get());

    view! {
        <div class="dashboard-cards">
            {cards
                .into_iter()
                .map(|card| {
                    view! {
                        <StatCard
                            label=card.label
                            icon_name=card.icon
                            value=card.value
                            status=card.status
                        />
                    }
                })
                .collect_view()}
        </div>

        <div class="dashboard-grid">
            <div class="card">
                <h3 class="card__title">"Fluxo de Caixa"</h3>
                <p class="card__subtitle">"Receitas e despesas diárias"</p>
                {cash_flow_view}
            </div>

            <div class="card">
                <h3 class="card__title">"Despesas por Categoria"</h3>
                <p class="card__subtitle">"Distribuição das despesas"</p>
                {pie_view}
            </div>

            <div class="card card--wide">
                <div class="card__header">
                    <div>
                        <h3 class="card__title">"Comparação Mensal"</h3>
                        <p class="card__subtitle">{months_label}</p>
                    </div>
                    <Select value=months_value size=SelectSize::Small>
                        {COMPARISON_WINDOWS
                            .iter()
                            .map(|m| view! { <option value=m.to_string()>{format!("{m} meses")}</option> })
                            .collect_view()}
                    </Select>
                </div>
                {monthly_view}
            </div>
        </div>

        {(!top_expenses.is_empty()).then(|| view! {
            <div class="card">
                <h3 class="card__title">"Top Categorias de Despesa"</h3>
                <TopCategoryList items=top_expenses />
            </div>
        })}
    }
}

#[component]
fn TopCategoryList(items: Vec<TopCategory>) -> impl IntoView {
    view! {
        <div class="category-list">
            {items
                .into_iter()
                .map(|cat| {
                    let dot = format!("background-color: {}", cat.color);
                    let bar = format!(
                        "width: {}; background-color: {}",
                        bar_width(cat.percentage),
                        cat.color
                    );
                    view! {
                        <div class="category-list__row">
                            <span class="category-list__dot" style=dot></span>
                            <div class="category-list__body">
                                <div class="category-list__head">
                                    <span class="category-list__name">{cat.name}</span>
                                    <span class="category-list__total">{format_currency(cat.total)}</span>
                                </div>
                                <div class="category-list__track">
                                    <div class="category-list__bar" style=bar></div>
                                </div>
                            </div>
                            <span class="category-list__pct">{format!("{:.0}%", cat.percentage)}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
