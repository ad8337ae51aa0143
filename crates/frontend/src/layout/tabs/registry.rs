//! Tab content registry: tab.key → View. All page keys are mapped here.

use crate::dashboards::d400_finance_overview::ui::FinanceOverviewDashboard;
use crate::dashboards::d401_indicators::ui::IndicatorsDashboard;
use crate::domain::a001_account::ui::AccountsPage;
use crate::domain::a003_transaction::ui::TransactionsPage;
use crate::domain::a005_investment::ui::InvestmentsPage;
use crate::domain::a006_integration::ui::IntegrationsPage;
use crate::system::users::ui::SettingsPage;
use leptos::prelude::*;

/// Renders the page for `key`, or a placeholder for unknown keys.
pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        // Dashboards
        "d400_finance_overview" => view! { <FinanceOverviewDashboard /> }.into_any(),
        "d401_indicators" => view! { <IndicatorsDashboard /> }.into_any(),

        // Aggregates
        "a001_account" => view! { <AccountsPage /> }.into_any(),
        "a003_transaction" => view! { <TransactionsPage /> }.into_any(),
        "a005_investment" => view! { <InvestmentsPage /> }.into_any(),
        "a006_integration" => view! { <IntegrationsPage /> }.into_any(),

        // System
        "sys_settings" => view! { <SettingsPage /> }.into_any(),

        _ => {
            log::warn!("No page registered for tab '{}'", key);
            view! { <div class="placeholder">{format!("Página desconhecida: {}", key)}</div> }
                .into_any()
        }
    }
}
