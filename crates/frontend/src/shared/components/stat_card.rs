use crate::shared::icons::icon;
use contracts::shared::indicators::IndicatorStatus;
use leptos::prelude::*;

fn card_class(status: IndicatorStatus) -> &'static str {
    match status {
        IndicatorStatus::Good => "stat-card stat-card--income",
        IndicatorStatus::Warning => "stat-card stat-card--warning",
        IndicatorStatus::Bad => "stat-card stat-card--expense",
        IndicatorStatus::Neutral => "stat-card",
    }
}

/// Headline figure with icon. The value arrives formatted.
#[component]
pub fn StatCard(
    label: &'static str,
    /// Name understood by [`icon`]
    icon_name: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into, optional)] status: Signal<IndicatorStatus>,
) -> impl IntoView {
    view! {
        <div class=move || card_class(status.get())>
            <span class="stat-card__icon">{icon(icon_name)}</span>
            <div class="stat-card__body">
                <span class="stat-card__label">{label}</span>
                <strong class="stat-card__value">{value}</strong>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_picks_modifier() {
        assert_eq!(card_class(IndicatorStatus::Neutral), "stat-card");
        assert_eq!(card_class(IndicatorStatus::Bad), "stat-card stat-card--expense");
    }
}
