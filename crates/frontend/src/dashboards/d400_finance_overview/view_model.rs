//! Shapes one `DashboardData` payload into what the dashboard draws.
//!
//! Everything here is pure: the page swaps the whole [`DashboardPhase`] in one
//! signal write, so all sections always come from the same response.

use contracts::dashboards::d400_finance_overview::{
    check_breakdown, BreakdownCheck, CategoryBreakdown, DailyCashFlow, DashboardData,
    DashboardSummary, MonthlyComparison,
};
use contracts::shared::indicators::{fallback_status, IndicatorStatus, INCOME_COMMITTED_PCT};

use crate::shared::charts::palette::{
    slice_color, EXPENSE_COLOR, EXPENSE_COLORS, INCOME_COLOR, NEUTRAL_COLOR,
};
use crate::shared::api_utils::ApiResult;
use crate::shared::charts::{ChartSeries, PieSlice};
use crate::shared::date_utils::format_day_month;
use crate::shared::number_format::{format_currency, format_percent};
use crate::shared::request_guard::RequestTicket;

/// Rows in the top expense categories list.
pub const TOP_CATEGORIES: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryCard {
    pub label: &'static str,
    pub icon: &'static str,
    pub value: String,
    pub status: IndicatorStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TopCategory {
    pub name: String,
    pub total: f64,
    pub percentage: f64,
    pub color: String,
}

/// Labels plus series for a line or bar chart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesSet {
    pub labels: Vec<String>,
    pub series: Vec<ChartSeries>,
}

impl SeriesSet {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub cards: Vec<SummaryCard>,
    pub cash_flow: SeriesSet,
    pub expense_slices: Vec<PieSlice>,
    pub monthly: SeriesSet,
    pub top_expenses: Vec<TopCategory>,
}

impl DashboardView {
    pub fn from_data(data: &DashboardData) -> Self {
        report_breakdown("expenses", &data.expenses_by_category);
        report_breakdown("income", &data.income_by_category);

        Self {
            cards: summary_cards(&data.summary),
            cash_flow: cash_flow_series(&data.cash_flow),
            expense_slices: expense_slices(&data.expenses_by_category),
            monthly: monthly_bars(&data.monthly_comparison),
            top_expenses: top_expenses(&data.expenses_by_category),
        }
    }
}

/// State of the whole page. A failed load never keeps the previous view.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardPhase {
    Loading,
    Ready(DashboardView),
    Unavailable,
}

/// Phase to show once a dashboard response lands, or `None` when a newer
/// request has superseded it. A failure replaces whatever was shown before.
pub fn settle(ticket: &RequestTicket, result: ApiResult<DashboardData>) -> Option<DashboardPhase> {
    if !ticket.is_current() {
        log::debug!("Dropping dashboard response #{}", ticket.generation());
        return None;
    }
    Some(match result {
        Ok(data) => DashboardPhase::Ready(DashboardView::from_data(&data)),
        Err(e) => {
            log::error!("Failed to load dashboard: {}", e);
            DashboardPhase::Unavailable
        }
    })
}

pub fn summary_cards(summary: &DashboardSummary) -> Vec<SummaryCard> {
    vec![
        SummaryCard {
            label: "Saldo Total",
            icon: "wallet",
            value: format_currency(summary.total_balance),
            status: IndicatorStatus::Neutral,
        },
        SummaryCard {
            label: "Receitas do Mês",
            icon: "trending-up",
            value: format_currency(summary.total_income),
            status: IndicatorStatus::Good,
        },
        SummaryCard {
            label: "Despesas do Mês",
            icon: "trending-down",
            value: format_currency(summary.total_expense),
            status: IndicatorStatus::Bad,
        },
        SummaryCard {
            label: "% Renda Comprometida",
            icon: "percent",
            value: format_percent(summary.income_committed_pct),
            status: fallback_status(INCOME_COMMITTED_PCT, summary.income_committed_pct),
        },
    ]
}

pub fn cash_flow_series(days: &[DailyCashFlow]) -> SeriesSet {
    SeriesSet {
        labels: days.iter().map(|d| format_day_month(d.date)).collect(),
        series: vec![
            ChartSeries::new(
                "Receitas",
                INCOME_COLOR,
                days.iter().map(|d| d.income).collect(),
            ),
            ChartSeries::new(
                "Despesas",
                EXPENSE_COLOR,
                days.iter().map(|d| d.expense).collect(),
            ),
        ],
    }
    .drop_if_unlabelled()
}

/// Server order and percentages are used as given.
pub fn expense_slices(items: &[CategoryBreakdown]) -> Vec<PieSlice> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| PieSlice {
            label: item.category_name.clone(),
            percentage: item.percentage,
            total: item.total,
            color: slice_color(item.category_color.as_deref(), i, &EXPENSE_COLORS),
        })
        .collect()
}

pub fn monthly_bars(months: &[MonthlyComparison]) -> SeriesSet {
    SeriesSet {
        labels: months.iter().map(MonthlyComparison::month_label).collect(),
        series: vec![
            ChartSeries::new(
                "Receitas",
                INCOME_COLOR,
                months.iter().map(|m| m.income).collect(),
            ),
            ChartSeries::new(
                "Despesas",
                EXPENSE_COLOR,
                months.iter().map(|m| m.expense).collect(),
            ),
        ],
    }
    .drop_if_unlabelled()
}

pub fn top_expenses(items: &[CategoryBreakdown]) -> Vec<TopCategory> {
    items
        .iter()
        .take(TOP_CATEGORIES)
        .map(|item| TopCategory {
            name: item.category_name.clone(),
            total: item.total,
            percentage: item.percentage,
            color: slice_color(item.category_color.as_deref(), 0, &[NEUTRAL_COLOR]),
        })
        .collect()
}

/// Bar width for a list row, in percent of the track.
pub fn bar_width(percentage: f64) -> String {
    format!("{:.1}%", percentage.clamp(0.0, 100.0))
}

impl SeriesSet {
    fn drop_if_unlabelled(self) -> Self {
        if self.labels.is_empty() {
            Self::default()
        } else {
            self
        }
    }
}

fn report_breakdown(kind: &str, items: &[CategoryBreakdown]) {
    if let BreakdownCheck::Inconsistent { sum } = check_breakdown(items) {
        log::warn!(
            "{} breakdown percentages sum to {:.2}, expected ~100",
            kind,
            sum
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_utils::ApiError;
    use crate::shared::request_guard::RequestGuard;
    use chrono::NaiveDate;

    fn data_with_balance(total_balance: f64) -> DashboardData {
        DashboardData {
            summary: DashboardSummary {
                total_balance,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn shown_balance(phase: &DashboardPhase) -> Option<&str> {
        match phase {
            DashboardPhase::Ready(view) => Some(view.cards[0].value.as_str()),
            _ => None,
        }
    }

    fn breakdown(name: &str, color: Option<&str>, total: f64, pct: f64) -> CategoryBreakdown {
        CategoryBreakdown {
            category_id: name.to_lowercase(),
            category_name: name.to_string(),
            category_color: color.map(str::to_string),
            total,
            percentage: pct,
        }
    }

    #[test]
    fn cards_format_summary() {
        let summary = DashboardSummary {
            total_balance: 1234.56,
            total_income: 5000.0,
            total_expense: 4250.0,
            balance: 750.0,
            income_committed_pct: 85.0,
            account_count: 2,
            transaction_count: 31,
        };
        let cards = summary_cards(&summary);
        assert_eq!(cards.len(), 4);
        assert_eq!(cards[0].value, "R$ 1.234,56");
        assert_eq!(cards[2].value, "R$ 4.250,00");
        assert_eq!(cards[3].value, "85.0%");
        assert_eq!(cards[3].status, IndicatorStatus::Bad);
    }

    #[test]
    fn committed_share_thresholds() {
        let mut summary = DashboardSummary::default();
        summary.income_committed_pct = 60.0;
        assert_eq!(summary_cards(&summary)[3].status, IndicatorStatus::Warning);
        summary.income_committed_pct = 40.0;
        assert_eq!(summary_cards(&summary)[3].status, IndicatorStatus::Good);
    }

    #[test]
    fn slices_keep_server_order_and_percentages() {
        let items = vec![
            breakdown("Moradia", Some("#3b82f6"), 1500.0, 60.0),
            breakdown("Mercado", None, 750.0, 30.0),
            breakdown("Lazer", None, 250.0, 10.0),
        ];
        let slices = expense_slices(&items);
        let labels: Vec<_> = slices.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, ["Moradia", "Mercado", "Lazer"]);
        assert_eq!(slices[0].color, "#3b82f6");
        // palette is indexed by position, not by uncoloured count
        assert_eq!(slices[1].color, EXPENSE_COLORS[1]);
        assert_eq!(slices[2].color, EXPENSE_COLORS[2]);
        assert_eq!(slices[1].percentage, 30.0);
    }

    #[test]
    fn top_list_is_capped_with_neutral_fallback() {
        let items: Vec<_> = (0..7)
            .map(|i| breakdown(&format!("C{i}"), None, 10.0, 100.0 / 7.0))
            .collect();
        let top = top_expenses(&items);
        assert_eq!(top.len(), TOP_CATEGORIES);
        assert_eq!(top[0].name, "C0");
        assert!(top.iter().all(|c| c.color == NEUTRAL_COLOR));
    }

    #[test]
    fn monthly_labels_are_abbreviated() {
        let months = vec![
            MonthlyComparison {
                month: "2024-12".into(),
                income: 100.0,
                expense: 80.0,
            },
            MonthlyComparison {
                month: "2025-01".into(),
                income: 120.0,
                expense: 90.0,
            },
        ];
        let bars = monthly_bars(&months);
        assert_eq!(bars.labels, ["Dez", "Jan"]);
        assert_eq!(bars.series[0].values, [100.0, 120.0]);
        assert_eq!(bars.series[1].values, [80.0, 90.0]);
    }

    #[test]
    fn cash_flow_uses_day_labels() {
        let days = vec![DailyCashFlow {
            date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            income: 10.0,
            expense: 4.0,
            balance: 6.0,
        }];
        let flow = cash_flow_series(&days);
        assert_eq!(flow.labels, ["05/03"]);
        assert_eq!(flow.series[0].name, "Receitas");
        assert_eq!(flow.series[1].values, [4.0]);
    }

    #[test]
    fn empty_payload_gives_empty_sections() {
        let view = DashboardView::from_data(&DashboardData::default());
        assert!(view.cash_flow.is_empty());
        assert!(view.monthly.is_empty());
        assert!(view.expense_slices.is_empty());
        assert!(view.top_expenses.is_empty());
        assert_eq!(view.cards.len(), 4);
    }

    #[test]
    fn bar_width_is_clamped() {
        assert_eq!(bar_width(42.0), "42.0%");
        assert_eq!(bar_width(130.0), "100.0%");
        assert_eq!(bar_width(-5.0), "0.0%");
    }

    #[test]
    fn failure_after_data_becomes_unavailable() {
        let guard = RequestGuard::new();
        let first = guard.begin();
        let phase = settle(&first, Ok(data_with_balance(100.0))).unwrap();
        assert_eq!(shown_balance(&phase), Some("R$ 100,00"));

        let second = guard.begin();
        let err = ApiError::Network("offline".into());
        assert_eq!(settle(&second, Err(err)), Some(DashboardPhase::Unavailable));
    }

    #[test]
    fn only_the_latest_preset_is_applied() {
        let guard = RequestGuard::new();
        let current_month = guard.begin();
        let last_month = guard.begin();

        // the later request answers first, the earlier one after it
        let applied = settle(&last_month, Ok(data_with_balance(42.0))).unwrap();
        assert_eq!(shown_balance(&applied), Some("R$ 42,00"));
        assert_eq!(settle(&current_month, Ok(data_with_balance(999.0))), None);
        assert_eq!(
            settle(&current_month, Err(ApiError::Decode("bad".into()))),
            None
        );
    }
}
