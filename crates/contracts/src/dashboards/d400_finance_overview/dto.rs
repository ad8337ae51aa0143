use crate::shared::amount;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Headline figures for the selected period.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    #[serde(deserialize_with = "amount::deserialize")]
    pub total_balance: f64,
    #[serde(deserialize_with = "amount::deserialize")]
    pub total_income: f64,
    #[serde(deserialize_with = "amount::deserialize")]
    pub total_expense: f64,
    #[serde(deserialize_with = "amount::deserialize")]
    pub balance: f64,
    /// Share of income already spent, 0..100.
    #[serde(deserialize_with = "amount::deserialize")]
    pub income_committed_pct: f64,
    pub account_count: u32,
    pub transaction_count: u32,
}

/// One category's slice of a transaction type's total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub category_id: String,
    pub category_name: String,
    #[serde(default)]
    pub category_color: Option<String>,
    #[serde(deserialize_with = "amount::deserialize")]
    pub total: f64,
    #[serde(deserialize_with = "amount::deserialize")]
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyCashFlow {
    pub date: NaiveDate,
    #[serde(deserialize_with = "amount::deserialize")]
    pub income: f64,
    #[serde(deserialize_with = "amount::deserialize")]
    pub expense: f64,
    #[serde(deserialize_with = "amount::deserialize")]
    pub balance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyComparison {
    /// `YYYY-MM`
    pub month: String,
    #[serde(deserialize_with = "amount::deserialize")]
    pub income: f64,
    #[serde(deserialize_with = "amount::deserialize")]
    pub expense: f64,
}

const MONTH_ABBR: [&str; 12] = [
    "Jan", "Fev", "Mar", "Abr", "Mai", "Jun", "Jul", "Ago", "Set", "Out", "Nov", "Dez",
];

impl MonthlyComparison {
    /// `"2024-03"` -> `"Mar"`. Unparseable keys are returned unchanged.
    pub fn month_label(&self) -> String {
        month_abbr(&self.month)
            .map(str::to_string)
            .unwrap_or_else(|| self.month.clone())
    }
}

pub fn month_abbr(month_key: &str) -> Option<&'static str> {
    let (_, month) = month_key.split_once('-')?;
    let idx: usize = month.trim().parse().ok()?;
    MONTH_ABBR.get(idx.checked_sub(1)?).copied()
}

/// Full payload of `GET /dashboard` for one period.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    pub summary: DashboardSummary,
    #[serde(default)]
    pub expenses_by_category: Vec<CategoryBreakdown>,
    #[serde(default)]
    pub income_by_category: Vec<CategoryBreakdown>,
    #[serde(default)]
    pub cash_flow: Vec<DailyCashFlow>,
    #[serde(default)]
    pub monthly_comparison: Vec<MonthlyComparison>,
}

// ---------------------------------------------------------------------------
// Monthly comparison window
// ---------------------------------------------------------------------------

pub const DEFAULT_COMPARISON_MONTHS: u8 = 6;
pub const MAX_COMPARISON_MONTHS: u8 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyComparisonQuery {
    pub months: u8,
}

impl MonthlyComparisonQuery {
    /// Window clamped to `1..=12` months.
    pub fn new(months: u8) -> Self {
        Self {
            months: months.clamp(1, MAX_COMPARISON_MONTHS),
        }
    }
}

impl Default for MonthlyComparisonQuery {
    fn default() -> Self {
        Self::new(DEFAULT_COMPARISON_MONTHS)
    }
}

// ---------------------------------------------------------------------------
// Breakdown consistency
// ---------------------------------------------------------------------------

/// Accepted drift of a breakdown's percentage sum from 100.
pub const PERCENTAGE_TOLERANCE: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BreakdownCheck {
    Empty,
    Consistent,
    /// Sum of percentages falls outside `100 ± PERCENTAGE_TOLERANCE`.
    Inconsistent { sum: f64 },
}

/// Flags server data whose shares don't add up; it never corrects them.
pub fn check_breakdown(items: &[CategoryBreakdown]) -> BreakdownCheck {
    if items.is_empty() {
        return BreakdownCheck::Empty;
    }
    let sum: f64 = items.iter().map(|i| i.percentage).sum();
    if (sum - 100.0).abs() <= PERCENTAGE_TOLERANCE {
        BreakdownCheck::Consistent
    } else {
        BreakdownCheck::Inconsistent { sum }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn slice(name: &str, pct: f64) -> CategoryBreakdown {
        CategoryBreakdown {
            category_id: name.to_lowercase(),
            category_name: name.into(),
            category_color: None,
            total: pct * 10.0,
            percentage: pct,
        }
    }

    #[rstest]
    #[case(vec![], BreakdownCheck::Empty)]
    #[case(vec![slice("A", 100.0)], BreakdownCheck::Consistent)]
    #[case(vec![slice("A", 33.3), slice("B", 33.3), slice("C", 33.3)], BreakdownCheck::Consistent)]
    #[case(vec![slice("A", 50.4), slice("B", 50.4)], BreakdownCheck::Consistent)]
    #[case(vec![slice("A", 60.0), slice("B", 20.0)], BreakdownCheck::Inconsistent { sum: 80.0 })]
    fn breakdown_sums(#[case] items: Vec<CategoryBreakdown>, #[case] expected: BreakdownCheck) {
        assert_eq!(check_breakdown(&items), expected);
    }

    #[rstest]
    #[case("2024-01", Some("Jan"))]
    #[case("2023-12", Some("Dez"))]
    #[case("2024-00", None)]
    #[case("2024-13", None)]
    #[case("janeiro", None)]
    fn month_abbreviations(#[case] key: &str, #[case] expected: Option<&str>) {
        assert_eq!(month_abbr(key), expected);
    }

    #[test]
    fn comparison_window_is_clamped() {
        assert_eq!(MonthlyComparisonQuery::default().months, 6);
        assert_eq!(MonthlyComparisonQuery::new(0).months, 1);
        assert_eq!(MonthlyComparisonQuery::new(24).months, 12);
    }

    #[test]
    fn parses_full_payload() {
        let json = r##"{
            "summary":{"total_balance":"1500.00","total_income":5000,"total_expense":"3200.50",
                "balance":1799.5,"income_committed_pct":64.01,"account_count":2,"transaction_count":31},
            "expenses_by_category":[
                {"category_id":"a","category_name":"Moradia","category_color":"#ef4444","total":"2000.00","percentage":62.49},
                {"category_id":"b","category_name":"Lazer","category_color":null,"total":1200.5,"percentage":37.51}
            ],
            "income_by_category":[],
            "cash_flow":[{"date":"2024-05-01","income":5000,"expense":0,"balance":5000}],
            "monthly_comparison":[{"month":"2024-05","income":5000,"expense":3200.5}]
        }"##;
        let data: DashboardData = serde_json::from_str(json).unwrap();
        assert_eq!(data.summary.total_expense, 3200.5);
        assert_eq!(check_breakdown(&data.expenses_by_category), BreakdownCheck::Consistent);
        assert_eq!(check_breakdown(&data.income_by_category), BreakdownCheck::Empty);
        assert_eq!(data.monthly_comparison[0].month_label(), "Mai");
    }
}
