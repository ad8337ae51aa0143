use crate::shared::amount;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Indicator values
// ---------------------------------------------------------------------------

/// How the value is expressed; drives the card icon and the progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndicatorType {
    Percentage,
    Currency,
    #[serde(other)]
    Number,
}

/// Visual status of the indicator (drives colour).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndicatorStatus {
    Good,
    Warning,
    #[serde(rename = "critical", alias = "bad")]
    Bad,
    #[default]
    #[serde(other)]
    Neutral,
}

impl IndicatorStatus {
    pub fn label(self) -> Option<&'static str> {
        match self {
            Self::Good => Some("Bom"),
            Self::Warning => Some("Atenção"),
            Self::Bad => Some("Crítico"),
            Self::Neutral => None,
        }
    }
}

/// One computed indicator for a period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorValue {
    pub code: String,
    pub name: String,
    /// Decimal on the server, usually sent as a string.
    #[serde(deserialize_with = "amount::deserialize")]
    pub value: f64,
    #[serde(rename = "type")]
    pub kind: IndicatorType,
    pub formatted_value: String,
    /// Server-side classification. Preferred over the local rule table.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<IndicatorStatus>,
}

impl IndicatorValue {
    pub fn status(&self) -> IndicatorStatus {
        self.severity
            .unwrap_or_else(|| fallback_status(&self.code, self.value))
    }

    /// Width of the progress bar in percent, only for percentage indicators.
    pub fn progress(&self) -> Option<f64> {
        (self.kind == IndicatorType::Percentage).then(|| self.value.clamp(0.0, 100.0))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorValuesResponse {
    pub indicators: Vec<IndicatorValue>,
    pub period_start: String,
    pub period_end: String,
}

/// Catalog entry from `GET /indicators`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorDefinition {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<IndicatorType>,
}

// ---------------------------------------------------------------------------
// Local classification rules
// ---------------------------------------------------------------------------

pub const INCOME_COMMITTED_PCT: &str = "income_committed_pct";
pub const MONTHLY_SAVINGS: &str = "monthly_savings";
pub const INCOME_INVESTED_PCT: &str = "income_invested_pct";
pub const EXPENSE_COUNT: &str = "expense_count";

/// Committed income above this share is critical.
pub const COMMITTED_CRITICAL_ABOVE: f64 = 80.0;
/// Committed income above this share deserves attention.
pub const COMMITTED_WARNING_ABOVE: f64 = 50.0;

/// Classification used when the server sends no `severity`.
/// Codes without a rule are neutral.
pub fn fallback_status(code: &str, value: f64) -> IndicatorStatus {
    match code {
        INCOME_COMMITTED_PCT if value > COMMITTED_CRITICAL_ABOVE => IndicatorStatus::Bad,
        INCOME_COMMITTED_PCT if value > COMMITTED_WARNING_ABOVE => IndicatorStatus::Warning,
        INCOME_COMMITTED_PCT => IndicatorStatus::Good,
        MONTHLY_SAVINGS if value >= 0.0 => IndicatorStatus::Good,
        MONTHLY_SAVINGS => IndicatorStatus::Bad,
        _ => IndicatorStatus::Neutral,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(INCOME_COMMITTED_PCT, 80.1, IndicatorStatus::Bad)]
    #[case(INCOME_COMMITTED_PCT, 80.0, IndicatorStatus::Warning)]
    #[case(INCOME_COMMITTED_PCT, 50.5, IndicatorStatus::Warning)]
    #[case(INCOME_COMMITTED_PCT, 50.0, IndicatorStatus::Good)]
    #[case(MONTHLY_SAVINGS, 0.0, IndicatorStatus::Good)]
    #[case(MONTHLY_SAVINGS, -0.01, IndicatorStatus::Bad)]
    #[case(INCOME_INVESTED_PCT, 99.0, IndicatorStatus::Neutral)]
    #[case(EXPENSE_COUNT, 12.0, IndicatorStatus::Neutral)]
    fn fallback_rules(#[case] code: &str, #[case] value: f64, #[case] expected: IndicatorStatus) {
        assert_eq!(fallback_status(code, value), expected);
    }

    #[test]
    fn server_severity_wins() {
        let json = r#"{"code":"income_committed_pct","name":"Renda comprometida",
            "value":95.0,"type":"percentage","formatted_value":"95.0%","severity":"good"}"#;
        let value: IndicatorValue = serde_json::from_str(json).unwrap();
        assert_eq!(value.status(), IndicatorStatus::Good);
    }

    #[test]
    fn missing_severity_uses_rules() {
        let json = r#"{"code":"income_committed_pct","name":"Renda comprometida",
            "value":95.0,"type":"percentage","formatted_value":"95.0%"}"#;
        let value: IndicatorValue = serde_json::from_str(json).unwrap();
        assert_eq!(value.severity, None);
        assert_eq!(value.status(), IndicatorStatus::Bad);
        assert_eq!(value.progress(), Some(95.0));
    }

    #[test]
    fn values_response_with_decimal_strings() {
        let json = r#"{"indicators":[{"code":"income_committed_pct","name":"Renda comprometida",
            "value":"85.50","type":"percentage","formatted_value":"85.5%"}],
            "period_start":"2024-05-01","period_end":"2024-05-31"}"#;
        let response: IndicatorValuesResponse = serde_json::from_str(json).unwrap();
        let value = &response.indicators[0];
        assert_eq!(value.value, 85.5);
        assert_eq!(value.status(), IndicatorStatus::Bad);
        assert_eq!(value.progress(), Some(85.5));
    }

    #[test]
    fn critical_severity_and_progress_cap() {
        let json = r#"{"code":"x","name":"X","value":140.0,"type":"percentage",
            "formatted_value":"140%","severity":"critical"}"#;
        let value: IndicatorValue = serde_json::from_str(json).unwrap();
        assert_eq!(value.status(), IndicatorStatus::Bad);
        assert_eq!(value.progress(), Some(100.0));
    }

    #[test]
    fn non_percentage_has_no_progress() {
        let value = IndicatorValue {
            code: MONTHLY_SAVINGS.into(),
            name: "Economia".into(),
            value: 1200.0,
            kind: IndicatorType::Currency,
            formatted_value: "R$ 1.200,00".into(),
            severity: None,
        };
        assert_eq!(value.progress(), None);
        assert_eq!(value.status().label(), Some("Bom"));
    }
}
