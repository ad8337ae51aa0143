use contracts::shared::indicators::{IndicatorStatus, IndicatorType, IndicatorValue};

/// Card data for one indicator.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorCardView {
    pub code: String,
    pub name: String,
    pub value: String,
    pub icon: &'static str,
    pub status: IndicatorStatus,
    /// Width of the progress bar, only for percentage indicators.
    pub progress: Option<String>,
}

impl IndicatorCardView {
    pub fn from_value(indicator: &IndicatorValue) -> Self {
        Self {
            code: indicator.code.clone(),
            name: indicator.name.clone(),
            value: indicator.formatted_value.clone(),
            icon: type_icon(indicator.kind),
            status: indicator.status(),
            progress: indicator.progress().map(|p| format!("{:.1}%", p)),
        }
    }
}

pub fn type_icon(kind: IndicatorType) -> &'static str {
    match kind {
        IndicatorType::Percentage => "percent",
        IndicatorType::Currency => "dollar-sign",
        IndicatorType::Number => "hash",
    }
}

/// Modifier class shared by the card icon, badge and progress bar.
pub fn status_modifier(status: IndicatorStatus) -> &'static str {
    match status {
        IndicatorStatus::Good => "success",
        IndicatorStatus::Warning => "warning",
        IndicatorStatus::Bad => "error",
        IndicatorStatus::Neutral => "neutral",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::indicators::{INCOME_COMMITTED_PCT, MONTHLY_SAVINGS};

    fn value(code: &str, kind: IndicatorType, v: f64) -> IndicatorValue {
        IndicatorValue {
            code: code.to_string(),
            name: code.to_string(),
            value: v,
            kind,
            formatted_value: format!("{v}"),
            severity: None,
        }
    }

    #[test]
    fn percentage_card_has_clamped_progress() {
        let card =
            IndicatorCardView::from_value(&value(INCOME_COMMITTED_PCT, IndicatorType::Percentage, 120.0));
        assert_eq!(card.icon, "percent");
        assert_eq!(card.status, IndicatorStatus::Bad);
        assert_eq!(card.progress.as_deref(), Some("100.0%"));
    }

    #[test]
    fn currency_card_has_no_progress() {
        let card = IndicatorCardView::from_value(&value(MONTHLY_SAVINGS, IndicatorType::Currency, -10.0));
        assert_eq!(card.icon, "dollar-sign");
        assert_eq!(card.status, IndicatorStatus::Bad);
        assert_eq!(card.progress, None);
    }

    #[test]
    fn server_severity_wins() {
        let mut v = value(INCOME_COMMITTED_PCT, IndicatorType::Percentage, 90.0);
        v.severity = Some(IndicatorStatus::Good);
        assert_eq!(IndicatorCardView::from_value(&v).status, IndicatorStatus::Good);
    }

    #[test]
    fn unknown_code_is_neutral() {
        let card = IndicatorCardView::from_value(&value("expense_count", IndicatorType::Number, 12.0));
        assert_eq!(card.icon, "hash");
        assert_eq!(status_modifier(card.status), "neutral");
    }
}
