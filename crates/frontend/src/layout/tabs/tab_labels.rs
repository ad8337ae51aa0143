//! Tab labels, the single source of page titles.

/// Every page the centre area can render, in menu order.
pub const PAGE_KEYS: [&str; 7] = [
    "d400_finance_overview",
    "a001_account",
    "a003_transaction",
    "a005_investment",
    "d401_indicators",
    "a006_integration",
    "sys_settings",
];

/// Readable tab title for a page key; `None` for unknown keys.
pub fn tab_label_for_key(key: &str) -> Option<&'static str> {
    let label = match key {
        // ── Dashboards (d4xx) ─────────────────────────────────────────────
        "d400_finance_overview" => "Dashboard",
        "d401_indicators" => "Indicadores",

        // ── Aggregates ────────────────────────────────────────────────────
        "a001_account" => "Contas e Cartões",
        "a003_transaction" => "Transações",
        "a005_investment" => "Investimentos",
        "a006_integration" => "Integrações",

        // ── System (sys_*) ────────────────────────────────────────────────
        "sys_settings" => "Configurações",

        _ => return None,
    };
    Some(label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_page_has_a_label() {
        for key in PAGE_KEYS {
            assert!(tab_label_for_key(key).is_some(), "{key}");
        }
    }

    #[test]
    fn unknown_key_has_none() {
        assert_eq!(tab_label_for_key("a002_credit_card"), None);
        assert_eq!(tab_label_for_key(""), None);
    }
}
