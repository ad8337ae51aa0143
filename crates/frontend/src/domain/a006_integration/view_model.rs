use chrono::{DateTime, Utc};
use contracts::domain::a006_integration::{
    integration_for, BankAction, BankIntegration, BankProvider, IntegrationStatus,
    WhatsAppSettingsUpdate,
};

use crate::shared::number_format::parse_amount;

/// One provider tile, joined with its integration (if any) and the action
/// currently in flight.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderCard {
    pub code: String,
    pub name: String,
    pub initial: String,
    pub available: bool,
    pub status: IntegrationStatus,
    pub last_sync: Option<DateTime<Utc>>,
    pub syncing: bool,
    /// Connect or disconnect in flight.
    pub toggling: bool,
}

impl ProviderCard {
    pub fn is_connected(&self) -> bool {
        self.status == IntegrationStatus::Connected
    }
}

pub fn provider_cards(
    providers: &[BankProvider],
    integrations: &[BankIntegration],
    busy: Option<&str>,
) -> Vec<ProviderCard> {
    providers
        .iter()
        .map(|p| {
            let integration = integration_for(integrations, &p.code);
            let status = integration.map(|i| i.status).unwrap_or_default();
            let last_sync = integration
                .filter(|i| i.status == IntegrationStatus::Connected)
                .and_then(|i| i.last_sync_at);
            ProviderCard {
                code: p.code.clone(),
                name: p.name.clone(),
                initial: p.name.chars().next().map(String::from).unwrap_or_default(),
                available: p.available,
                status,
                last_sync,
                syncing: busy == Some(BankAction::Sync.busy_key(&p.code).as_str()),
                toggling: busy == Some(BankAction::Connect.busy_key(&p.code).as_str()),
            }
        })
        .collect()
}

/// Phone and threshold form. A blank threshold is left unchanged.
pub fn contact_update(phone: &str, threshold: &str) -> Result<WhatsAppSettingsUpdate, String> {
    let high_expense_threshold = if threshold.trim().is_empty() {
        None
    } else {
        Some(
            parse_amount(threshold)
                .filter(|t| *t > 0.0)
                .ok_or_else(|| "Limite de gasto inválido".to_string())?,
        )
    };
    Ok(WhatsAppSettingsUpdate {
        phone_number: Some(phone.trim().to_string()),
        high_expense_threshold,
        ..Default::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn provider(code: &str, name: &str) -> BankProvider {
        BankProvider {
            code: code.into(),
            name: name.into(),
            logo_url: None,
            available: true,
        }
    }

    #[test]
    fn joins_status_and_sync_time() {
        let providers = vec![provider("nubank", "Nubank"), provider("itau", "Itaú")];
        let integrations = vec![BankIntegration {
            id: "1".into(),
            provider: "nubank".into(),
            status: IntegrationStatus::Connected,
            connected_at: None,
            last_sync_at: Some(Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()),
        }];
        let cards = provider_cards(&providers, &integrations, None);
        assert!(cards[0].is_connected());
        assert_eq!(
            cards[0].last_sync,
            Some(Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap())
        );
        assert_eq!(cards[1].status, IntegrationStatus::Disconnected);
        assert_eq!(cards[1].initial, "I");
        assert_eq!(cards[1].last_sync, None);
    }

    #[test]
    fn busy_marker_targets_one_action() {
        let providers = vec![provider("nubank", "Nubank"), provider("inter", "Inter")];
        let cards = provider_cards(&providers, &[], Some("sync-nubank"));
        assert!(cards[0].syncing);
        assert!(!cards[0].toggling);
        assert!(!cards[1].syncing);

        let cards = provider_cards(&providers, &[], Some("inter"));
        assert!(cards[1].toggling);
        assert!(!cards[0].toggling);
    }

    #[test]
    fn contact_update_parses_threshold() {
        let update = contact_update(" +55 11 99999-9999 ", "500,00").unwrap();
        assert_eq!(update.phone_number.as_deref(), Some("+55 11 99999-9999"));
        assert_eq!(update.high_expense_threshold, Some(500.0));
        assert_eq!(update.is_active, None);

        assert_eq!(contact_update("", " ").unwrap().high_expense_threshold, None);
        assert!(contact_update("", "-3").is_err());
    }
}
