//! Running balance over a portfolio's entries, for the balance chart.

use super::aggregate::InvestmentEntry;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BalancePoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// Prefix sum of signed amounts in the order the entries were received.
///
/// Entries are not re-sorted: point `i` is the balance after entries `0..=i`.
pub fn running_balance(entries: &[InvestmentEntry]) -> Vec<BalancePoint> {
    entries
        .iter()
        .scan(0.0_f64, |acc, entry| {
            *acc += entry.signed_amount();
            Some(BalancePoint {
                date: entry.date,
                value: *acc,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a005_investment::EntryType;
    use chrono::Utc;
    use proptest::prelude::*;
    use uuid::Uuid;

    fn entry(kind: EntryType, amount: f64, day: u32) -> InvestmentEntry {
        InvestmentEntry {
            id: Uuid::new_v4(),
            portfolio_id: Uuid::nil(),
            entry_type: kind,
            amount,
            date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            description: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn deposits_and_withdrawals() {
        let entries = vec![
            entry(EntryType::Deposit, 100.0, 1),
            entry(EntryType::Withdrawal, 30.0, 2),
            entry(EntryType::Deposit, 20.0, 3),
        ];
        let values: Vec<f64> = running_balance(&entries).iter().map(|p| p.value).collect();
        assert_eq!(values, vec![100.0, 70.0, 90.0]);
    }

    #[test]
    fn keeps_received_order() {
        // newest first, as the entries endpoint returns them
        let entries = vec![
            entry(EntryType::Deposit, 20.0, 3),
            entry(EntryType::Withdrawal, 30.0, 2),
            entry(EntryType::Deposit, 100.0, 1),
        ];
        let points = running_balance(&entries);
        assert_eq!(points[0].date, NaiveDate::from_ymd_opt(2024, 1, 3).unwrap());
        let values: Vec<f64> = points.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![20.0, -10.0, 90.0]);
    }

    #[test]
    fn empty_input() {
        assert!(running_balance(&[]).is_empty());
    }

    proptest! {
        #[test]
        fn last_point_equals_total(amounts in prop::collection::vec((any::<bool>(), 1u32..100_000), 1..40)) {
            let entries: Vec<InvestmentEntry> = amounts
                .iter()
                .map(|(deposit, cents)| {
                    let kind = if *deposit { EntryType::Deposit } else { EntryType::Withdrawal };
                    entry(kind, *cents as f64, 1)
                })
                .collect();
            let points = running_balance(&entries);
            let total: f64 = entries.iter().map(|e| e.signed_amount()).sum();

            prop_assert_eq!(points.len(), entries.len());
            prop_assert!((points.last().unwrap().value - total).abs() < 1e-6);
        }
    }
}
