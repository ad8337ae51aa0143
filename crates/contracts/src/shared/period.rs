//! Reporting periods and the month presets offered by period selectors.

use anyhow::{anyhow, Context};
use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Wire format of `start_date` / `end_date` query parameters.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Closed date interval. `end` is the last calendar day included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Period {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Period {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Parse `YYYY-MM-DD` bounds as typed into date inputs.
    pub fn parse(start: &str, end: &str) -> anyhow::Result<Self> {
        let start = NaiveDate::parse_from_str(start.trim(), DATE_FORMAT)
            .with_context(|| format!("invalid start date '{start}'"))?;
        let end = NaiveDate::parse_from_str(end.trim(), DATE_FORMAT)
            .with_context(|| format!("invalid end date '{end}'"))?;
        Ok(Self { start, end })
    }

    pub fn start_param(&self) -> String {
        self.start.format(DATE_FORMAT).to_string()
    }

    pub fn end_param(&self) -> String {
        self.end.format(DATE_FORMAT).to_string()
    }

    pub fn query(&self) -> PeriodQuery {
        PeriodQuery {
            start_date: self.start_param(),
            end_date: self.end_param(),
        }
    }
}

/// Query-string shape of a period (`?start_date=..&end_date=..`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodQuery {
    pub start_date: String,
    pub end_date: String,
}

impl PeriodQuery {
    pub fn to_query_string(&self) -> String {
        serde_qs::to_string(self).unwrap_or_default()
    }
}

/// Relative month presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodPreset {
    /// This month, first to last day.
    #[default]
    Current,
    /// Previous calendar month.
    Last,
    /// Two months back through the end of this month.
    Last3,
}

impl PeriodPreset {
    pub const ALL: [PeriodPreset; 3] = [Self::Current, Self::Last, Self::Last3];

    pub fn key(self) -> &'static str {
        match self {
            Self::Current => "current",
            Self::Last => "last",
            Self::Last3 => "last3",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Current => "Mês atual",
            Self::Last => "Mês anterior",
            Self::Last3 => "Últimos 3 meses",
        }
    }

    /// Unknown keys resolve to [`PeriodPreset::Current`].
    pub fn from_key(key: &str) -> Self {
        key.parse().unwrap_or_default()
    }

    /// Resolve the preset against `today`. Month arithmetic rolls over year
    /// boundaries and the end is always the last day of its month.
    pub fn resolve(self, today: NaiveDate) -> Period {
        let this_month = first_day_of_month(today);
        let start = match self {
            Self::Current => this_month,
            Self::Last => months_back(this_month, 1),
            Self::Last3 => months_back(this_month, 2),
        };
        let end = match self {
            Self::Current | Self::Last3 => last_day_of_month(this_month),
            Self::Last => last_day_of_month(start),
        };
        Period { start, end }
    }
}

impl FromStr for PeriodPreset {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "current" => Ok(Self::Current),
            "last" => Ok(Self::Last),
            "last3" => Ok(Self::Last3),
            other => Err(anyhow!("unknown period preset '{other}'")),
        }
    }
}

impl fmt::Display for PeriodPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

pub fn first_day_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// "Day 0 of the next month": first of next month minus one day.
pub fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    let first = first_day_of_month(date);
    first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(first)
}

fn months_back(first_of_month: NaiveDate, months: u32) -> NaiveDate {
    first_of_month
        .checked_sub_months(Months::new(months))
        .unwrap_or(first_of_month)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[rstest]
    #[case(PeriodPreset::Current, d(2024, 5, 17), d(2024, 5, 1), d(2024, 5, 31))]
    #[case(PeriodPreset::Last, d(2024, 5, 17), d(2024, 4, 1), d(2024, 4, 30))]
    #[case(PeriodPreset::Last3, d(2024, 5, 17), d(2024, 3, 1), d(2024, 5, 31))]
    #[case(PeriodPreset::Current, d(2024, 2, 10), d(2024, 2, 1), d(2024, 2, 29))]
    #[case(PeriodPreset::Current, d(2023, 2, 28), d(2023, 2, 1), d(2023, 2, 28))]
    #[case(PeriodPreset::Last, d(2024, 1, 31), d(2023, 12, 1), d(2023, 12, 31))]
    #[case(PeriodPreset::Last3, d(2024, 2, 15), d(2023, 12, 1), d(2024, 2, 29))]
    #[case(PeriodPreset::Last3, d(2024, 1, 1), d(2023, 11, 1), d(2024, 1, 31))]
    #[case(PeriodPreset::Last, d(2024, 3, 31), d(2024, 2, 1), d(2024, 2, 29))]
    fn resolves_presets(
        #[case] preset: PeriodPreset,
        #[case] today: NaiveDate,
        #[case] start: NaiveDate,
        #[case] end: NaiveDate,
    ) {
        assert_eq!(preset.resolve(today), Period::new(start, end));
    }

    #[rstest]
    #[case("current", PeriodPreset::Current)]
    #[case("last", PeriodPreset::Last)]
    #[case("last3", PeriodPreset::Last3)]
    #[case("last12", PeriodPreset::Current)]
    #[case("", PeriodPreset::Current)]
    fn keys_map_to_presets(#[case] key: &str, #[case] expected: PeriodPreset) {
        assert_eq!(PeriodPreset::from_key(key), expected);
    }

    #[test]
    fn preset_keys_round_trip_through_display() {
        for preset in PeriodPreset::ALL {
            assert_eq!(PeriodPreset::from_key(&preset.to_string()), preset);
        }
    }

    #[test]
    fn query_uses_iso_dates() {
        let period = PeriodPreset::Last.resolve(d(2024, 1, 9));
        assert_eq!(
            period.query().to_query_string(),
            "start_date=2023-12-01&end_date=2023-12-31"
        );
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(Period::parse("2024-13-01", "2024-12-31").is_err());
        assert!(Period::parse("yesterday", "2024-12-31").is_err());
        assert_eq!(
            Period::parse("2024-01-01", " 2024-01-31").unwrap(),
            Period::new(d(2024, 1, 1), d(2024, 1, 31))
        );
    }

    proptest! {
        #[test]
        fn preset_periods_are_ordered_month_bounds(days in 0i64..80_000, idx in 0usize..3) {
            let today = d(1900, 1, 1) + chrono::Duration::days(days);
            let period = PeriodPreset::ALL[idx].resolve(today);

            prop_assert!(period.end >= period.start);
            prop_assert_eq!(period.start.day(), 1);
            prop_assert_eq!(period.end.succ_opt().unwrap().day(), 1);
            prop_assert!(period.end >= first_day_of_month(today) || idx == 1);
        }
    }
}
