//! Discovery input contract with the presentation layer.
//!
//! Dates and times stay strings at this boundary -- native pickers and CLI
//! flags both hand over text. [`DiscoveryInput::resolve`] turns the pair
//! into a UTC instant; absent or malformed fields simply suppress
//! calculation. The strict parse helpers exist for callers that want to
//! report bad input instead of silently skipping.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::InputError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

/// Raw discovery input as the presentation layer supplies it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveryInput {
    /// Discovery date, `YYYY-MM-DD`, UTC.
    pub date: String,
    /// Discovery time, `HH:MM`, UTC.
    pub time: String,
    /// Category A repair interval, days. Unset by default.
    pub category_a_days: Option<u32>,
}

impl DiscoveryInput {
    /// Input prefilled with the current UTC date and time.
    pub fn now() -> Self {
        Self::at(Utc::now())
    }

    /// Input prefilled from the given instant, minute precision.
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self {
            date: instant.format(DATE_FORMAT).to_string(),
            time: instant.format(TIME_FORMAT).to_string(),
            category_a_days: None,
        }
    }

    /// Resolve to a UTC instant, or `None` when either field is absent or
    /// malformed. Missing input is not an error.
    pub fn resolve(&self) -> Option<DateTime<Utc>> {
        let date = NaiveDate::parse_from_str(&self.date, DATE_FORMAT).ok()?;
        let time = NaiveTime::parse_from_str(&self.time, TIME_FORMAT).ok()?;
        Some(date.and_time(time).and_utc())
    }
}

/// Strict date parse for the CLI boundary.
pub fn parse_date(value: &str) -> Result<NaiveDate, InputError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| InputError::InvalidDate(value.to_string()))
}

/// Strict time parse for the CLI boundary.
pub fn parse_time(value: &str) -> Result<NaiveTime, InputError> {
    NaiveTime::parse_from_str(value, TIME_FORMAT)
        .map_err(|_| InputError::InvalidTime(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn resolves_well_formed_input() {
        let input = DiscoveryInput {
            date: "2024-03-10".into(),
            time: "08:00".into(),
            category_a_days: None,
        };
        assert_eq!(
            input.resolve(),
            Some(Utc.with_ymd_and_hms(2024, 3, 10, 8, 0, 0).unwrap())
        );
    }

    #[test]
    fn empty_or_malformed_input_resolves_to_none() {
        assert_eq!(DiscoveryInput::default().resolve(), None);

        let bad_time = DiscoveryInput {
            date: "2024-03-10".into(),
            time: "8am".into(),
            category_a_days: None,
        };
        assert_eq!(bad_time.resolve(), None);

        let bad_date = DiscoveryInput {
            date: "10/03/2024".into(),
            time: "08:00".into(),
            category_a_days: None,
        };
        assert_eq!(bad_date.resolve(), None);
    }

    #[test]
    fn at_round_trips_to_the_same_minute() {
        let instant = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 42).unwrap();
        let input = DiscoveryInput::at(instant);
        assert_eq!(input.date, "2024-12-31");
        assert_eq!(input.time, "23:59");
        // Seconds are below the contract's precision.
        assert_eq!(
            input.resolve(),
            Some(Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 0).unwrap())
        );
    }

    #[test]
    fn strict_parsers_report_the_offending_value() {
        let err = parse_date("tomorrow").unwrap_err();
        assert!(err.to_string().contains("tomorrow"));
        let err = parse_time("25:99").unwrap_err();
        assert!(err.to_string().contains("25:99"));
    }
}
