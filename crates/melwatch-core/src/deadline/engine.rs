//! Repair-deadline computation.
//!
//! The engine is a pure function of (category, discovery instant, current
//! instant, optional Category A interval). The caller supplies `now`
//! explicitly -- nothing here reads the wall clock, which keeps every
//! computation independently testable and idempotent.
//!
//! ## Interval rules
//!
//! The day of discovery is excluded: the interval is counted from midnight
//! UTC of the discovery day, not from the discovery moment. The deadline
//! lands at 23:59:59.999 UTC on the N-th day after that start. All
//! arithmetic is UTC calendar-day arithmetic, so there is no DST ambiguity.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use super::category::Category;
use crate::input::DiscoveryInput;

const HOUR_MS: i64 = 60 * 60 * 1000;
const DAY_MS: i64 = 24 * HOUR_MS;

/// Outcome of a single category computation.
///
/// Carries no persisted identity: it is recomputed from scratch on every
/// clock tick or input change and never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub category: Category,
    /// Resolved interval in days; `None` while Category A awaits its interval.
    pub interval_days: Option<i64>,
    /// End-of-day deadline instant; `None` while Category A awaits its interval.
    pub deadline: Option<DateTime<Utc>>,
    pub formatted_deadline: Option<String>,
    pub formatted_discovery: String,
    /// Countdown text: `"N days remaining"`, `"N hours remaining"`,
    /// `"EXPIRED"`, or guidance when input is needed.
    pub remaining: String,
    pub is_expired: bool,
    /// Category A with no supplied interval: a distinguishable state, not an
    /// error and not a silent default.
    pub needs_input: bool,
    /// Explanatory note stating the interval start date.
    pub interval_note: String,
}

/// Compute the repair deadline for one category.
pub fn compute(
    category: Category,
    discovery: DateTime<Utc>,
    now: DateTime<Utc>,
    category_a_days: Option<u32>,
) -> CalculationResult {
    // Midnight UTC of the discovery day. A malfunction discovered at 23:59Z
    // and one discovered at 00:01Z the same day share this start.
    let start = discovery.date_naive();
    let formatted_discovery = format_instant(discovery);

    let days = match category.fixed_days() {
        Some(d) => i64::from(d),
        None => match category_a_days {
            Some(d) => i64::from(d),
            None => {
                return CalculationResult {
                    category,
                    interval_days: None,
                    deadline: None,
                    formatted_deadline: None,
                    formatted_discovery,
                    remaining: "Enter days to calculate".into(),
                    is_expired: false,
                    needs_input: true,
                    interval_note: "Specify days per MEL Remarks/Exceptions Column 5".into(),
                };
            }
        },
    };

    let deadline = end_of_day(add_days(start, days));
    let remaining_ms = (deadline - now).num_milliseconds();

    CalculationResult {
        category,
        interval_days: Some(days),
        deadline: Some(deadline),
        formatted_deadline: Some(format_instant(deadline)),
        formatted_discovery,
        remaining: remaining_text(remaining_ms),
        is_expired: remaining_ms <= 0,
        needs_input: false,
        interval_note: format!(
            "Interval begins at midnight UTC on {}",
            start.format("%Y-%m-%d")
        ),
    }
}

/// Compute all four categories from the same pair of instants.
///
/// Returns `None` when the discovery input does not resolve to an instant --
/// missing input suppresses calculation rather than raising an error. The
/// four results are computed independently; the map is keyed by category.
pub fn compute_all(
    input: &DiscoveryInput,
    now: DateTime<Utc>,
) -> Option<BTreeMap<Category, CalculationResult>> {
    let discovery = input.resolve()?;
    Some(
        Category::ALL
            .iter()
            .map(|&c| (c, compute(c, discovery, now, input.category_a_days)))
            .collect(),
    )
}

/// `YYYY-MM-DD HH:MM UTC`, minute precision.
pub fn format_instant(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M UTC").to_string()
}

/// Calendar-day addition, saturating at the representable calendar bounds.
/// The engine accepts any interval; range policing belongs to the input layer.
fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    Duration::try_days(days)
        .and_then(|d| date.checked_add_signed(d))
        .unwrap_or(if days >= 0 { NaiveDate::MAX } else { NaiveDate::MIN })
}

fn end_of_day(date: NaiveDate) -> DateTime<Utc> {
    // 23:59:59.999 is valid on every calendar day.
    let end = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN);
    date.and_time(end).and_utc()
}

/// Countdown phrasing with ceiling rounding, so the display never
/// understates remaining time. Ceil-days above one read in days; anything
/// else still positive reads in hours (up to "24 hours remaining").
fn remaining_text(remaining_ms: i64) -> String {
    if remaining_ms <= 0 {
        return "EXPIRED".into();
    }
    let days = (remaining_ms - 1) / DAY_MS + 1;
    if days > 1 {
        format!("{days} days remaining")
    } else {
        format!("{} hours remaining", (remaining_ms - 1) / HOUR_MS + 1)
    }
}
