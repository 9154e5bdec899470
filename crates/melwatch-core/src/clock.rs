//! Live clock: the periodic recomputation driver's state.
//!
//! Same wall-clock, caller-driven design as the deadline engine -- no
//! internal thread. The host (CLI watch loop, GUI frame callback) polls
//! [`Monitor::tick`] with the current instant; the monitor decides whether a
//! refresh is due and recomputes all four categories when it is.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::deadline::{compute_all, format_instant, CalculationResult, Category};
use crate::events::Event;
use crate::input::DiscoveryInput;

/// Wall-clock refresh cadence, seconds.
pub const DEFAULT_REFRESH_SECS: u64 = 60;

/// Fixed-cadence tick gate. Fires on the first poll and then whenever the
/// period has elapsed since the last firing.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    last_fired: Option<DateTime<Utc>>,
}

impl Ticker {
    pub fn new(period_secs: u64) -> Self {
        let secs = i64::try_from(period_secs).unwrap_or(i64::MAX);
        Self {
            period: Duration::try_seconds(secs).unwrap_or(Duration::MAX),
            last_fired: None,
        }
    }

    pub fn period_secs(&self) -> i64 {
        self.period.num_seconds()
    }

    /// Whether a refresh is due at `now`. Records the firing.
    pub fn poll(&mut self, now: DateTime<Utc>) -> bool {
        let due = match self.last_fired {
            None => true,
            Some(last) => now - last >= self.period,
        };
        if due {
            self.last_fired = Some(now);
        }
        due
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(DEFAULT_REFRESH_SECS)
    }
}

/// Full output contract for the presentation layer: the live current-time
/// string plus one result per category.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub at: DateTime<Utc>,
    /// `YYYY-MM-DD HH:MM UTC`, refreshed on the same cadence as the results.
    pub current_time: String,
    pub results: BTreeMap<Category, CalculationResult>,
}

/// Live session state: the current discovery input, the tick gate, and the
/// previously displayed results for expiry-flip detection.
///
/// Input setters mark the state dirty so the next [`tick`](Self::tick)
/// refreshes immediately instead of waiting out the cadence.
#[derive(Debug, Clone)]
pub struct Monitor {
    input: DiscoveryInput,
    ticker: Ticker,
    dirty: bool,
    previous: Option<BTreeMap<Category, CalculationResult>>,
}

impl Monitor {
    pub fn new(input: DiscoveryInput, refresh_secs: u64) -> Self {
        Self {
            input,
            ticker: Ticker::new(refresh_secs),
            dirty: true,
            previous: None,
        }
    }

    pub fn input(&self) -> &DiscoveryInput {
        &self.input
    }

    pub fn set_discovery_date(&mut self, date: impl Into<String>) {
        self.input.date = date.into();
        self.dirty = true;
    }

    pub fn set_discovery_time(&mut self, time: impl Into<String>) {
        self.input.time = time.into();
        self.dirty = true;
    }

    pub fn set_category_a_days(&mut self, days: Option<u32>) {
        self.input.category_a_days = days;
        self.dirty = true;
    }

    /// Poll with the current instant.
    ///
    /// Returns a fresh snapshot plus any events when the cadence fired or an
    /// input changed; `None` otherwise, and `None` while the discovery input
    /// does not resolve.
    pub fn tick(&mut self, now: DateTime<Utc>) -> Option<(Snapshot, Vec<Event>)> {
        let due = self.ticker.poll(now);
        if !due && !self.dirty {
            return None;
        }
        self.dirty = false;

        let results = compute_all(&self.input, now)?;

        let mut events = vec![Event::Refreshed {
            expired_count: results.values().filter(|r| r.is_expired).count(),
            at: now,
        }];
        for (category, result) in &results {
            let was_expired = self
                .previous
                .as_ref()
                .and_then(|prev| prev.get(category))
                .is_some_and(|prev| prev.is_expired);
            if result.is_expired && !was_expired {
                if let Some(deadline) = result.deadline {
                    events.push(Event::DeadlineExpired {
                        category: *category,
                        deadline,
                        at: now,
                    });
                }
            }
        }

        self.previous = Some(results.clone());
        Some((
            Snapshot {
                at: now,
                current_time: format_instant(now),
                results,
            },
            events,
        ))
    }
}
