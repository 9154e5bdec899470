//! End-to-end monitor behavior across simulated wall-clock ticks.

use chrono::{Duration, TimeZone, Utc};
use melwatch_core::{Category, DiscoveryInput, Event, Monitor};

fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> chrono::DateTime<chrono::Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
}

#[test]
fn session_refreshes_on_the_minute_cadence() {
    let mut input = DiscoveryInput::at(utc(2024, 3, 10, 8, 0));
    input.category_a_days = Some(15);
    let mut monitor = Monitor::new(input, 60);

    let t0 = utc(2024, 3, 15, 8, 0);
    let (snapshot, events) = monitor.tick(t0).expect("first tick refreshes");
    assert_eq!(snapshot.current_time, "2024-03-15 08:00 UTC");
    assert_eq!(snapshot.results.len(), 4);

    // B's three-day window (deadline 2024-03-13) is already gone; the first
    // refresh counts and announces it.
    assert!(matches!(events[0], Event::Refreshed { expired_count: 1, .. }));
    assert!(events.iter().any(|e| matches!(
        e,
        Event::DeadlineExpired { category: Category::B, .. }
    )));

    // The worked example: category C shows six days with ceiling rounding.
    let c = &snapshot.results[&Category::C];
    assert_eq!(c.formatted_deadline.as_deref(), Some("2024-03-20 23:59 UTC"));
    assert_eq!(c.remaining, "6 days remaining");

    // Nothing due mid-cadence; due again a minute later.
    assert!(monitor.tick(t0 + Duration::seconds(59)).is_none());
    assert!(monitor.tick(t0 + Duration::seconds(60)).is_some());
}

#[test]
fn clearing_the_category_a_interval_returns_to_needs_input() {
    let mut input = DiscoveryInput::at(utc(2024, 3, 10, 8, 0));
    input.category_a_days = Some(15);
    let mut monitor = Monitor::new(input, 60);

    let t0 = utc(2024, 3, 11, 8, 0);
    let (snapshot, _) = monitor.tick(t0).unwrap();
    assert!(!snapshot.results[&Category::A].needs_input);

    monitor.set_category_a_days(None);
    let (snapshot, _) = monitor
        .tick(t0 + Duration::seconds(5))
        .expect("input change refreshes before the cadence");
    let a = &snapshot.results[&Category::A];
    assert!(a.needs_input);
    assert_eq!(a.deadline, None);
    // The other categories are unaffected by the Category A interval.
    assert!(snapshot.results[&Category::B].deadline.is_some());
}

#[test]
fn expiry_flips_exactly_once_per_category() {
    // Discovery 2024-01-01; B expires after 2024-01-04 23:59:59.999 UTC.
    let mut monitor = Monitor::new(DiscoveryInput::at(utc(2024, 1, 1, 10, 0)), 60);

    let (_, events) = monitor.tick(utc(2024, 1, 4, 23, 59)).unwrap();
    assert!(!events
        .iter()
        .any(|e| matches!(e, Event::DeadlineExpired { .. })));

    let (snapshot, events) = monitor.tick(utc(2024, 1, 5, 0, 0)).unwrap();
    assert!(snapshot.results[&Category::B].is_expired);
    let flips: Vec<_> = events
        .iter()
        .filter(|e| matches!(e, Event::DeadlineExpired { .. }))
        .collect();
    assert_eq!(flips.len(), 1);
    assert!(matches!(
        flips[0],
        Event::DeadlineExpired { category: Category::B, .. }
    ));

    // Already-expired categories do not re-announce on later refreshes.
    let (_, events) = monitor.tick(utc(2024, 1, 5, 0, 1)).unwrap();
    assert!(!events
        .iter()
        .any(|e| matches!(e, Event::DeadlineExpired { .. })));
}

#[test]
fn discovery_date_change_moves_every_deadline() {
    let mut monitor = Monitor::new(DiscoveryInput::at(utc(2024, 1, 1, 10, 0)), 60);
    let t0 = utc(2024, 1, 2, 10, 0);
    let (before, _) = monitor.tick(t0).unwrap();

    monitor.set_discovery_date("2024-02-01");
    monitor.set_discovery_time("00:30");
    let (after, _) = monitor.tick(t0 + Duration::seconds(1)).unwrap();

    for category in [Category::B, Category::C, Category::D] {
        let shift = after.results[&category].deadline.unwrap()
            - before.results[&category].deadline.unwrap();
        assert_eq!(shift, Duration::days(31), "category {category}");
    }
}

#[test]
fn snapshot_serializes_with_category_keys() {
    let mut monitor = Monitor::new(DiscoveryInput::at(utc(2024, 3, 10, 8, 0)), 60);
    let (snapshot, _) = monitor.tick(utc(2024, 3, 15, 8, 0)).unwrap();

    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["current_time"], "2024-03-15 08:00 UTC");
    for key in ["A", "B", "C", "D"] {
        assert!(json["results"].get(key).is_some(), "missing key {key}");
    }
    assert_eq!(json["results"]["A"]["needs_input"], true);
    assert_eq!(json["results"]["C"]["remaining"], "6 days remaining");
}
