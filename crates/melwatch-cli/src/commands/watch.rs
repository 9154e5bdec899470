use std::time::Duration;

use chrono::Utc;
use clap::Args;
use melwatch_core::deadline::format_instant;
use melwatch_core::{Config, Event, Monitor, Snapshot};

#[derive(Args)]
pub struct WatchArgs {
    /// Discovery date, YYYY-MM-DD (UTC). Defaults to today.
    #[arg(long)]
    pub date: Option<String>,
    /// Discovery time, HH:MM (UTC). Defaults to the current time.
    #[arg(long)]
    pub time: Option<String>,
    /// Category A repair interval in days (0-365)
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=365))]
    pub category_a_days: Option<u32>,
    /// Refresh cadence in seconds. Defaults to the configured value.
    #[arg(long)]
    pub refresh_secs: Option<u64>,
}

pub fn run(args: WatchArgs) -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::load_or_default();
    let refresh_secs = args.refresh_secs.unwrap_or(cfg.clock.refresh_secs).max(1);
    let input = super::discovery_input(args.date, args.time, args.category_a_days, &cfg)?;

    // Fail fast rather than watching nothing.
    input.resolve().ok_or("discovery input did not resolve")?;

    let mut monitor = Monitor::new(input, refresh_secs);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(async {
        // Poll faster than the cadence; the monitor's ticker gates refreshes.
        let mut interval = tokio::time::interval(Duration::from_secs(1));
        loop {
            tokio::select! {
                _ = interval.tick() => {
                    if let Some((snapshot, events)) = monitor.tick(Utc::now()) {
                        render(&snapshot, &events);
                    }
                }
                // The interval dies with the session; Ctrl-C ends it.
                _ = tokio::signal::ctrl_c() => break,
            }
        }
    });
    Ok(())
}

fn render(snapshot: &Snapshot, events: &[Event]) {
    println!("\nCurrent time: {}", snapshot.current_time);
    for result in snapshot.results.values() {
        match &result.formatted_deadline {
            Some(deadline) => println!(
                "  Category {}  deadline {}  {}",
                result.category, deadline, result.remaining
            ),
            None => println!(
                "  Category {}  {} ({})",
                result.category, result.remaining, result.interval_note
            ),
        }
    }
    for event in events {
        if let Event::DeadlineExpired { category, deadline, .. } = event {
            println!(
                "  !! Category {category} repair deadline passed at {}",
                format_instant(*deadline)
            );
        }
    }
}
