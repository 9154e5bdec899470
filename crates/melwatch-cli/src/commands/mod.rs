pub mod calc;
pub mod categories;
pub mod config;
pub mod watch;

use melwatch_core::{input, Config, DiscoveryInput};

/// Build the discovery input from CLI flags, falling back to the current UTC
/// instant and configured defaults. Flags are validated strictly here so bad
/// input is reported instead of silently skipping calculation.
pub fn discovery_input(
    date: Option<String>,
    time: Option<String>,
    category_a_days: Option<u32>,
    cfg: &Config,
) -> Result<DiscoveryInput, Box<dyn std::error::Error>> {
    let mut discovery = DiscoveryInput::now();
    if let Some(date) = date {
        input::parse_date(&date)?;
        discovery.date = date;
    }
    if let Some(time) = time {
        input::parse_time(&time)?;
        discovery.time = time;
    }
    discovery.category_a_days = category_a_days.or(cfg.defaults.category_a_days);
    Ok(discovery)
}
