use chrono::Utc;
use clap::Args;
use melwatch_core::deadline::format_instant;
use melwatch_core::{compute, compute_all, CalculationResult, Category, Config};

#[derive(Args)]
pub struct CalcArgs {
    /// Discovery date, YYYY-MM-DD (UTC). Defaults to today.
    #[arg(long)]
    pub date: Option<String>,
    /// Discovery time, HH:MM (UTC). Defaults to the current time.
    #[arg(long)]
    pub time: Option<String>,
    /// Category A repair interval in days (0-365)
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=365))]
    pub category_a_days: Option<u32>,
    /// Restrict output to a single category (A, B, C or D)
    #[arg(long)]
    pub category: Option<Category>,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: CalcArgs) -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::load_or_default();
    let now = Utc::now();
    let input = super::discovery_input(args.date, args.time, args.category_a_days, &cfg)?;

    if let Some(category) = args.category {
        let discovery = input.resolve().ok_or("discovery input did not resolve")?;
        let result = compute(category, discovery, now, input.category_a_days);
        if args.json {
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            print_result(&result);
        }
        return Ok(());
    }

    let results = compute_all(&input, now).ok_or("discovery input did not resolve")?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        println!("Current time: {}", format_instant(now));
        for result in results.values() {
            print_result(result);
        }
    }
    Ok(())
}

fn print_result(result: &CalculationResult) {
    let info = result.category.info();
    println!("\n{} -- {}", info.name, info.description);
    if result.needs_input {
        println!("  Status:    {}", result.remaining);
        println!("  Note:      {}", result.interval_note);
        return;
    }
    println!("  Discovery: {}", result.formatted_discovery);
    if let Some(deadline) = &result.formatted_deadline {
        println!("  Deadline:  {deadline}");
    }
    println!("  Remaining: {}", result.remaining);
    println!("  Note:      {}", result.interval_note);
}
