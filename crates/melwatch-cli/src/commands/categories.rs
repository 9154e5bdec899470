use melwatch_core::Category;

pub fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        let entries: Vec<_> = Category::ALL
            .iter()
            .map(|c| {
                serde_json::json!({
                    "category": c.to_string(),
                    "info": c.info(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for category in Category::ALL {
        let info = category.info();
        println!("{} -- {}", info.name, info.description);
        println!("  Repair time:       {} ({})", info.repair_time, info.repair_hours);
        println!("  Operational limit: {}", info.operational_limit);
        println!("  Note:              {}", info.note);
        println!();
    }
    println!("Repair interval rules:");
    println!("  - Day of discovery is excluded from calendar day calculations");
    println!("  - Time intervals begin at midnight UTC on discovery day");
    println!("  - Category A follows specific MEL Remarks/Exceptions");
    println!("  - All times calculated in UTC");
    Ok(())
}
