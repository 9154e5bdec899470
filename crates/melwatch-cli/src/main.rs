use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "melwatch-cli", version, about = "MEL repair-deadline tracker CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// One-shot deadline calculation
    Calc(commands::calc::CalcArgs),
    /// Live countdown, refreshed on a fixed cadence until Ctrl-C
    Watch(commands::watch::WatchArgs),
    /// MEL category reference table
    Categories {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Calc(args) => commands::calc::run(args),
        Commands::Watch(args) => commands::watch::run(args),
        Commands::Categories { json } => commands::categories::run(json),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
