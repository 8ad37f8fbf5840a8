use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "liftlog", version, about = "Liftlog CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Weekly plan
    Plan {
        #[command(subcommand)]
        action: commands::plan::PlanAction,
    },
    /// Workout logging
    Log {
        #[command(subcommand)]
        action: commands::log::LogAction,
    },
    /// Progress statistics
    Stats {
        #[command(subcommand)]
        action: commands::stats::StatsAction,
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
        Commands::Plan { action } => commands::plan::run(action),
        Commands::Log { action } => commands::log::run(action),
        Commands::Stats { action } => commands::stats::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
