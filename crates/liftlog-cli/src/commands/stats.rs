use chrono::NaiveDate;
use clap::Subcommand;
use liftlog_core::{
    weekly_split, Config, FitnessLevel, JsonProfileStore, PerformanceTracker, ProgressLog,
    TrainingDay,
};
use serde::Serialize;

#[derive(Subcommand)]
pub enum StatsAction {
    /// Weekly completion, current streak and monthly calendar
    Summary {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct DayCompletion {
    day: TrainingDay,
    rate: f64,
}

#[derive(Serialize)]
struct Summary {
    fitness_level: FitnessLevel,
    weekly_completion: f64,
    current_streak_days: u32,
    completed_dates_this_month: Vec<NaiveDate>,
    per_day_completion: Vec<DayCompletion>,
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        StatsAction::Summary { json } => {
            let config = Config::load_or_default();
            let plan = weekly_split(config.fitness_level);
            let store = JsonProfileStore::open()?;
            let tracker = PerformanceTracker::open(store.clone());
            let log = ProgressLog::open(store);

            let summary = Summary {
                fitness_level: config.fitness_level,
                weekly_completion: log.weekly_completion_percentage(&plan),
                current_streak_days: log.current_streak(),
                completed_dates_this_month: log.completed_dates_this_month(),
                per_day_completion: plan
                    .iter()
                    .map(|day| DayCompletion {
                        day: day.day,
                        rate: tracker.completion_rate(&day.exercises),
                    })
                    .collect(),
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("Weekly completion: {:.0}%", summary.weekly_completion * 100.0);
                println!("Current streak:    {} days", summary.current_streak_days);
                println!(
                    "This month:        {} workout days",
                    summary.completed_dates_this_month.len()
                );
                println!("Per-day completion:");
                for day in &summary.per_day_completion {
                    println!("  {:10} {:.0}%", day.day.title(), day.rate * 100.0);
                }
            }
        }
    }
    Ok(())
}
