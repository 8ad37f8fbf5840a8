use clap::Subcommand;
use liftlog_core::{weekly_split, Config, TrainingDay};

#[derive(Subcommand)]
pub enum PlanAction {
    /// Show the weekly split for the configured fitness level
    Show {
        /// Limit output to a single day (e.g. "mon", "friday")
        #[arg(long)]
        day: Option<String>,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: PlanAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        PlanAction::Show { day, json } => {
            let config = Config::load_or_default();
            let mut split = weekly_split(config.fitness_level);

            if let Some(day) = day {
                let day: TrainingDay = day.parse()?;
                split.retain(|w| w.day == day);
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&split)?);
            } else {
                println!("Weekly split ({})", config.fitness_level);
                for workout in &split {
                    println!("\n{} ({})", workout.day, workout.day.focus());
                    for exercise in &workout.exercises {
                        println!(
                            "  {:32} {}x{}  rest {}s",
                            exercise.name, exercise.sets, exercise.reps, exercise.rest_seconds
                        );
                    }
                }
            }
        }
    }
    Ok(())
}
