use chrono::Local;
use clap::Subcommand;
use liftlog_core::{
    weekly_split, Config, Exercise, JsonProfileStore, PerformanceTracker, ProgressLog,
    TrainingDay, WorkoutDay,
};

#[derive(Subcommand)]
pub enum LogAction {
    /// Record one completed set for an exercise
    Set {
        /// Exercise name, as shown by `plan show`
        exercise: String,
    },
    /// Mark an exercise complete in today's progress entry
    Complete {
        /// Exercise name, as shown by `plan show`
        exercise: String,
        /// Training day (defaults to today's weekday)
        #[arg(long)]
        day: Option<String>,
    },
    /// Adjust the working weight by a delta (kg)
    Weight {
        /// Exercise name
        exercise: String,
        /// Weight change, negative to reduce
        #[arg(allow_negative_numbers = true)]
        delta: f64,
    },
    /// Adjust the achieved rep count by a delta
    Reps {
        /// Exercise name
        exercise: String,
        /// Rep change, negative to reduce
        #[arg(allow_negative_numbers = true)]
        delta: i32,
    },
    /// Toggle the favorite flag for an exercise
    Favorite {
        /// Exercise name
        exercise: String,
    },
    /// Show the recorded performance for an exercise
    Show {
        /// Exercise name
        exercise: String,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: LogAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let plan = weekly_split(config.fitness_level);
    let store = JsonProfileStore::open()?;
    let mut tracker = PerformanceTracker::open(store.clone());

    match action {
        LogAction::Set { exercise } => {
            let (_, exercise) = find_exercise(&plan, &exercise)?;
            tracker.record_set_completion(&exercise);
            let record = tracker.performance(&exercise);
            println!(
                "{}: {}/{} sets",
                exercise.name, record.completed_sets, exercise.sets
            );
        }
        LogAction::Complete { exercise, day } => {
            let (plan_day, exercise) = find_exercise(&plan, &exercise)?;
            let day = match day {
                Some(s) => s.parse()?,
                None => TrainingDay::from_date(Local::now().date_naive())
                    .ok_or("today is not a training day; pass --day")?,
            };
            if day != plan_day {
                eprintln!(
                    "Warning: {} is scheduled on {}, logging under {}",
                    exercise.name, plan_day, day
                );
            }
            let mut log = ProgressLog::open(store);
            log.mark_complete_today(day, exercise.id);
            println!("{} marked complete for {}", exercise.name, day);
        }
        LogAction::Weight { exercise, delta } => {
            let (_, exercise) = find_exercise(&plan, &exercise)?;
            tracker.adjust_weight(&exercise, delta);
            let record = tracker.performance(&exercise);
            println!(
                "{}: {} kg (best {} kg)",
                exercise.name, record.weight, record.personal_best_weight
            );
        }
        LogAction::Reps { exercise, delta } => {
            let (_, exercise) = find_exercise(&plan, &exercise)?;
            tracker.adjust_reps(&exercise, delta);
            let record = tracker.performance(&exercise);
            println!(
                "{}: {} reps (best {})",
                exercise.name, record.achieved_reps, record.personal_best_reps
            );
        }
        LogAction::Favorite { exercise } => {
            let (_, exercise) = find_exercise(&plan, &exercise)?;
            tracker.toggle_favorite(&exercise);
            let record = tracker.performance(&exercise);
            if record.is_favorite {
                println!("{} added to favorites", exercise.name);
            } else {
                println!("{} removed from favorites", exercise.name);
            }
        }
        LogAction::Show { exercise, json } => {
            let (_, exercise) = find_exercise(&plan, &exercise)?;
            let record = tracker.performance(&exercise);
            if json {
                println!("{}", serde_json::to_string_pretty(&record)?);
            } else {
                println!("{}", exercise.name);
                println!("  sets       {}/{}", record.completed_sets, exercise.sets);
                println!("  weight     {} kg", record.weight);
                println!("  reps       {}", record.achieved_reps);
                println!("  best       {} kg / {} reps",
                    record.personal_best_weight, record.personal_best_reps);
                println!("  favorite   {}", record.is_favorite);
            }
        }
    }
    Ok(())
}

/// Case-insensitive catalog lookup by exercise name.
fn find_exercise(
    plan: &[WorkoutDay],
    name: &str,
) -> Result<(TrainingDay, Exercise), Box<dyn std::error::Error>> {
    plan.iter()
        .find_map(|day| {
            day.exercises
                .iter()
                .find(|e| e.name.eq_ignore_ascii_case(name))
                .map(|e| (day.day, e.clone()))
        })
        .ok_or_else(|| format!("unknown exercise: {name}").into())
}
