//! Exercise catalog and weekly split provider.
//!
//! The catalog is a deterministic, stateless function from a fitness level
//! to a fixed Monday-to-Friday split. Set counts are scaled by a per-level
//! multiplier (minimum 2) and rep counts are shifted by a per-level delta
//! (minimum 6). Exercise identifiers are derived from the exercise name, so
//! persisted performance records keyed by them survive restarts.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Namespace for deriving stable catalog identifiers.
const CATALOG_NAMESPACE: Uuid = Uuid::from_u128(0x8f2f_1df0_64f1_4d2a_9a57_0c5b_3f93_21aa);

/// Stable identifier of a catalog exercise.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ExerciseId(pub Uuid);

impl ExerciseId {
    /// Derive the identifier for an exercise name.
    pub fn from_name(name: &str) -> Self {
        Self(Uuid::new_v5(&CATALOG_NAMESPACE, name.as_bytes()))
    }
}

impl fmt::Display for ExerciseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Difficulty rating of a single exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// User fitness level; scales catalog sets and reps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitnessLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl FitnessLevel {
    /// Factor applied to base set counts.
    pub fn set_multiplier(&self) -> f64 {
        match self {
            FitnessLevel::Beginner => 0.75,
            FitnessLevel::Intermediate => 1.0,
            FitnessLevel::Advanced => 1.2,
        }
    }

    /// Delta applied to base rep counts.
    pub fn rep_adjustment(&self) -> i32 {
        match self {
            FitnessLevel::Beginner => -2,
            FitnessLevel::Intermediate => 0,
            FitnessLevel::Advanced => 2,
        }
    }
}

impl fmt::Display for FitnessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FitnessLevel::Beginner => "beginner",
            FitnessLevel::Intermediate => "intermediate",
            FitnessLevel::Advanced => "advanced",
        };
        f.write_str(s)
    }
}

impl FromStr for FitnessLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "beginner" => Ok(FitnessLevel::Beginner),
            "intermediate" => Ok(FitnessLevel::Intermediate),
            "advanced" => Ok(FitnessLevel::Advanced),
            other => Err(format!("unknown fitness level: {other}")),
        }
    }
}

/// Primary muscle group targeted by an exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MuscleGroup {
    Chest,
    Triceps,
    Back,
    Biceps,
    Legs,
    Core,
    Shoulders,
    Abs,
    FullBody,
    Conditioning,
}

impl MuscleGroup {
    pub fn display_name(&self) -> &'static str {
        match self {
            MuscleGroup::Chest => "Chest",
            MuscleGroup::Triceps => "Triceps",
            MuscleGroup::Back => "Back",
            MuscleGroup::Biceps => "Biceps",
            MuscleGroup::Legs => "Legs",
            MuscleGroup::Core => "Core",
            MuscleGroup::Shoulders => "Shoulders",
            MuscleGroup::Abs => "Abs",
            MuscleGroup::FullBody => "Full Body",
            MuscleGroup::Conditioning => "Conditioning",
        }
    }
}

/// Training day of the Monday-to-Friday split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingDay {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl TrainingDay {
    pub const ALL: [TrainingDay; 5] = [
        TrainingDay::Monday,
        TrainingDay::Tuesday,
        TrainingDay::Wednesday,
        TrainingDay::Thursday,
        TrainingDay::Friday,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            TrainingDay::Monday => "Monday",
            TrainingDay::Tuesday => "Tuesday",
            TrainingDay::Wednesday => "Wednesday",
            TrainingDay::Thursday => "Thursday",
            TrainingDay::Friday => "Friday",
        }
    }

    /// Muscle focus label for the day.
    pub fn focus(&self) -> &'static str {
        match self {
            TrainingDay::Monday => "Chest + Triceps",
            TrainingDay::Tuesday => "Back + Biceps",
            TrainingDay::Wednesday => "Legs + Core",
            TrainingDay::Thursday => "Shoulders + Abs",
            TrainingDay::Friday => "Full Body / Conditioning",
        }
    }

    /// Training day for a calendar date, if it falls on a weekday.
    pub fn from_date(date: NaiveDate) -> Option<Self> {
        match date.weekday() {
            chrono::Weekday::Mon => Some(TrainingDay::Monday),
            chrono::Weekday::Tue => Some(TrainingDay::Tuesday),
            chrono::Weekday::Wed => Some(TrainingDay::Wednesday),
            chrono::Weekday::Thu => Some(TrainingDay::Thursday),
            chrono::Weekday::Fri => Some(TrainingDay::Friday),
            _ => None,
        }
    }
}

impl fmt::Display for TrainingDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for TrainingDay {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "monday" | "mon" => Ok(TrainingDay::Monday),
            "tuesday" | "tue" => Ok(TrainingDay::Tuesday),
            "wednesday" | "wed" => Ok(TrainingDay::Wednesday),
            "thursday" | "thu" => Ok(TrainingDay::Thursday),
            "friday" | "fri" => Ok(TrainingDay::Friday),
            other => Err(format!("unknown training day: {other}")),
        }
    }
}

/// Inclusive target rep range for an exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepRange {
    pub min: u32,
    pub max: u32,
}

/// A catalog entry describing one movement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: ExerciseId,
    pub name: String,
    pub muscle_group: MuscleGroup,
    pub sets: u32,
    pub reps: u32,
    pub target_rep_range: RepRange,
    pub rest_seconds: u32,
    pub difficulty: Difficulty,
    pub equipment: Vec<String>,
    pub instructions: Vec<String>,
    pub common_mistakes: Vec<String>,
    pub safety_tips: Vec<String>,
    pub alternatives: Vec<String>,
}

/// One day of the weekly split.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutDay {
    pub day: TrainingDay,
    pub exercises: Vec<Exercise>,
}

/// Build the full weekly split for a fitness level.
///
/// Deterministic: the same level always produces the same days, exercises
/// and identifiers.
pub fn weekly_split(level: FitnessLevel) -> Vec<WorkoutDay> {
    TrainingDay::ALL
        .iter()
        .map(|&day| WorkoutDay {
            day,
            exercises: base_exercises(day)
                .into_iter()
                .map(|e| adjust_for_level(e, level))
                .collect(),
        })
        .collect()
}

/// Apply per-level scaling: sets scaled by the multiplier (min 2), reps
/// shifted by the adjustment (min 6).
fn adjust_for_level(mut exercise: Exercise, level: FitnessLevel) -> Exercise {
    exercise.sets = ((exercise.sets as f64 * level.set_multiplier()) as u32).max(2);
    exercise.reps = (exercise.reps as i32 + level.rep_adjustment()).max(6) as u32;
    exercise
}

fn base_exercises(day: TrainingDay) -> Vec<Exercise> {
    match day {
        TrainingDay::Monday => vec![
            make_exercise(
                "Barbell Bench Press",
                MuscleGroup::Chest,
                4,
                10,
                RepRange { min: 8, max: 12 },
                90,
                Difficulty::Intermediate,
                &["Barbell", "Bench"],
                &["Machine Chest Press", "Dumbbell Bench Press"],
            ),
            make_exercise(
                "Incline Dumbbell Press",
                MuscleGroup::Chest,
                3,
                12,
                RepRange { min: 10, max: 12 },
                75,
                Difficulty::Beginner,
                &["Dumbbells", "Incline Bench"],
                &["Incline Smith Press"],
            ),
            make_exercise(
                "Cable Triceps Pushdown",
                MuscleGroup::Triceps,
                3,
                12,
                RepRange { min: 10, max: 15 },
                60,
                Difficulty::Beginner,
                &["Cable Machine", "Rope Attachment"],
                &["EZ Bar Pushdown", "Dips"],
            ),
        ],
        TrainingDay::Tuesday => vec![
            make_exercise(
                "Lat Pulldown",
                MuscleGroup::Back,
                4,
                10,
                RepRange { min: 8, max: 12 },
                90,
                Difficulty::Beginner,
                &["Lat Pulldown Machine"],
                &["Assisted Pull-Up"],
            ),
            make_exercise(
                "Seated Cable Row",
                MuscleGroup::Back,
                3,
                12,
                RepRange { min: 10, max: 12 },
                75,
                Difficulty::Intermediate,
                &["Cable Machine", "V Bar"],
                &["Chest-Supported Row"],
            ),
            make_exercise(
                "Alternating Dumbbell Curl",
                MuscleGroup::Biceps,
                3,
                12,
                RepRange { min: 10, max: 15 },
                60,
                Difficulty::Beginner,
                &["Dumbbells"],
                &["Cable Curl", "Machine Curl"],
            ),
        ],
        TrainingDay::Wednesday => vec![
            make_exercise(
                "Back Squat",
                MuscleGroup::Legs,
                4,
                8,
                RepRange { min: 6, max: 10 },
                120,
                Difficulty::Advanced,
                &["Barbell", "Rack"],
                &["Hack Squat", "Leg Press"],
            ),
            make_exercise(
                "Romanian Deadlift",
                MuscleGroup::Legs,
                3,
                10,
                RepRange { min: 8, max: 12 },
                90,
                Difficulty::Intermediate,
                &["Barbell"],
                &["Dumbbell RDL"],
            ),
            make_exercise(
                "Plank",
                MuscleGroup::Core,
                3,
                1,
                RepRange { min: 1, max: 1 },
                45,
                Difficulty::Beginner,
                &["Bodyweight"],
                &["Dead Bug", "Stir the Pot"],
            ),
        ],
        TrainingDay::Thursday => vec![
            make_exercise(
                "Seated Dumbbell Shoulder Press",
                MuscleGroup::Shoulders,
                4,
                10,
                RepRange { min: 8, max: 12 },
                90,
                Difficulty::Intermediate,
                &["Dumbbells", "Bench"],
                &["Machine Shoulder Press"],
            ),
            make_exercise(
                "Lateral Raise",
                MuscleGroup::Shoulders,
                3,
                15,
                RepRange { min: 12, max: 20 },
                60,
                Difficulty::Beginner,
                &["Dumbbells"],
                &["Cable Lateral Raise"],
            ),
            make_exercise(
                "Cable Crunch",
                MuscleGroup::Abs,
                3,
                15,
                RepRange { min: 12, max: 20 },
                45,
                Difficulty::Beginner,
                &["Cable Machine"],
                &["Machine Crunch", "Reverse Crunch"],
            ),
        ],
        TrainingDay::Friday => vec![
            make_exercise(
                "Kettlebell Swing",
                MuscleGroup::Conditioning,
                4,
                15,
                RepRange { min: 12, max: 20 },
                60,
                Difficulty::Intermediate,
                &["Kettlebell"],
                &["Battle Ropes"],
            ),
            make_exercise(
                "Walking Lunge",
                MuscleGroup::FullBody,
                3,
                12,
                RepRange { min: 10, max: 14 },
                75,
                Difficulty::Intermediate,
                &["Dumbbells"],
                &["Reverse Lunge"],
            ),
            make_exercise(
                "Push-Up",
                MuscleGroup::FullBody,
                3,
                15,
                RepRange { min: 10, max: 20 },
                60,
                Difficulty::Beginner,
                &["Bodyweight"],
                &["Incline Push-Up", "Machine Chest Press"],
            ),
        ],
    }
}

#[allow(clippy::too_many_arguments)]
fn make_exercise(
    name: &str,
    muscle: MuscleGroup,
    sets: u32,
    reps: u32,
    range: RepRange,
    rest_seconds: u32,
    difficulty: Difficulty,
    equipment: &[&str],
    alternatives: &[&str],
) -> Exercise {
    Exercise {
        id: ExerciseId::from_name(name),
        name: name.to_string(),
        muscle_group: muscle,
        sets,
        reps,
        target_rep_range: range,
        rest_seconds,
        difficulty,
        equipment: equipment.iter().map(|s| s.to_string()).collect(),
        instructions: vec![
            "Set up with a neutral spine and engaged core.".to_string(),
            "Move with control through the full range of motion.".to_string(),
            "Exhale during the effort phase and inhale on return.".to_string(),
        ],
        common_mistakes: vec![
            "Using momentum instead of muscle control.".to_string(),
            "Cutting range of motion short.".to_string(),
            "Losing trunk tension.".to_string(),
        ],
        safety_tips: vec![
            "Start with a manageable load and progress gradually.".to_string(),
            "Stop if you feel sharp pain.".to_string(),
            "Ask for a spotter for heavy compounds.".to_string(),
        ],
        alternatives: alternatives.iter().map(|s| s.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_covers_all_five_days() {
        let split = weekly_split(FitnessLevel::Intermediate);
        assert_eq!(split.len(), 5);
        for (day, workout) in TrainingDay::ALL.iter().zip(&split) {
            assert_eq!(*day, workout.day);
            assert_eq!(workout.exercises.len(), 3);
        }
    }

    #[test]
    fn identifiers_are_stable_across_calls() {
        let a = weekly_split(FitnessLevel::Beginner);
        let b = weekly_split(FitnessLevel::Advanced);
        for (da, db) in a.iter().zip(&b) {
            for (ea, eb) in da.exercises.iter().zip(&db.exercises) {
                assert_eq!(ea.id, eb.id);
                assert_eq!(ea.name, eb.name);
            }
        }
    }

    #[test]
    fn beginner_scaling_truncates_and_clamps_sets() {
        let split = weekly_split(FitnessLevel::Beginner);
        let monday = &split[0].exercises;
        // 4 * 0.75 = 3, 3 * 0.75 = 2.25 -> 2 (at the floor)
        assert_eq!(monday[0].sets, 3);
        assert_eq!(monday[1].sets, 2);
        assert_eq!(monday[2].sets, 2);
    }

    #[test]
    fn rep_adjustment_never_drops_below_six() {
        // Plank has a base of 1 rep; even advanced stays clamped upward.
        for level in [
            FitnessLevel::Beginner,
            FitnessLevel::Intermediate,
            FitnessLevel::Advanced,
        ] {
            let split = weekly_split(level);
            let plank = &split[2].exercises[2];
            assert_eq!(plank.name, "Plank");
            assert!(plank.reps >= 6);
        }
    }

    #[test]
    fn advanced_scaling_raises_sets_and_reps() {
        let split = weekly_split(FitnessLevel::Advanced);
        let bench = &split[0].exercises[0];
        // 4 * 1.2 = 4.8 -> 4; reps 10 + 2 = 12
        assert_eq!(bench.sets, 4);
        assert_eq!(bench.reps, 12);
    }

    #[test]
    fn training_day_from_date_skips_weekends() {
        // 2024-01-15 is a Monday.
        let monday = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(TrainingDay::from_date(monday), Some(TrainingDay::Monday));
        let saturday = NaiveDate::from_ymd_opt(2024, 1, 20).unwrap();
        assert_eq!(TrainingDay::from_date(saturday), None);
    }

    #[test]
    fn training_day_parses_short_and_long_names() {
        assert_eq!("wed".parse::<TrainingDay>(), Ok(TrainingDay::Wednesday));
        assert_eq!("Friday".parse::<TrainingDay>(), Ok(TrainingDay::Friday));
        assert!("sunday".parse::<TrainingDay>().is_err());
    }
}
