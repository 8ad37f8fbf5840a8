//! Per-exercise performance records.
//!
//! Each catalog exercise gets one mutable record tracking completed sets,
//! working weight, achieved reps, favorite flag and personal bests. Records
//! are created lazily on first interaction and never deleted. Every mutation
//! is written through to the injected [`ProfileStore`]; persistence is
//! best-effort and a failed write only logs a warning.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::catalog::{Exercise, ExerciseId, WorkoutDay};
use crate::storage::ProfileStore;

/// Mutable per-exercise user progress.
///
/// Invariants upheld by [`PerformanceTracker`]:
/// - `personal_best_weight` >= every weight value ever assigned
/// - `personal_best_reps` >= every achieved_reps value ever assigned
/// - `weight` >= 0, `achieved_reps` >= 1 once touched, `completed_sets`
///   never exceeds the exercise's configured set count
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExercisePerformance {
    #[serde(default)]
    pub completed_sets: u32,
    #[serde(default)]
    pub weight: f64,
    #[serde(default)]
    pub achieved_reps: u32,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default)]
    pub personal_best_weight: f64,
    #[serde(default)]
    pub personal_best_reps: u32,
}

impl ExercisePerformance {
    /// Fresh record, seeded with the exercise's configured rep count.
    fn seeded(reps: u32) -> Self {
        Self {
            achieved_reps: reps,
            ..Self::default()
        }
    }
}

/// Owner of the performance record map, bound to a storage port.
pub struct PerformanceTracker<S: ProfileStore> {
    records: HashMap<ExerciseId, ExercisePerformance>,
    store: S,
}

impl<S: ProfileStore> PerformanceTracker<S> {
    /// Load existing records from the store. A load failure degrades to an
    /// empty map with a warning.
    pub fn open(store: S) -> Self {
        let records = match store.load_performance() {
            Ok(records) => records,
            Err(e) => {
                eprintln!("Warning: failed to load performance records: {e}");
                HashMap::new()
            }
        };
        Self { records, store }
    }

    /// Record for an exercise, or the lazy default if none exists yet.
    /// Read-only: does not create or persist anything.
    pub fn performance(&self, exercise: &Exercise) -> ExercisePerformance {
        self.records
            .get(&exercise.id)
            .cloned()
            .unwrap_or_else(|| ExercisePerformance::seeded(exercise.reps))
    }

    /// Count one completed set, clamped at the exercise's set count.
    /// Also promotes the current achieved reps into the personal best.
    pub fn record_set_completion(&mut self, exercise: &Exercise) {
        let record = self.entry_mut(exercise);
        record.completed_sets = (record.completed_sets + 1).min(exercise.sets);
        record.personal_best_reps = record.personal_best_reps.max(record.achieved_reps);
        self.persist();
    }

    /// Shift the working weight by `delta`, clamped at zero.
    pub fn adjust_weight(&mut self, exercise: &Exercise, delta: f64) {
        let record = self.entry_mut(exercise);
        record.weight = (record.weight + delta).max(0.0);
        record.personal_best_weight = record.personal_best_weight.max(record.weight);
        self.persist();
    }

    /// Shift the achieved rep count by `delta`, clamped at one.
    pub fn adjust_reps(&mut self, exercise: &Exercise, delta: i32) {
        let record = self.entry_mut(exercise);
        record.achieved_reps = (record.achieved_reps as i64 + delta as i64).max(1) as u32;
        record.personal_best_reps = record.personal_best_reps.max(record.achieved_reps);
        self.persist();
    }

    /// Flip the favorite flag.
    pub fn toggle_favorite(&mut self, exercise: &Exercise) {
        let record = self.entry_mut(exercise);
        record.is_favorite = !record.is_favorite;
        self.persist();
    }

    /// Fraction of the given exercises whose completed sets reached the
    /// configured set count. Returns 0.0 for an empty list.
    pub fn completion_rate(&self, exercises: &[Exercise]) -> f64 {
        if exercises.is_empty() {
            return 0.0;
        }
        let completed = exercises
            .iter()
            .filter(|e| {
                self.records
                    .get(&e.id)
                    .map_or(0, |record| record.completed_sets)
                    >= e.sets
            })
            .count();
        completed as f64 / exercises.len() as f64
    }

    /// Insert default records for every plan exercise lacking one, then
    /// persist once.
    pub fn seed_missing(&mut self, plan: &[WorkoutDay]) {
        for day in plan {
            for exercise in &day.exercises {
                self.records
                    .entry(exercise.id)
                    .or_insert_with(|| ExercisePerformance::seeded(exercise.reps));
            }
        }
        self.persist();
    }

    fn entry_mut(&mut self, exercise: &Exercise) -> &mut ExercisePerformance {
        self.records
            .entry(exercise.id)
            .or_insert_with(|| ExercisePerformance::seeded(exercise.reps))
    }

    // Write-through is best-effort: a failed save must not take down a
    // workout in progress.
    fn persist(&self) {
        if let Err(e) = self.store.save_performance(&self.records) {
            eprintln!("Warning: failed to save performance records: {e}");
        }
    }
}
