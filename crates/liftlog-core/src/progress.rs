//! Per-day completion log.
//!
//! One entry per (calendar day, training day) records which exercises were
//! completed. Marking the same exercise twice on the same day is a no-op
//! thanks to set semantics. Aggregations over the log live in [`crate::stats`]
//! and are recomputed from current contents on every call; the log only
//! offers thin wrappers bound to the local date.

use std::collections::BTreeSet;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::{ExerciseId, TrainingDay, WorkoutDay};
use crate::stats;
use crate::storage::ProfileStore;

/// One day's completion record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressEntry {
    pub id: Uuid,
    /// Calendar day, truncated to day granularity by construction.
    pub date: NaiveDate,
    pub day: TrainingDay,
    #[serde(default)]
    pub completed: BTreeSet<ExerciseId>,
}

/// Owner of the progress entry list, bound to a storage port.
pub struct ProgressLog<S: ProfileStore> {
    entries: Vec<ProgressEntry>,
    store: S,
}

impl<S: ProfileStore> ProgressLog<S> {
    /// Load existing entries from the store. A load failure degrades to an
    /// empty log with a warning.
    pub fn open(store: S) -> Self {
        let entries = match store.load_progress() {
            Ok(entries) => entries,
            Err(e) => {
                eprintln!("Warning: failed to load progress entries: {e}");
                Vec::new()
            }
        };
        Self { entries, store }
    }

    /// All entries, in insertion order.
    pub fn entries(&self) -> &[ProgressEntry] {
        &self.entries
    }

    /// Entries dated on or after `cutoff`.
    pub fn entries_since(&self, cutoff: NaiveDate) -> Vec<&ProgressEntry> {
        self.entries.iter().filter(|e| e.date >= cutoff).collect()
    }

    /// Mark an exercise complete for the given date and training day.
    ///
    /// Upserts: extends the existing (date, day) entry if present, otherwise
    /// appends a new one. Persists after mutation.
    pub fn mark_complete(&mut self, date: NaiveDate, day: TrainingDay, exercise: ExerciseId) {
        if let Some(entry) = self
            .entries
            .iter_mut()
            .find(|e| e.date == date && e.day == day)
        {
            entry.completed.insert(exercise);
        } else {
            self.entries.push(ProgressEntry {
                id: Uuid::new_v4(),
                date,
                day,
                completed: BTreeSet::from([exercise]),
            });
        }
        self.persist();
    }

    /// [`Self::mark_complete`] bound to the local calendar day.
    pub fn mark_complete_today(&mut self, day: TrainingDay, exercise: ExerciseId) {
        self.mark_complete(Local::now().date_naive(), day, exercise);
    }

    /// Weekly completion percentage against `plan`, as of the local date.
    pub fn weekly_completion_percentage(&self, plan: &[WorkoutDay]) -> f64 {
        stats::weekly_completion_percentage(&self.entries, plan, Local::now().date_naive())
    }

    /// Consecutive-day streak ending today, as of the local date.
    pub fn current_streak(&self) -> u32 {
        stats::current_streak(&self.entries, Local::now().date_naive())
    }

    /// Completed dates within the current local calendar month.
    pub fn completed_dates_this_month(&self) -> Vec<NaiveDate> {
        stats::completed_dates_in_month(&self.entries, Local::now().date_naive())
    }

    // Write-through is best-effort, same policy as the performance tracker.
    fn persist(&self) {
        if let Err(e) = self.store.save_progress(&self.entries) {
            eprintln!("Warning: failed to save progress entries: {e}");
        }
    }
}
