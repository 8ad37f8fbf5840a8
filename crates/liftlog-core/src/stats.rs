//! Pure aggregation functions over the progress log.
//!
//! Everything here is stateless and recomputed from current log contents on
//! every call; there is no caching layer. Each function takes `today`
//! explicitly so callers (and tests) control the clock.

use std::collections::HashSet;

use chrono::{Datelike, Duration, NaiveDate};

use crate::catalog::WorkoutDay;
use crate::progress::ProgressEntry;

/// Monday of the week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// Fraction of the weekly plan completed during the week containing `today`.
///
/// The numerator sums completed-set sizes over entries dated on/after the
/// week start, so an exercise re-marked across overlapping entries can push
/// the raw ratio past 1.0; the result is capped there.
pub fn weekly_completion_percentage(
    entries: &[ProgressEntry],
    plan: &[WorkoutDay],
    today: NaiveDate,
) -> f64 {
    let total: usize = plan.iter().map(|d| d.exercises.len()).sum();
    if total == 0 {
        return 0.0;
    }

    let start = week_start(today);
    let completed: usize = entries
        .iter()
        .filter(|e| e.date >= start)
        .map(|e| e.completed.len())
        .sum();

    (completed as f64 / total as f64).min(1.0)
}

/// Consecutive-day streak ending at `today`.
///
/// Walks backward one day at a time through the set of distinct entry dates.
/// "Still active today" definition: if `today` has no entry the streak is 0,
/// even when yesterday does.
pub fn current_streak(entries: &[ProgressEntry], today: NaiveDate) -> u32 {
    let days: HashSet<NaiveDate> = entries.iter().map(|e| e.date).collect();

    let mut streak = 0;
    let mut cursor = today;
    while days.contains(&cursor) {
        streak += 1;
        match cursor.pred_opt() {
            Some(prev) => cursor = prev,
            None => break,
        }
    }
    streak
}

/// Dates of entries falling inside the calendar month containing `today`.
///
/// One date per entry; the one-entry-per-day invariant upstream is trusted,
/// so no explicit de-duplication happens here.
pub fn completed_dates_in_month(entries: &[ProgressEntry], today: NaiveDate) -> Vec<NaiveDate> {
    entries
        .iter()
        .map(|e| e.date)
        .filter(|d| d.year() == today.year() && d.month() == today.month())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{weekly_split, ExerciseId, FitnessLevel, TrainingDay};
    use std::collections::BTreeSet;
    use uuid::Uuid;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entry(d: NaiveDate, day: TrainingDay, exercises: &[&str]) -> ProgressEntry {
        ProgressEntry {
            id: Uuid::new_v4(),
            date: d,
            day,
            completed: exercises
                .iter()
                .map(|name| ExerciseId::from_name(name))
                .collect::<BTreeSet<_>>(),
        }
    }

    #[test]
    fn week_start_is_monday() {
        // 2024-01-18 is a Thursday.
        assert_eq!(week_start(date(2024, 1, 18)), date(2024, 1, 15));
        // Monday maps to itself.
        assert_eq!(week_start(date(2024, 1, 15)), date(2024, 1, 15));
        // Sunday belongs to the week starting the previous Monday.
        assert_eq!(week_start(date(2024, 1, 21)), date(2024, 1, 15));
    }

    #[test]
    fn empty_plan_yields_zero_percentage() {
        let entries = vec![entry(date(2024, 1, 15), TrainingDay::Monday, &["Plank"])];
        assert_eq!(
            weekly_completion_percentage(&entries, &[], date(2024, 1, 15)),
            0.0
        );
    }

    #[test]
    fn percentage_ignores_entries_before_week_start() {
        let plan = weekly_split(FitnessLevel::Intermediate);
        let entries = vec![
            entry(date(2024, 1, 12), TrainingDay::Friday, &["Push-Up"]),
            entry(date(2024, 1, 15), TrainingDay::Monday, &["Barbell Bench Press"]),
        ];

        // Week of Jan 15: only the Monday entry counts. 15 plan exercises.
        let pct = weekly_completion_percentage(&entries, &plan, date(2024, 1, 17));
        assert!((pct - 1.0 / 15.0).abs() < 1e-9);
    }

    #[test]
    fn percentage_is_capped_at_one() {
        let plan = vec![WorkoutDay {
            day: TrainingDay::Monday,
            exercises: vec![weekly_split(FitnessLevel::Intermediate)[0].exercises[0].clone()],
        }];

        // Two entries in the same week both claiming the same exercise.
        let entries = vec![
            entry(date(2024, 1, 15), TrainingDay::Monday, &["Barbell Bench Press"]),
            entry(date(2024, 1, 16), TrainingDay::Tuesday, &["Barbell Bench Press"]),
        ];

        assert_eq!(
            weekly_completion_percentage(&entries, &plan, date(2024, 1, 17)),
            1.0
        );
    }

    #[test]
    fn streak_is_zero_without_today_entry() {
        let entries = vec![
            entry(date(2024, 1, 16), TrainingDay::Tuesday, &["Lat Pulldown"]),
            entry(date(2024, 1, 17), TrainingDay::Wednesday, &["Back Squat"]),
        ];
        // Today (Jan 18) has no entry, so yesterday's run does not count.
        assert_eq!(current_streak(&entries, date(2024, 1, 18)), 0);
    }

    #[test]
    fn streak_counts_back_to_first_gap() {
        let entries = vec![
            // Gap at Jan 15.
            entry(date(2024, 1, 12), TrainingDay::Friday, &["Push-Up"]),
            entry(date(2024, 1, 16), TrainingDay::Tuesday, &["Lat Pulldown"]),
            entry(date(2024, 1, 17), TrainingDay::Wednesday, &["Back Squat"]),
            entry(date(2024, 1, 18), TrainingDay::Thursday, &["Lateral Raise"]),
        ];
        assert_eq!(current_streak(&entries, date(2024, 1, 18)), 3);
    }

    #[test]
    fn streak_of_one_for_today_only() {
        let entries = vec![entry(date(2024, 1, 18), TrainingDay::Thursday, &["Plank"])];
        assert_eq!(current_streak(&entries, date(2024, 1, 18)), 1);
    }

    #[test]
    fn streak_on_empty_log_is_zero() {
        assert_eq!(current_streak(&[], date(2024, 1, 18)), 0);
    }

    #[test]
    fn month_dates_exclude_other_months_and_years() {
        let entries = vec![
            entry(date(2023, 12, 29), TrainingDay::Friday, &["Push-Up"]),
            entry(date(2024, 1, 3), TrainingDay::Wednesday, &["Back Squat"]),
            entry(date(2024, 1, 15), TrainingDay::Monday, &["Barbell Bench Press"]),
            entry(date(2024, 2, 1), TrainingDay::Thursday, &["Plank"]),
            entry(date(2023, 1, 10), TrainingDay::Tuesday, &["Lat Pulldown"]),
        ];

        let dates = completed_dates_in_month(&entries, date(2024, 1, 20));
        assert_eq!(dates, vec![date(2024, 1, 3), date(2024, 1, 15)]);
    }

    #[test]
    fn month_dates_keep_one_date_per_entry() {
        // Upstream guarantees one entry per (date, day); this function does
        // not collapse violations on its own.
        let entries = vec![
            entry(date(2024, 1, 15), TrainingDay::Monday, &["Back Squat"]),
            entry(date(2024, 1, 15), TrainingDay::Tuesday, &["Lat Pulldown"]),
        ];
        let dates = completed_dates_in_month(&entries, date(2024, 1, 20));
        assert_eq!(dates.len(), 2);
    }
}
