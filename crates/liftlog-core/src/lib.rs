//! # Liftlog Core Library
//!
//! This library provides the core business logic for the Liftlog workout
//! tracker. It implements a CLI-first philosophy where all operations are
//! available via a standalone CLI binary, with any GUI being a thin layer
//! over the same core library.
//!
//! ## Architecture
//!
//! - **Catalog**: A deterministic, stateless weekly exercise split, scaled
//!   per fitness level
//! - **Performance**: Per-exercise performance records (sets, weight, reps,
//!   personal bests) with write-through persistence
//! - **Progress**: An append/update log of per-day completion entries
//! - **Stats**: Pure aggregation functions (weekly completion percentage,
//!   current streak, monthly completed dates), recomputed per query
//! - **Storage**: TOML-based configuration and a JSON-backed profile store
//!   behind the [`ProfileStore`] port
//!
//! All logic is synchronous and single-owner: every operation runs in the
//! calling context and completes before the next one starts.
//!
//! ## Key Components
//!
//! - [`weekly_split`]: Catalog provider
//! - [`PerformanceTracker`]: Per-exercise performance records
//! - [`ProgressLog`]: Per-day completion entries
//! - [`Config`]: Application configuration management
//! - [`ProfileStore`]: Trait for pluggable profile persistence

pub mod catalog;
pub mod error;
pub mod performance;
pub mod progress;
pub mod stats;
pub mod storage;

pub use catalog::{
    weekly_split, Difficulty, Exercise, ExerciseId, FitnessLevel, MuscleGroup, RepRange,
    TrainingDay, WorkoutDay,
};
pub use error::{Result, StoreError};
pub use performance::{ExercisePerformance, PerformanceTracker};
pub use progress::{ProgressEntry, ProgressLog};
pub use storage::{Config, JsonProfileStore, MemoryProfileStore, ProfileStore};
