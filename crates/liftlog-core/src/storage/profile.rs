//! Profile persistence behind the [`ProfileStore`] port.
//!
//! Performance records and progress entries are stored as field-named JSON
//! in the data directory (`performance.json` and `progress.json`), each
//! wrapped in a versioned envelope so future field changes can fill defaults
//! instead of discarding old data. Malformed files degrade to the empty
//! default rather than failing.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::data_dir;
use crate::catalog::ExerciseId;
use crate::error::Result;
use crate::performance::ExercisePerformance;
use crate::progress::ProgressEntry;

/// Current on-disk schema version for profile files.
const SCHEMA_VERSION: u32 = 1;

/// Port for durable profile storage.
///
/// Components take an implementation at construction time so tests can
/// substitute [`MemoryProfileStore`].
pub trait ProfileStore {
    fn load_performance(&self) -> Result<HashMap<ExerciseId, ExercisePerformance>>;
    fn save_performance(&self, records: &HashMap<ExerciseId, ExercisePerformance>) -> Result<()>;
    fn load_progress(&self) -> Result<Vec<ProgressEntry>>;
    fn save_progress(&self, entries: &[ProgressEntry]) -> Result<()>;
}

/// Envelope for the performance map file.
#[derive(Serialize, Deserialize, Default)]
struct PerformanceFile {
    #[serde(default)]
    version: u32,
    #[serde(default)]
    records: HashMap<ExerciseId, ExercisePerformance>,
}

/// Envelope for the progress entries file.
#[derive(Serialize, Deserialize, Default)]
struct ProgressFile {
    #[serde(default)]
    version: u32,
    #[serde(default)]
    entries: Vec<ProgressEntry>,
}

/// JSON-file-backed profile store in the application data directory.
#[derive(Debug, Clone)]
pub struct JsonProfileStore {
    dir: PathBuf,
}

impl JsonProfileStore {
    /// Open the store in the default data directory.
    ///
    /// # Errors
    /// Returns an error if the data directory cannot be prepared.
    pub fn open() -> Result<Self> {
        Ok(Self { dir: data_dir()? })
    }

    /// Open the store in a custom directory (used in tests).
    pub fn with_dir(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn performance_path(&self) -> PathBuf {
        self.dir.join("performance.json")
    }

    fn progress_path(&self) -> PathBuf {
        self.dir.join("progress.json")
    }
}

impl ProfileStore for JsonProfileStore {
    fn load_performance(&self) -> Result<HashMap<ExerciseId, ExercisePerformance>> {
        let path = self.performance_path();
        if !path.exists() {
            return Ok(HashMap::new());
        }
        let content = std::fs::read_to_string(&path)?;
        let file: PerformanceFile = serde_json::from_str(&content).unwrap_or_default();
        Ok(file.records)
    }

    fn save_performance(&self, records: &HashMap<ExerciseId, ExercisePerformance>) -> Result<()> {
        let file = PerformanceFile {
            version: SCHEMA_VERSION,
            records: records.clone(),
        };
        let content = serde_json::to_string_pretty(&file)?;
        std::fs::write(self.performance_path(), content)?;
        Ok(())
    }

    fn load_progress(&self) -> Result<Vec<ProgressEntry>> {
        let path = self.progress_path();
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = std::fs::read_to_string(&path)?;
        let file: ProgressFile = serde_json::from_str(&content).unwrap_or_default();
        Ok(file.entries)
    }

    fn save_progress(&self, entries: &[ProgressEntry]) -> Result<()> {
        let file = ProgressFile {
            version: SCHEMA_VERSION,
            entries: entries.to_vec(),
        };
        let content = serde_json::to_string_pretty(&file)?;
        std::fs::write(self.progress_path(), content)?;
        Ok(())
    }
}

/// In-memory profile store for tests and ephemeral sessions.
///
/// Single-threaded by design, matching the crate's single-owner model.
#[derive(Debug, Default)]
pub struct MemoryProfileStore {
    performance: RefCell<HashMap<ExerciseId, ExercisePerformance>>,
    progress: RefCell<Vec<ProgressEntry>>,
}

impl MemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProfileStore for MemoryProfileStore {
    fn load_performance(&self) -> Result<HashMap<ExerciseId, ExercisePerformance>> {
        Ok(self.performance.borrow().clone())
    }

    fn save_performance(&self, records: &HashMap<ExerciseId, ExercisePerformance>) -> Result<()> {
        *self.performance.borrow_mut() = records.clone();
        Ok(())
    }

    fn load_progress(&self) -> Result<Vec<ProgressEntry>> {
        Ok(self.progress.borrow().clone())
    }

    fn save_progress(&self, entries: &[ProgressEntry]) -> Result<()> {
        *self.progress.borrow_mut() = entries.to_vec();
        Ok(())
    }
}
