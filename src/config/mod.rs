//! Run configuration
//!
//! Externally supplied constants for one grading run: where the database
//! lives, which collection to inspect, where the submission script is,
//! and the scoring policy knobs.

pub mod validator;

use crate::types::{GraderError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for one grading run.
///
/// Defaults reproduce the reference lab setup. A JSON config file may
/// supply base values; CLI flags override individual fields.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct GraderConfig {
    /// Mongo-style connection endpoint.
    pub mongo_url: String,
    /// Target database name.
    pub database: String,
    /// Target collection name.
    pub collection: String,
    /// Path to the student's submission script.
    pub submission_file: PathBuf,
    /// Minimum document count required for the data-volume check.
    pub min_documents: u64,
    /// Score required to pass. A policy constant, deliberately not
    /// derived from individual check weights.
    pub pass_threshold: u32,
}

impl Default for GraderConfig {
    fn default() -> Self {
        Self {
            mongo_url: "mongodb://localhost:27017".to_string(),
            database: "movieDB".to_string(),
            collection: "movies".to_string(),
            submission_file: PathBuf::from("solution_indexing.mongodb"),
            min_documents: 15,
            pass_threshold: 50,
        }
    }
}

impl GraderConfig {
    /// Load configuration from a JSON file. Missing fields fall back to
    /// the defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        serde_json::from_str(&raw).map_err(|e| {
            GraderError::Config(format!("invalid config file {}: {}", path.display(), e))
        })
    }
}
