//! Config validation
//!
//! Strict startup validation: fail fast with actionable errors before
//! any provider is contacted.

use crate::config::GraderConfig;
use crate::types::{GraderError, Result};

/// Validation result with detailed errors and warnings.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, error: String) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validate config at startup. Errors are fatal; warnings are returned
/// for the caller to log.
pub fn validate_config(config: &GraderConfig, rubric_max: u32) -> Result<ValidationResult> {
    let mut result = ValidationResult::new();

    if config.mongo_url.is_empty() {
        result.add_error("mongo_url cannot be empty".to_string());
    }
    if config.database.is_empty() {
        result.add_error("database name cannot be empty".to_string());
    }
    if config.collection.is_empty() {
        result.add_error("collection name cannot be empty".to_string());
    }
    if config.submission_file.as_os_str().is_empty() {
        result.add_error("submission_file cannot be empty".to_string());
    }
    if config.pass_threshold > rubric_max {
        result.add_error(format!(
            "pass_threshold {} exceeds rubric maximum {}",
            config.pass_threshold, rubric_max
        ));
    }
    if config.min_documents == 0 {
        result.add_warning("min_documents is zero, the data-volume check always passes".to_string());
    }

    if !result.is_valid() {
        return Err(GraderError::Config(format!(
            "config validation failed:\n{}",
            result.errors.join("\n")
        )));
    }

    Ok(result)
}
