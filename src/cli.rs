//! CLI entrypoint wiring for the gradebox binary.

use crate::config::{validator, GraderConfig};
use crate::evidence::mongo::MongoInspector;
use crate::evidence::{self, FileScriptSource};
use crate::report::{self, ReportEnvelope};
use crate::types::GraderError;
use crate::{rubric, verdict};
use anyhow::Result;
use clap::Parser;
use log::{info, warn};
use std::path::PathBuf;
use uuid::Uuid;

#[derive(Parser)]
#[command(author, version, about = "Evidence-driven auto-grader for the MongoDB indexing lab")]
struct Cli {
    /// Mongo connection endpoint
    #[arg(long)]
    mongo_url: Option<String>,
    /// Target database name
    #[arg(long)]
    database: Option<String>,
    /// Target collection name
    #[arg(long)]
    collection: Option<String>,
    /// Path to the student's submission script
    #[arg(long)]
    submission: Option<PathBuf>,
    /// Minimum document count required in the collection
    #[arg(long)]
    min_documents: Option<u64>,
    /// Score required to pass, out of the rubric maximum
    #[arg(long)]
    pass_threshold: Option<u32>,
    /// JSON config file supplying base values (flags override)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Emit the report as a JSON envelope instead of text lines
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn into_config(self) -> Result<(GraderConfig, bool)> {
        let mut config = match &self.config {
            Some(path) => GraderConfig::from_file(path)?,
            None => GraderConfig::default(),
        };
        if let Some(url) = self.mongo_url {
            config.mongo_url = url;
        }
        if let Some(database) = self.database {
            config.database = database;
        }
        if let Some(collection) = self.collection {
            config.collection = collection;
        }
        if let Some(submission) = self.submission {
            config.submission_file = submission;
        }
        if let Some(min_documents) = self.min_documents {
            config.min_documents = min_documents;
        }
        if let Some(pass_threshold) = self.pass_threshold {
            config.pass_threshold = pass_threshold;
        }
        Ok((config, self.json))
    }
}

/// Run one grading pass and return the process exit code.
///
/// Exit contract: 0 = pass, 1 = scored fail, 1 with a CRITICAL stderr
/// message = missing submission. Grading automation keys off the exit
/// code alone, so this three-way contract must hold exactly.
pub fn run() -> Result<i32> {
    env_logger::init();
    let (config, json_output) = Cli::parse().into_config()?;

    let checks = rubric::registry(&config);
    let max = rubric::max_points(&checks);
    let validation = validator::validate_config(&config, max)?;
    for warning in &validation.warnings {
        warn!("config: {warning}");
    }

    let run_id = Uuid::new_v4();
    info!(
        "run {run_id}: grading {} against {}/{}",
        config.submission_file.display(),
        config.database,
        config.collection
    );

    let source = FileScriptSource::new(config.submission_file.clone());
    let gathered = match evidence::gather(&source, MongoInspector::connect(&config)) {
        Ok(gathered) => gathered,
        Err(GraderError::SubmissionMissing(path)) => {
            eprintln!("CRITICAL: {} not found!", path.display());
            return Ok(1);
        }
        Err(e) => return Err(e.into()),
    };
    if let Some(db_error) = &gathered.db_error {
        warn!("run {run_id}: database inspection failed: {db_error}");
    }

    let report = verdict::evaluate(&checks, &gathered.evidence);
    let outcome = verdict::decide(report.total, config.pass_threshold);

    if json_output {
        let envelope = ReportEnvelope {
            run_id: run_id.to_string(),
            results: &report.results,
            db_error: gathered.db_error.as_deref(),
            total_score: report.total,
            max_score: report.max,
            passed: outcome.passed,
        };
        println!("{}", serde_json::to_string_pretty(&envelope)?);
    } else {
        for line in report::render_lines(&report, gathered.db_error.as_deref()) {
            println!("{line}");
        }
    }

    info!(
        "run {run_id}: total {} / {} -> {}",
        report.total,
        report.max,
        if outcome.passed { "pass" } else { "fail" }
    );
    Ok(outcome.exit_code)
}
