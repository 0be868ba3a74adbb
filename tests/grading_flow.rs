//! End-to-end grading flows through the library API.
//!
//! These tests drive gather -> evaluate -> render -> decide with a real
//! submission file on disk and an in-memory collection inspector, so
//! they cover the same path the binary takes short of a live server.

use gradebox::config::GraderConfig;
use gradebox::evidence::{gather, CollectionInspector, FileScriptSource, ScriptSource};
use gradebox::report::render_lines;
use gradebox::rubric::registry;
use gradebox::types::{GraderError, IndexKey, KeyMarker, Result};
use gradebox::verdict::{decide, evaluate};
use std::io::Write;
use std::path::PathBuf;

struct MemoryInspector {
    count: u64,
    indexes: Vec<IndexKey>,
}

impl CollectionInspector for MemoryInspector {
    fn count_documents(&self) -> Result<u64> {
        Ok(self.count)
    }

    fn list_indexes(&self) -> Result<Vec<IndexKey>> {
        Ok(self.indexes.clone())
    }
}

fn write_submission(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn lab_indexes() -> Vec<IndexKey> {
    vec![
        IndexKey::ascending(["_id"]),
        IndexKey::ascending(["rating"]),
        IndexKey::ascending(["year"]),
        IndexKey::ascending(["director", "year"]),
        IndexKey::new(vec![
            ("_fts".to_string(), KeyMarker::Text),
            ("_ftsx".to_string(), KeyMarker::Ascending),
        ]),
    ]
}

#[test]
fn perfect_submission_scores_full_marks_and_passes() {
    let submission = write_submission(
        "db.movies.createIndex({rating: 1});\ndb.movies.find({year: 2001}).explain(\"executionStats\");\n",
    );
    let source = FileScriptSource::new(submission.path().to_path_buf());
    let inspector = MemoryInspector {
        count: 20,
        indexes: lab_indexes(),
    };

    let config = GraderConfig::default();
    let checks = registry(&config);
    let gathered = gather(&source, Ok(inspector)).unwrap();
    assert!(gathered.db_error.is_none());

    let report = evaluate(&checks, &gathered.evidence);
    assert_eq!(report.total, 80);

    let outcome = decide(report.total, config.pass_threshold);
    assert!(outcome.passed);
    assert_eq!(outcome.exit_code, 0);

    let lines = render_lines(&report, None);
    assert_eq!(lines.first().unwrap(), "========== Indexing Lab Auto-Report ==========");
    assert_eq!(lines.last().unwrap(), "TOTAL SCORE: 80 / 80");
    assert!(lines.contains(&"Task 4: PASS (Compound Index 'director + year' found)".to_string()));
}

#[test]
fn empty_submission_scores_zero_and_fails() {
    let submission = write_submission("db.movies.find({});\n");
    let source = FileScriptSource::new(submission.path().to_path_buf());
    let inspector = MemoryInspector {
        count: 5,
        indexes: vec![],
    };

    let config = GraderConfig::default();
    let checks = registry(&config);
    let gathered = gather(&source, Ok(inspector)).unwrap();
    let report = evaluate(&checks, &gathered.evidence);
    assert_eq!(report.total, 0);

    let outcome = decide(report.total, config.pass_threshold);
    assert!(!outcome.passed);
    assert_eq!(outcome.exit_code, 1);
}

#[test]
fn database_outage_still_produces_a_complete_report() {
    let submission = write_submission("// notes\ndb.movies.find().explain();\n");
    let source = FileScriptSource::new(submission.path().to_path_buf());
    let failed: Result<MemoryInspector> =
        Err(GraderError::Database("connection refused".to_string()));

    let config = GraderConfig::default();
    let checks = registry(&config);
    let gathered = gather(&source, failed).unwrap();
    assert!(gathered.db_error.is_some());

    let report = evaluate(&checks, &gathered.evidence);
    // Static check passes on the script text alone; everything
    // database-backed fails against the defaulted fields.
    assert_eq!(report.total, 5);
    assert_eq!(report.results.len(), 6);

    let lines = render_lines(&report, gathered.db_error.as_deref());
    let error_lines: Vec<&String> = lines
        .iter()
        .filter(|l| l.starts_with("DB Connection Error:"))
        .collect();
    assert_eq!(error_lines.len(), 1);
    assert_eq!(lines.last().unwrap(), "TOTAL SCORE: 5 / 80");

    let outcome = decide(report.total, config.pass_threshold);
    assert_eq!(outcome.exit_code, 1);
}

#[test]
fn missing_submission_is_fatal_before_grading() {
    let source = FileScriptSource::new(PathBuf::from("/definitely/not/here.mongodb"));
    let inspector = MemoryInspector {
        count: 20,
        indexes: lab_indexes(),
    };

    let err = gather(&source, Ok(inspector)).unwrap_err();
    assert!(matches!(err, GraderError::SubmissionMissing(_)));
}

#[test]
fn reversed_compound_index_does_not_earn_compound_points() {
    let submission = write_submission("explain\n");
    let source = FileScriptSource::new(submission.path().to_path_buf());
    let inspector = MemoryInspector {
        count: 20,
        indexes: vec![IndexKey::ascending(["year", "director"])],
    };

    let config = GraderConfig::default();
    let checks = registry(&config);
    let gathered = gather(&source, Ok(inspector)).unwrap();
    let report = evaluate(&checks, &gathered.evidence);
    // explain + count only: the reversed compound earns nothing.
    assert_eq!(report.total, 15);
    let compound = report
        .results
        .iter()
        .find(|r| r.label == "Task 4")
        .unwrap();
    assert!(!compound.passed);
}

#[test]
fn unreadable_source_propagates_as_io_error() {
    struct BrokenSource;
    impl ScriptSource for BrokenSource {
        fn read(&self) -> Result<String> {
            Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into())
        }
    }

    let inspector = MemoryInspector {
        count: 0,
        indexes: vec![],
    };
    let err = gather(&BrokenSource, Ok(inspector)).unwrap_err();
    assert!(matches!(err, GraderError::Io(_)));
}
