//! Evidence providers and acquisition
//!
//! The core grades against an immutable [`Evidence`] snapshot captured
//! once per run from two providers: a script source (the student's
//! submission text) and a collection inspector (document count and
//! index descriptors). Provider failures are classified here:
//! a missing submission aborts the run, a failing database is
//! downgraded to a report line.

pub mod mongo;

use crate::types::{Evidence, GraderError, IndexKey, Result};
use log::debug;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Source of the student's submission text.
pub trait ScriptSource {
    fn read(&self) -> Result<String>;
}

/// Read-only view of one named collection: document count and the
/// indexes defined on it. Either call may fail with a connection or
/// query error; the caller treats that as one uniform outcome.
pub trait CollectionInspector {
    fn count_documents(&self) -> Result<u64>;
    fn list_indexes(&self) -> Result<Vec<IndexKey>>;
}

/// File-backed script source. A missing file maps to the fatal
/// `SubmissionMissing` error, anything else stays an IO error.
pub struct FileScriptSource {
    path: PathBuf,
}

impl FileScriptSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl ScriptSource for FileScriptSource {
    fn read(&self) -> Result<String> {
        std::fs::read_to_string(&self.path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                GraderError::SubmissionMissing(self.path.clone())
            } else {
                e.into()
            }
        })
    }
}

/// Evidence snapshot plus the one captured database error, if any.
#[derive(Debug)]
pub struct Gathered {
    pub evidence: Evidence,
    pub db_error: Option<String>,
}

/// Capture the evidence snapshot for one run.
///
/// The submission source is mandatory: absence aborts with
/// `SubmissionMissing` before the inspector is touched. Inspector
/// failures are not fatal — the first error at any step is captured
/// into `db_error` and scoring continues with whatever fields were
/// already populated. One attempt per call, no retries.
///
/// The inspector is taken by value so its connection is released when
/// this function returns, on every path.
pub fn gather<I: CollectionInspector>(
    source: &dyn ScriptSource,
    inspector: Result<I>,
) -> Result<Gathered> {
    let text = source.read()?;
    let mut evidence = Evidence {
        submission_text: Some(text),
        ..Evidence::default()
    };

    let mut db_error = None;
    match inspector {
        Ok(inspector) => {
            match inspector.count_documents() {
                Ok(count) => {
                    debug!("counted {count} documents");
                    evidence.document_count = count;
                }
                Err(e) => db_error = Some(e.to_string()),
            }
            if db_error.is_none() {
                match inspector.list_indexes() {
                    Ok(keys) => {
                        debug!("found {} index descriptors", keys.len());
                        evidence.index_descriptors = keys;
                    }
                    Err(e) => db_error = Some(e.to_string()),
                }
            }
        }
        Err(e) => db_error = Some(e.to_string()),
    }

    Ok(Gathered { evidence, db_error })
}
