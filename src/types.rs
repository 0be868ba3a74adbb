/// Core types and structures for the gradebox system
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GraderError>;

/// Error taxonomy for a grading run.
///
/// `SubmissionMissing` is the only fatal input error: it aborts the run
/// before any check is evaluated. `Database` errors are recovered at the
/// evidence-acquisition boundary and downgraded to a report line.
#[derive(Error, Debug)]
pub enum GraderError {
    #[error("submission file not found: {0}")]
    SubmissionMissing(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("database error: {0}")]
    Database(String),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Marker attached to one field of an index key.
///
/// Closed over the shapes the rubric distinguishes; anything else the
/// server reports (hashed, geo) is carried verbatim in `Other` so that
/// structural equality still works.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyMarker {
    Ascending,
    Descending,
    /// Reserved marker the server uses for text indexes (`_fts`).
    Text,
    Other(String),
}

/// Ordered field-to-marker mapping describing one index on the target
/// collection.
///
/// Field order is significant: two keys are equal only if their fields
/// appear in the same order with the same markers. Partial overlap does
/// not match, so a superset index never satisfies a check asking for a
/// specific shape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexKey(Vec<(String, KeyMarker)>);

impl IndexKey {
    pub fn new(fields: Vec<(String, KeyMarker)>) -> Self {
        Self(fields)
    }

    /// Key with every field ascending, in the given order.
    pub fn ascending<'a, I: IntoIterator<Item = &'a str>>(fields: I) -> Self {
        Self(
            fields
                .into_iter()
                .map(|f| (f.to_string(), KeyMarker::Ascending))
                .collect(),
        )
    }

    pub fn fields(&self) -> &[(String, KeyMarker)] {
        &self.0
    }

    pub fn has_text_marker(&self) -> bool {
        self.0.iter().any(|(_, marker)| *marker == KeyMarker::Text)
    }
}

/// Immutable snapshot of everything a grading run evaluates against.
///
/// Captured once at run start, read-only afterward. Database-backed
/// fields default to zero/empty when the inspector fails, so the
/// dependent checks uniformly fail instead of crashing the run.
#[derive(Clone, Debug, Default)]
pub struct Evidence {
    pub submission_text: Option<String>,
    pub document_count: u64,
    pub index_descriptors: Vec<IndexKey>,
}

/// Outcome of one check against one evidence snapshot.
#[derive(Clone, Debug, Serialize)]
pub struct CheckResult {
    pub label: String,
    pub passed: bool,
    /// Full check weight on pass, zero on fail. No partial credit.
    pub points_awarded: u32,
    pub detail: String,
}

/// Ordered check outcomes plus the aggregated score.
///
/// Order matches registry order for reproducible output. Invariants:
/// `total` is the sum of `points_awarded`, `max` the sum of weights.
#[derive(Clone, Debug, Serialize)]
pub struct Report {
    pub results: Vec<CheckResult>,
    pub total: u32,
    pub max: u32,
}
