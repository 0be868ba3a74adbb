//! The six rubric checks for the indexing lab.
//!
//! Checks are stateless and independent: none may mutate the evidence
//! or observe another check's outcome, so they could be evaluated in
//! any order with identical results. Registry order exists only for
//! report readability.

use crate::config::GraderConfig;
use crate::types::{Evidence, IndexKey};

type Predicate = Box<dyn Fn(&Evidence) -> bool + Send + Sync>;
type Detail = Box<dyn Fn(&Evidence, bool) -> String + Send + Sync>;

/// One weighted, independent pass/fail rubric item.
pub struct Check {
    pub id: &'static str,
    pub label: &'static str,
    pub weight: u32,
    predicate: Predicate,
    detail: Detail,
}

impl Check {
    pub fn passes(&self, evidence: &Evidence) -> bool {
        (self.predicate)(evidence)
    }

    /// Reason text for the report line, interpolating observed values.
    pub fn detail(&self, evidence: &Evidence, passed: bool) -> String {
        (self.detail)(evidence, passed)
    }
}

fn has_index(evidence: &Evidence, target: &IndexKey) -> bool {
    evidence.index_descriptors.iter().any(|key| key == target)
}

/// Build the fixed rubric for this run. Only the document-count floor
/// comes from config; the index shapes and weights are the rubric.
pub fn registry(config: &GraderConfig) -> Vec<Check> {
    let min_documents = config.min_documents;
    vec![
        Check {
            id: "static-explain",
            label: "Static Check",
            weight: 5,
            // Case-sensitive substring, exactly what the lab asks for.
            predicate: Box::new(|e| {
                e.submission_text
                    .as_deref()
                    .is_some_and(|text| text.contains("explain"))
            }),
            detail: Box::new(|_, passed| {
                if passed {
                    "Usage of explain() found".to_string()
                } else {
                    "explain() not used in script".to_string()
                }
            }),
        },
        Check {
            id: "min-document-count",
            label: "Task 0",
            weight: 10,
            predicate: Box::new(move |e| e.document_count >= min_documents),
            detail: Box::new(move |e, passed| {
                if passed {
                    format!("Found {} movies", e.document_count)
                } else {
                    format!(
                        "Found {} movies, expected {}+",
                        e.document_count, min_documents
                    )
                }
            }),
        },
        Check {
            id: "index-single-rating",
            label: "Task 2",
            weight: 15,
            predicate: Box::new(|e| has_index(e, &IndexKey::ascending(["rating"]))),
            detail: Box::new(|_, passed| {
                if passed {
                    "Index on 'rating' found".to_string()
                } else {
                    "Index on 'rating' missing".to_string()
                }
            }),
        },
        Check {
            id: "index-single-year",
            label: "Task 3",
            weight: 15,
            predicate: Box::new(|e| has_index(e, &IndexKey::ascending(["year"]))),
            detail: Box::new(|_, passed| {
                if passed {
                    "Index on 'year' found".to_string()
                } else {
                    "Index on 'year' missing".to_string()
                }
            }),
        },
        Check {
            id: "index-compound",
            label: "Task 4",
            weight: 15,
            predicate: Box::new(|e| has_index(e, &IndexKey::ascending(["director", "year"]))),
            detail: Box::new(|_, passed| {
                if passed {
                    "Compound Index 'director + year' found".to_string()
                } else {
                    "Compound Index missing".to_string()
                }
            }),
        },
        Check {
            id: "index-text",
            label: "Task 6",
            weight: 20,
            predicate: Box::new(|e| e.index_descriptors.iter().any(IndexKey::has_text_marker)),
            detail: Box::new(|_, passed| {
                if passed {
                    "Text Index on 'plot' found".to_string()
                } else {
                    "Text Index missing".to_string()
                }
            }),
        },
    ]
}

/// Maximum possible score: the sum of all check weights.
pub fn max_points(checks: &[Check]) -> u32 {
    checks.iter().map(|c| c.weight).sum()
}
