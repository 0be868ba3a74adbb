/// Score derivation and outcome policy
///
/// Deterministic evaluation: report = f(registry, evidence), a single
/// fold with no shared mutable accumulator. The outcome policy is a
/// separate, configurable threshold so "what is checked" stays
/// decoupled from "how much is enough".
use crate::rubric::{max_points, Check};
use crate::types::{CheckResult, Evidence, Report};

/// Evaluate every check against the evidence snapshot, in registry
/// order. Points are the full weight on pass, zero on fail.
pub fn evaluate(checks: &[Check], evidence: &Evidence) -> Report {
    let max = max_points(checks);
    let results: Vec<CheckResult> = checks
        .iter()
        .map(|check| {
            let passed = check.passes(evidence);
            CheckResult {
                label: check.label.to_string(),
                passed,
                points_awarded: if passed { check.weight } else { 0 },
                detail: check.detail(evidence, passed),
            }
        })
        .collect();
    let total = results.iter().map(|r| r.points_awarded).sum();
    Report {
        results,
        total,
        max,
    }
}

/// Pass/fail decision plus the process exit code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub passed: bool,
    pub exit_code: i32,
}

/// Map the total score to the three-way process contract: exit 0 on
/// pass, exit 1 on a scored fail. (The fatal missing-submission path
/// also exits 1, but never reaches this function.)
pub fn decide(total: u32, threshold: u32) -> Outcome {
    let passed = total >= threshold;
    Outcome {
        passed,
        exit_code: if passed { 0 } else { 1 },
    }
}
