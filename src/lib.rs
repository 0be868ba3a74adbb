//! gradebox: an evidence-driven auto-grader for the MongoDB indexing lab
//!
//! Checks a student's database submission against a fixed rubric:
//! specific secondary indexes exist, a minimum data volume is present,
//! and the submitted script demonstrates `explain()` usage.
//!
//! # Architecture
//!
//! ## Evidence ([`evidence`])
//! - [`evidence::ScriptSource`] / [`evidence::CollectionInspector`]:
//!   provider seams for the submission text and the database view
//! - [`evidence::mongo`]: MongoDB-backed inspector (sync driver)
//! - [`evidence::gather`]: one-shot snapshot capture with the
//!   fatal-vs-recoverable error split
//!
//! ## Rubric ([`rubric`])
//! - [`rubric::checks`]: the fixed, ordered list of weighted checks
//!
//! ## Verdict ([`verdict`])
//! - [`verdict::evaluate`]: pure fold from evidence to report
//! - [`verdict::decide`]: threshold policy and exit-code contract
//!
//! ## Reporting ([`report`])
//! - stable scraped text lines plus a JSON envelope
//!
//! ## Configuration ([`config`])
//! - run constants, JSON config file, startup validation
//!
//! # Design Principles
//!
//! 1. **Evidence before verdicts** - capture one immutable snapshot,
//!    then grade it; no check mutates evidence or another outcome
//! 2. **Complete or explicitly fatal** - every run short of a missing
//!    submission prints a full report and a total, even under partial
//!    infrastructure failure
//! 3. **Exact structural matching** - an index satisfies a check only
//!    when its ordered field-to-marker shape matches the asked-for
//!    shape exactly

pub mod cli;
pub mod config;
pub mod evidence;
pub mod report;
pub mod rubric;
pub mod types;
pub mod verdict;

pub use types::*;
