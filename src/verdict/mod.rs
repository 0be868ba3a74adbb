//! Evidence-backed score derivation
//!
//! Derives the report and outcome as pure functions over the immutable
//! evidence snapshot.

pub mod verdict;

pub use verdict::{decide, evaluate, Outcome};
