//! Check registry
//!
//! The fixed, ordered rubric. Each check pairs a pure predicate over
//! the evidence snapshot with a point weight and the report wording.

pub mod checks;

pub use checks::{max_points, registry, Check};
