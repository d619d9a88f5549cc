//! Deterministic rubric scoring for written classroom submissions.
//!
//! The [`evaluation`] module holds the scoring engine. The remaining modules carry the
//! configuration, telemetry, and error plumbing shared by the service binaries.

pub mod checker;
pub mod config;
pub mod error;
pub mod evaluation;
pub mod telemetry;

pub use evaluation::{evaluate, AcademicEvaluationEngine, EvaluationResult};
