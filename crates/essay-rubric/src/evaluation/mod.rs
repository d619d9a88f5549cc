//! Deterministic academic evaluation of a written answer.
//!
//! Scoring blends two signals: penalties derived from issues reported by an external
//! checker, and text-shape heuristics that catch answers a checker cannot fault, such
//! as an empty page or a single unbroken paragraph. The same inputs always produce the
//! same rubric.

mod config;
mod domain;
mod feedback;
mod policy;
mod rubric;
mod rules;
mod text_stats;
pub mod views;

#[cfg(test)]
mod tests;

pub use config::{
    CONTENT_WEIGHT, GRAMMAR_WEIGHT, MAX_TOP_ISSUES, STRUCTURE_WEIGHT, TASK_ACHIEVEMENT_WEIGHT,
    VOCABULARY_WEIGHT,
};
pub use domain::{
    classify, issues_from_value, Issue, IssueCategory, IssueStats, ScoreField, TeacherOverride,
};
pub use feedback::{FeedbackBlock, FeedbackCategory, FeedbackItem, StructuredFeedback};
pub use policy::{grade_for, GradeLetter, QualitativeLabel};
pub use rubric::{Rubric, RubricScores, ScoringBreakdown};
pub use text_stats::TextStats;

use rules::{classify_all, score_rubric, Partitions};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Stateless evaluator turning a text and its detected issues into a rubric.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcademicEvaluationEngine;

impl AcademicEvaluationEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn evaluate(
        &self,
        text: &str,
        issues: &[Issue],
        overrides: Option<&TeacherOverride>,
    ) -> EvaluationResult {
        let text_stats = TextStats::from_text(text);
        let classified = classify_all(issues);
        let issue_stats = IssueStats::tally(classified.iter().map(|entry| entry.category));
        let partitions = Partitions::build(&classified);

        let (scores, scoring_breakdown) = score_rubric(&text_stats, &partitions);
        let structured_feedback = feedback::synthesize(text_stats.word_count, &partitions);

        let rubric = Rubric {
            scores,
            text_stats,
            issue_stats,
            scoring_breakdown,
        };
        let (effective_rubric, has_teacher_overrides) = policy::apply_override(&rubric, overrides);

        debug!(
            word_count = text_stats.word_count,
            issues = issue_stats.total,
            overall = rubric.scores.overall_score,
            effective_overall = effective_rubric.scores.overall_score,
            has_teacher_overrides,
            "essay evaluated"
        );

        EvaluationResult {
            rubric,
            structured_feedback,
            effective_rubric,
            has_teacher_overrides,
        }
    }
}

/// Evaluates with a default engine.
pub fn evaluate(
    text: &str,
    issues: &[Issue],
    overrides: Option<&TeacherOverride>,
) -> EvaluationResult {
    AcademicEvaluationEngine::new().evaluate(text, issues, overrides)
}

/// Everything one evaluation produces. Callers own persistence and display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResult {
    pub rubric: Rubric,
    pub structured_feedback: StructuredFeedback,
    pub effective_rubric: Rubric,
    pub has_teacher_overrides: bool,
}
