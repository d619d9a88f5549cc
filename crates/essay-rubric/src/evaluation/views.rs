//! Display rows for rendering a rubric in a report or table.

use serde::Serialize;

use super::config::{
    CONTENT_WEIGHT, GRAMMAR_WEIGHT, STRUCTURE_WEIGHT, TASK_ACHIEVEMENT_WEIGHT, VOCABULARY_WEIGHT,
};
use super::domain::ScoreField;
use super::feedback::FeedbackCategory;
use super::EvaluationResult;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RubricRow {
    pub field: ScoreField,
    pub label: &'static str,
    pub score: f64,
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade_letter: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualitative_label: Option<&'static str>,
}

/// Rows for the effective rubric in display order, ending with the overall row.
pub fn rubric_rows(result: &EvaluationResult) -> Vec<RubricRow> {
    let scores = &result.effective_rubric.scores;
    let feedback = &result.structured_feedback;

    let dimension = |field: ScoreField,
                     label: &'static str,
                     weight: f64,
                     summary: Option<&String>| RubricRow {
        field,
        label,
        score: scores.get(field),
        weight: Some(weight),
        summary: summary.cloned(),
        grade_letter: None,
        qualitative_label: None,
    };

    vec![
        dimension(
            ScoreField::GrammarScore,
            FeedbackCategory::Grammar.label(),
            GRAMMAR_WEIGHT,
            Some(&feedback.grammar_feedback.summary),
        ),
        dimension(
            ScoreField::StructureScore,
            FeedbackCategory::Structure.label(),
            STRUCTURE_WEIGHT,
            Some(&feedback.structure_feedback.summary),
        ),
        dimension(
            ScoreField::ContentScore,
            FeedbackCategory::Content.label(),
            CONTENT_WEIGHT,
            Some(&feedback.content_feedback.summary),
        ),
        dimension(
            ScoreField::VocabularyScore,
            FeedbackCategory::Vocabulary.label(),
            VOCABULARY_WEIGHT,
            Some(&feedback.vocabulary_feedback.summary),
        ),
        dimension(
            ScoreField::TaskAchievementScore,
            "Task Achievement",
            TASK_ACHIEVEMENT_WEIGHT,
            None,
        ),
        RubricRow {
            field: ScoreField::OverallScore,
            label: "Overall",
            score: scores.overall_score,
            weight: None,
            summary: None,
            grade_letter: Some(scores.grade_letter.label()),
            qualitative_label: Some(scores.qualitative_label.label()),
        },
    ]
}
