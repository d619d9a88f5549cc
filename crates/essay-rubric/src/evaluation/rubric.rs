use serde::{Deserialize, Serialize};

use super::domain::{IssueStats, ScoreField};
use super::policy::{GradeLetter, QualitativeLabel};
use super::text_stats::TextStats;

/// The five dimension scores, their weighted blend, and the derived grade.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RubricScores {
    pub grammar_score: f64,
    pub structure_score: f64,
    pub content_score: f64,
    pub vocabulary_score: f64,
    pub task_achievement_score: f64,
    pub overall_score: f64,
    pub grade_letter: GradeLetter,
    pub qualitative_label: QualitativeLabel,
}

impl RubricScores {
    pub fn get(&self, field: ScoreField) -> f64 {
        match field {
            ScoreField::GrammarScore => self.grammar_score,
            ScoreField::StructureScore => self.structure_score,
            ScoreField::ContentScore => self.content_score,
            ScoreField::VocabularyScore => self.vocabulary_score,
            ScoreField::TaskAchievementScore => self.task_achievement_score,
            ScoreField::OverallScore => self.overall_score,
        }
    }

    pub(crate) fn set(&mut self, field: ScoreField, value: f64) {
        let slot = match field {
            ScoreField::GrammarScore => &mut self.grammar_score,
            ScoreField::StructureScore => &mut self.structure_score,
            ScoreField::ContentScore => &mut self.content_score,
            ScoreField::VocabularyScore => &mut self.vocabulary_score,
            ScoreField::TaskAchievementScore => &mut self.task_achievement_score,
            ScoreField::OverallScore => &mut self.overall_score,
        };
        *slot = value;
    }
}

/// Raw inputs behind each score so a reviewer can see why a rubric came out as it did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringBreakdown {
    pub grammar_penalty: f64,
    pub structure_penalty: f64,
    pub content_penalty: f64,
    pub vocabulary_penalty: f64,
    pub shortness_penalty: f64,
    pub paragraph_penalty: f64,
    pub sentence_penalty: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rubric {
    #[serde(flatten)]
    pub scores: RubricScores,
    pub text_stats: TextStats,
    pub issue_stats: IssueStats,
    pub scoring_breakdown: ScoringBreakdown,
}
