use serde::{Deserialize, Serialize};

use super::config::{
    GRADE_A_FLOOR, GRADE_B_FLOOR, GRADE_C_FLOOR, GRADE_D_FLOOR, MAX_SCORE, MIN_SCORE,
};
use super::domain::{ScoreField, TeacherOverride};
use super::rubric::Rubric;

/// Letter grade attached to an overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GradeLetter {
    A,
    B,
    C,
    D,
    F,
}

impl GradeLetter {
    pub fn from_score(overall_score: f64) -> Self {
        if overall_score >= GRADE_A_FLOOR {
            GradeLetter::A
        } else if overall_score >= GRADE_B_FLOOR {
            GradeLetter::B
        } else if overall_score >= GRADE_C_FLOOR {
            GradeLetter::C
        } else if overall_score >= GRADE_D_FLOOR {
            GradeLetter::D
        } else {
            GradeLetter::F
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            GradeLetter::A => "A",
            GradeLetter::B => "B",
            GradeLetter::C => "C",
            GradeLetter::D => "D",
            GradeLetter::F => "F",
        }
    }

    pub const fn qualitative(self) -> QualitativeLabel {
        match self {
            GradeLetter::A => QualitativeLabel::Excellent,
            GradeLetter::B => QualitativeLabel::Good,
            GradeLetter::C => QualitativeLabel::Satisfactory,
            GradeLetter::D => QualitativeLabel::NeedsImprovement,
            GradeLetter::F => QualitativeLabel::Unsatisfactory,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QualitativeLabel {
    Excellent,
    Good,
    Satisfactory,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
    Unsatisfactory,
}

impl QualitativeLabel {
    pub const fn label(self) -> &'static str {
        match self {
            QualitativeLabel::Excellent => "Excellent",
            QualitativeLabel::Good => "Good",
            QualitativeLabel::Satisfactory => "Satisfactory",
            QualitativeLabel::NeedsImprovement => "Needs Improvement",
            QualitativeLabel::Unsatisfactory => "Unsatisfactory",
        }
    }
}

pub fn grade_for(overall_score: f64) -> (GradeLetter, QualitativeLabel) {
    let grade = GradeLetter::from_score(overall_score);
    (grade, grade.qualitative())
}

pub(crate) fn clamp_score(value: f64) -> f64 {
    if value.is_nan() {
        return MIN_SCORE;
    }
    value.clamp(MIN_SCORE, MAX_SCORE)
}

/// Produces the rubric a teacher actually sees, plus whether any override applied.
///
/// The computed rubric is left untouched; grade and label always follow the effective
/// overall score. Override values are clamped to the score range but keep the precision
/// the teacher entered, so `89.96` stays `89.96` and grades B.
pub(crate) fn apply_override(
    rubric: &Rubric,
    overrides: Option<&TeacherOverride>,
) -> (Rubric, bool) {
    let mut effective = rubric.clone();
    let Some(overrides) = overrides else {
        return (effective, false);
    };

    let mut applied = false;
    for field in ScoreField::ALL {
        if let Some(value) = overrides.finite(field) {
            effective.scores.set(field, clamp_score(value));
            applied = true;
        }
    }

    let (grade, label) = grade_for(effective.scores.overall_score);
    effective.scores.grade_letter = grade;
    effective.scores.qualitative_label = label;

    (effective, applied)
}
