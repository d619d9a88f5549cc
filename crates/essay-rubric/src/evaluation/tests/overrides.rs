use super::common::*;
use crate::evaluation::{evaluate, GradeLetter, QualitativeLabel, ScoreField, TeacherOverride};
use serde_json::json;

#[test]
fn overall_override_takes_precedence_and_regrades() {
    let text = essay(1, 2, 12);
    let overrides = overall_override(95.0);

    let baseline = evaluate(&text, &mixed_issues(), None);
    let result = evaluate(&text, &mixed_issues(), Some(&overrides));

    assert!(result.has_teacher_overrides);
    assert_eq!(result.effective_rubric.scores.overall_score, 95.0);
    assert_eq!(result.effective_rubric.scores.grade_letter, GradeLetter::A);
    assert_eq!(
        result.effective_rubric.scores.qualitative_label,
        QualitativeLabel::Excellent
    );
    assert_eq!(result.rubric, baseline.rubric);
    assert_eq!(
        result.effective_rubric.scores.grammar_score,
        baseline.rubric.scores.grammar_score
    );
}

#[test]
fn absent_override_leaves_effective_rubric_equal_to_baseline() {
    let result = evaluate(&well_formed_essay(), &mixed_issues(), None);

    assert!(!result.has_teacher_overrides);
    assert_eq!(result.effective_rubric, result.rubric);
}

#[test]
fn non_finite_overrides_are_ignored() {
    let overrides = TeacherOverride {
        grammar_score: Some(f64::NAN),
        overall_score: Some(f64::INFINITY),
        ..TeacherOverride::default()
    };

    let result = evaluate(&well_formed_essay(), &[], Some(&overrides));

    assert!(!result.has_teacher_overrides);
    assert_eq!(result.effective_rubric, result.rubric);
}

#[test]
fn override_values_are_clamped() {
    let overrides = TeacherOverride::default()
        .with(ScoreField::ContentScore, 140.0)
        .with(ScoreField::OverallScore, -3.0);

    let result = evaluate(&well_formed_essay(), &[], Some(&overrides));
    let effective = &result.effective_rubric.scores;

    assert_eq!(effective.content_score, 100.0);
    assert_eq!(effective.overall_score, 0.0);
    assert_eq!(effective.grade_letter, GradeLetter::F);
}

#[test]
fn override_values_keep_teacher_precision() {
    let result = evaluate(&well_formed_essay(), &[], Some(&overall_override(89.96)));

    assert_eq!(result.effective_rubric.scores.overall_score, 89.96);
    assert_eq!(result.effective_rubric.scores.grade_letter, GradeLetter::B);
    assert_eq!(
        result.effective_rubric.scores.qualitative_label,
        QualitativeLabel::Good
    );
}

#[test]
fn sub_score_override_keeps_computed_overall_grade() {
    let overrides = TeacherOverride::default().with(ScoreField::GrammarScore, 12.0);

    let result = evaluate(&well_formed_essay(), &[], Some(&overrides));
    let effective = &result.effective_rubric.scores;

    assert!(result.has_teacher_overrides);
    assert_eq!(effective.grammar_score, 12.0);
    assert_eq!(effective.overall_score, result.rubric.scores.overall_score);
    assert_eq!(effective.grade_letter, result.rubric.scores.grade_letter);
}

#[test]
fn override_matching_computed_value_still_flags() {
    let text = well_formed_essay();
    let computed = evaluate(&text, &[], None).rubric.scores.overall_score;

    let result = evaluate(&text, &[], Some(&overall_override(computed)));

    assert!(result.has_teacher_overrides);
    assert_eq!(result.effective_rubric.scores, result.rubric.scores);
}

#[test]
fn overrides_parse_permissively_from_json() {
    assert!(TeacherOverride::from_value(&json!("95")).is_none());
    assert!(TeacherOverride::from_value(&json!([95])).is_none());

    let parsed = TeacherOverride::from_value(&json!({
        "overallScore": 88,
        "grammarScore": "ninety",
        "structureScore": null,
        "unexpected": 4,
    }))
    .expect("object parses");

    assert_eq!(parsed.overall_score, Some(88.0));
    assert_eq!(parsed.grammar_score, None);
    assert_eq!(parsed.structure_score, None);
    assert!(parsed.has_finite_values());

    let empty = TeacherOverride::from_value(&json!({})).expect("object parses");
    assert!(!empty.has_finite_values());
}
