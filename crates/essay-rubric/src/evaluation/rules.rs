use std::collections::BTreeMap;

use super::config::{
    CONTENT_ISSUE_SCALE, CONTENT_PENALTY_SCALE, CONTENT_WEIGHT, EMPTY_TEXT_PENALTY,
    GRAMMAR_PENALTY_SCALE, GRAMMAR_WEIGHT, LONG_ANSWER_MIN_WORDS, MAX_RUN_ON_SENTENCES,
    MAX_UNBROKEN_PARAGRAPHS, MIN_ASSESSABLE_WORDS, PENALTY_BASIS_WORDS, RUN_ON_SENTENCE_PENALTY,
    SHORTNESS_PENALTY_PER_WORD, STRUCTURE_PARAGRAPH_SHARE, STRUCTURE_PENALTY_SCALE,
    STRUCTURE_SENTENCE_SHARE, STRUCTURE_WEIGHT, TASK_ACHIEVEMENT_WEIGHT, TASK_PENALTY_SCALE,
    UNBROKEN_PARAGRAPH_PENALTY, VOCABULARY_PENALTY_SCALE, VOCABULARY_WEIGHT,
};
use super::domain::{Issue, IssueCategory};
use super::policy::{clamp_score, grade_for};
use super::rubric::{RubricScores, ScoringBreakdown};
use super::text_stats::TextStats;

pub(crate) const GRAMMAR_MEMBERS: &[IssueCategory] = &[
    IssueCategory::Grammar,
    IssueCategory::Typography,
    IssueCategory::Spelling,
];
pub(crate) const STRUCTURE_MEMBERS: &[IssueCategory] =
    &[IssueCategory::Style, IssueCategory::Typography];
pub(crate) const VOCABULARY_MEMBERS: &[IssueCategory] =
    &[IssueCategory::Style, IssueCategory::Other];
pub(crate) const CONTENT_MEMBERS: &[IssueCategory] = &[IssueCategory::Other];

/// An input issue paired with its classification, computed once per evaluation.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ClassifiedIssue<'a> {
    pub category: IssueCategory,
    pub issue: &'a Issue,
}

pub(crate) fn classify_all(issues: &[Issue]) -> Vec<ClassifiedIssue<'_>> {
    issues
        .iter()
        .map(|issue| ClassifiedIssue {
            category: issue.category(),
            issue,
        })
        .collect()
}

/// Issue subsets feeding each rubric dimension.
///
/// Subsets overlap: a typography issue counts against both grammar and structure, and
/// a style issue against both structure and vocabulary. Each subset is its own filter
/// pass over the full list.
pub(crate) struct Partitions<'a> {
    pub grammar: Vec<ClassifiedIssue<'a>>,
    pub structure: Vec<ClassifiedIssue<'a>>,
    pub content: Vec<ClassifiedIssue<'a>>,
    pub vocabulary: Vec<ClassifiedIssue<'a>>,
}

impl<'a> Partitions<'a> {
    pub fn build(classified: &[ClassifiedIssue<'a>]) -> Self {
        Self {
            grammar: partition(classified, GRAMMAR_MEMBERS),
            structure: partition(classified, STRUCTURE_MEMBERS),
            content: partition(classified, CONTENT_MEMBERS),
            vocabulary: partition(classified, VOCABULARY_MEMBERS),
        }
    }
}

fn partition<'a>(
    classified: &[ClassifiedIssue<'a>],
    members: &[IssueCategory],
) -> Vec<ClassifiedIssue<'a>> {
    classified
        .iter()
        .filter(|entry| members.contains(&entry.category))
        .copied()
        .collect()
}

/// Penalty per hundred words for one issue subset.
///
/// Repeats of the same classification grow with the square root of their count.
pub(crate) fn issue_penalty(issues: &[ClassifiedIssue<'_>], word_count: usize) -> f64 {
    let per_word_norm = if word_count > 0 {
        PENALTY_BASIS_WORDS / word_count as f64
    } else {
        0.0
    };

    let mut counts: BTreeMap<IssueCategory, usize> = BTreeMap::new();
    for entry in issues {
        *counts.entry(entry.category).or_default() += 1;
    }

    let penalty: f64 = counts
        .iter()
        .map(|(category, count)| (*count as f64).sqrt() * category.severity())
        .sum();

    penalty * per_word_norm
}

/// Text-shape penalties that apply whether or not the checker found anything.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ShapePenalties {
    pub shortness: f64,
    pub paragraph: f64,
    pub sentence: f64,
}

pub(crate) fn shape_penalties(stats: &TextStats) -> ShapePenalties {
    let words = stats.word_count;

    let shortness = if words == 0 {
        EMPTY_TEXT_PENALTY
    } else if words < MIN_ASSESSABLE_WORDS {
        (MIN_ASSESSABLE_WORDS - words) as f64 * SHORTNESS_PENALTY_PER_WORD
    } else {
        0.0
    };

    let long_answer = words >= LONG_ANSWER_MIN_WORDS;
    let paragraph = if long_answer && stats.paragraph_count <= MAX_UNBROKEN_PARAGRAPHS {
        UNBROKEN_PARAGRAPH_PENALTY
    } else {
        0.0
    };
    let sentence = if long_answer && stats.sentence_count <= MAX_RUN_ON_SENTENCES {
        RUN_ON_SENTENCE_PENALTY
    } else {
        0.0
    };

    ShapePenalties {
        shortness,
        paragraph,
        sentence,
    }
}

pub(crate) fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn finalize(raw: f64) -> f64 {
    round_one_decimal(clamp_score(raw))
}

pub(crate) fn score_rubric(
    stats: &TextStats,
    partitions: &Partitions<'_>,
) -> (RubricScores, ScoringBreakdown) {
    let words = stats.word_count;
    let grammar_penalty = issue_penalty(&partitions.grammar, words);
    let structure_penalty = issue_penalty(&partitions.structure, words);
    let content_penalty = issue_penalty(&partitions.content, words);
    let vocabulary_penalty = issue_penalty(&partitions.vocabulary, words);
    let shape = shape_penalties(stats);

    let grammar_score = finalize(100.0 - grammar_penalty * GRAMMAR_PENALTY_SCALE);
    let structure_score = finalize(
        100.0
            - (structure_penalty
                + shape.paragraph * STRUCTURE_PARAGRAPH_SHARE
                + shape.sentence * STRUCTURE_SENTENCE_SHARE)
                * STRUCTURE_PENALTY_SCALE,
    );
    let content_score = finalize(
        100.0
            - (content_penalty * CONTENT_ISSUE_SCALE + shape.shortness + shape.paragraph)
                * CONTENT_PENALTY_SCALE,
    );
    let vocabulary_score = finalize(100.0 - vocabulary_penalty * VOCABULARY_PENALTY_SCALE);
    let task_achievement_score =
        finalize(100.0 - (shape.shortness + shape.sentence) * TASK_PENALTY_SCALE);

    let overall_score = finalize(
        grammar_score * GRAMMAR_WEIGHT
            + structure_score * STRUCTURE_WEIGHT
            + content_score * CONTENT_WEIGHT
            + vocabulary_score * VOCABULARY_WEIGHT
            + task_achievement_score * TASK_ACHIEVEMENT_WEIGHT,
    );
    let (grade_letter, qualitative_label) = grade_for(overall_score);

    let scores = RubricScores {
        grammar_score,
        structure_score,
        content_score,
        vocabulary_score,
        task_achievement_score,
        overall_score,
        grade_letter,
        qualitative_label,
    };
    let breakdown = ScoringBreakdown {
        grammar_penalty,
        structure_penalty,
        content_penalty,
        vocabulary_penalty,
        shortness_penalty: shape.shortness,
        paragraph_penalty: shape.paragraph,
        sentence_penalty: shape.sentence,
    };

    (scores, breakdown)
}
