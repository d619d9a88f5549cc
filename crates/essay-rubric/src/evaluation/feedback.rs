use serde::{Deserialize, Serialize};

use super::config::MAX_TOP_ISSUES;
use super::domain::IssueCategory;
use super::rules::{ClassifiedIssue, Partitions};

/// Rubric dimensions that receive a written summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FeedbackCategory {
    Grammar,
    Structure,
    Content,
    Vocabulary,
}

impl FeedbackCategory {
    pub const fn label(self) -> &'static str {
        match self {
            FeedbackCategory::Grammar => "Grammar & Mechanics",
            FeedbackCategory::Structure => "Structure & Organization",
            FeedbackCategory::Content => "Content & Relevance",
            FeedbackCategory::Vocabulary => "Vocabulary & Style",
        }
    }
}

/// One example issue surfaced under a feedback category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackItem {
    pub key: IssueCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackBlock {
    pub category: FeedbackCategory,
    pub summary: String,
    pub issue_count: usize,
    pub top_issues: Vec<FeedbackItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredFeedback {
    pub grammar_feedback: FeedbackBlock,
    pub structure_feedback: FeedbackBlock,
    pub content_feedback: FeedbackBlock,
    pub vocabulary_feedback: FeedbackBlock,
}

impl StructuredFeedback {
    pub fn blocks(&self) -> [&FeedbackBlock; 4] {
        [
            &self.grammar_feedback,
            &self.structure_feedback,
            &self.content_feedback,
            &self.vocabulary_feedback,
        ]
    }
}

pub(crate) fn synthesize(word_count: usize, partitions: &Partitions<'_>) -> StructuredFeedback {
    StructuredFeedback {
        grammar_feedback: block(FeedbackCategory::Grammar, word_count, &partitions.grammar),
        structure_feedback: block(
            FeedbackCategory::Structure,
            word_count,
            &partitions.structure,
        ),
        content_feedback: block(FeedbackCategory::Content, word_count, &partitions.content),
        vocabulary_feedback: block(
            FeedbackCategory::Vocabulary,
            word_count,
            &partitions.vocabulary,
        ),
    }
}

fn block(
    category: FeedbackCategory,
    word_count: usize,
    issues: &[ClassifiedIssue<'_>],
) -> FeedbackBlock {
    FeedbackBlock {
        category,
        summary: summary_line(category, word_count, issues.len()),
        issue_count: issues.len(),
        top_issues: top_issues(issues),
    }
}

pub(crate) fn summary_line(
    category: FeedbackCategory,
    word_count: usize,
    issue_count: usize,
) -> String {
    let label = category.label();
    if word_count == 0 {
        format!("{label}: No text extracted.")
    } else if issue_count == 0 {
        format!("{label}: No issues detected.")
    } else {
        format!("{label}: Detected {issue_count} issue(s) based on automated checks.")
    }
}

fn top_issues(issues: &[ClassifiedIssue<'_>]) -> Vec<FeedbackItem> {
    issues
        .iter()
        .filter_map(|entry| {
            let item = FeedbackItem {
                key: entry.category,
                symbol: non_blank(entry.issue.symbol.as_deref()),
                message: non_blank(entry.issue.message.as_deref()),
                suggestion: non_blank(entry.issue.suggestion.as_deref()),
            };
            let describable =
                item.symbol.is_some() || item.message.is_some() || item.suggestion.is_some();
            describable.then_some(item)
        })
        .take(MAX_TOP_ISSUES)
        .collect()
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
