//! Adapter from grammar-checker match objects to evaluation issues.
//!
//! The shapes mirror the LanguageTool `check` response. Offsets and lengths are
//! interpreted as character positions in the checked text.

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::evaluation::Issue;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CheckerMatch {
    pub offset: usize,
    pub length: usize,
    pub message: Option<String>,
    pub short_message: Option<String>,
    pub rule: Option<CheckerRule>,
    pub replacements: Vec<CheckerReplacement>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CheckerRule {
    pub id: Option<String>,
    pub issue_type: Option<String>,
    pub category: Option<CheckerCategory>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CheckerCategory {
    pub id: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CheckerReplacement {
    pub value: Option<String>,
}

impl CheckerMatch {
    /// Label used for classification: category id, then category name, then issue type.
    pub fn group_label(&self) -> Option<String> {
        let rule = self.rule.as_ref()?;
        let category = rule.category.as_ref();
        category
            .and_then(|category| category.id.clone())
            .or_else(|| category.and_then(|category| category.name.clone()))
            .or_else(|| rule.issue_type.clone())
    }

    fn excerpt(&self, text: &str) -> Option<String> {
        if self.length == 0 {
            return None;
        }
        let excerpt: String = text.chars().skip(self.offset).take(self.length).collect();
        let trimmed = excerpt.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }

    pub fn to_issue(&self, text: &str) -> Issue {
        Issue {
            group: self.group_label(),
            symbol: self.excerpt(text).or_else(|| self.short_message.clone()),
            message: self.message.clone(),
            suggestion: self
                .replacements
                .iter()
                .find_map(|replacement| replacement.value.clone()),
        }
    }
}

pub fn issues_from_matches(text: &str, matches: &[CheckerMatch]) -> Vec<Issue> {
    matches.iter().map(|entry| entry.to_issue(text)).collect()
}

/// Reads checker matches from loosely shaped JSON, dropping entries that do not parse.
pub fn matches_from_value(value: &Value) -> Vec<CheckerMatch> {
    let Some(items) = value.as_array() else {
        return Vec::new();
    };

    let matches: Vec<CheckerMatch> = items
        .iter()
        .filter_map(|item| serde_json::from_value(item.clone()).ok())
        .collect();

    let dropped = items.len() - matches.len();
    if dropped > 0 {
        warn!(dropped, "ignored malformed checker matches");
    }
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::IssueCategory;
    use serde_json::json;

    fn languagetool_payload() -> Value {
        json!([
            {
                "message": "Possible spelling mistake found.",
                "shortMessage": "Spelling mistake",
                "offset": 4,
                "length": 5,
                "replacements": [{ "value": "quick" }, { "value": "quirk" }],
                "rule": {
                    "id": "MORFOLOGIK_RULE_EN_US",
                    "issueType": "misspelling",
                    "category": { "id": "TYPOS", "name": "Possible Typo" }
                }
            },
            {
                "message": "Use a comma before 'but'.",
                "offset": 500,
                "length": 3,
                "shortMessage": "Missing comma",
                "replacements": [],
                "rule": { "issueType": "grammar" }
            },
            "not a match object"
        ])
    }

    #[test]
    fn languagetool_matches_become_issues() {
        let text = "The qiuck brown fox jumps but the dog naps.";
        let matches = matches_from_value(&languagetool_payload());
        assert_eq!(matches.len(), 2);

        let issues = issues_from_matches(text, &matches);

        assert_eq!(issues[0].group.as_deref(), Some("TYPOS"));
        assert_eq!(issues[0].category(), IssueCategory::Typography);
        assert_eq!(issues[0].symbol.as_deref(), Some("qiuck"));
        assert_eq!(issues[0].suggestion.as_deref(), Some("quick"));

        assert_eq!(issues[1].category(), IssueCategory::Grammar);
        assert_eq!(issues[1].symbol.as_deref(), Some("Missing comma"));
        assert!(issues[1].suggestion.is_none());
    }

    #[test]
    fn non_array_payload_yields_no_matches() {
        assert!(matches_from_value(&json!({ "matches": [] })).is_empty());
        assert!(matches_from_value(&Value::Null).is_empty());
    }

    #[test]
    fn missing_rule_leaves_issue_unclassified() {
        let issue = CheckerMatch::default().to_issue("anything");
        assert_eq!(issue.group, None);
        assert_eq!(issue.category(), IssueCategory::Other);
    }
}
