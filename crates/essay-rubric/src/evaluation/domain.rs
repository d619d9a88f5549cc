use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::config::{
    GRAMMAR_SEVERITY, OTHER_SEVERITY, SPELLING_SEVERITY, STYLE_SEVERITY, TYPOGRAPHY_SEVERITY,
};

/// Classification bucket for a detected writing issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueCategory {
    Spelling,
    Grammar,
    Typography,
    Style,
    Other,
}

impl IssueCategory {
    pub const ALL: [IssueCategory; 5] = [
        IssueCategory::Spelling,
        IssueCategory::Grammar,
        IssueCategory::Typography,
        IssueCategory::Style,
        IssueCategory::Other,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            IssueCategory::Spelling => "spelling",
            IssueCategory::Grammar => "grammar",
            IssueCategory::Typography => "typography",
            IssueCategory::Style => "style",
            IssueCategory::Other => "other",
        }
    }

    /// Weight applied to this kind of issue when turning counts into a penalty.
    pub const fn severity(self) -> f64 {
        match self {
            IssueCategory::Spelling => SPELLING_SEVERITY,
            IssueCategory::Grammar => GRAMMAR_SEVERITY,
            IssueCategory::Typography => TYPOGRAPHY_SEVERITY,
            IssueCategory::Style => STYLE_SEVERITY,
            IssueCategory::Other => OTHER_SEVERITY,
        }
    }
}

/// Derives a classification from a checker's free-form category label.
///
/// Matching is a case-insensitive substring test applied in a fixed order, so
/// `"grammar/spelling"` classifies as spelling.
pub fn classify(label: Option<&str>) -> IssueCategory {
    let Some(label) = label else {
        return IssueCategory::Other;
    };
    let label = label.to_lowercase();

    if label.contains("spell") {
        IssueCategory::Spelling
    } else if label.contains("gram") {
        IssueCategory::Grammar
    } else if label.contains("typ") {
        IssueCategory::Typography
    } else if label.contains("style") {
        IssueCategory::Style
    } else {
        IssueCategory::Other
    }
}

/// A single writing problem reported by an external checker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Issue {
    pub group: Option<String>,
    pub symbol: Option<String>,
    pub message: Option<String>,
    pub suggestion: Option<String>,
}

impl Issue {
    pub fn new(group: impl Into<String>) -> Self {
        Self {
            group: Some(group.into()),
            ..Self::default()
        }
    }

    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn category(&self) -> IssueCategory {
        classify(self.group.as_deref())
    }

    /// Reads an issue from loosely shaped JSON. Fields of the wrong type are dropped,
    /// and a non-object value yields an issue with no fields at all.
    pub fn from_value(value: &Value) -> Self {
        Self {
            group: first_string(value, &["group", "category", "label"]),
            symbol: first_string(value, &["symbol"]),
            message: first_string(value, &["message", "description"]),
            suggestion: first_string(value, &["suggestion", "replacement"]),
        }
    }
}

/// Reads an issue list from loosely shaped JSON; anything but an array is empty.
pub fn issues_from_value(value: &Value) -> Vec<Issue> {
    value
        .as_array()
        .map(|items| items.iter().map(Issue::from_value).collect())
        .unwrap_or_default()
}

fn first_string(value: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|key| value.get(key).and_then(Value::as_str))
        .map(str::to_string)
}

/// Per-classification tally of the issues supplied to one evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueStats {
    pub spelling: usize,
    pub grammar: usize,
    pub typography: usize,
    pub style: usize,
    pub other: usize,
    pub total: usize,
}

impl IssueStats {
    pub fn tally<I>(categories: I) -> Self
    where
        I: IntoIterator<Item = IssueCategory>,
    {
        let mut stats = Self::default();
        for category in categories {
            match category {
                IssueCategory::Spelling => stats.spelling += 1,
                IssueCategory::Grammar => stats.grammar += 1,
                IssueCategory::Typography => stats.typography += 1,
                IssueCategory::Style => stats.style += 1,
                IssueCategory::Other => stats.other += 1,
            }
            stats.total += 1;
        }
        stats
    }

    pub fn count(&self, category: IssueCategory) -> usize {
        match category {
            IssueCategory::Spelling => self.spelling,
            IssueCategory::Grammar => self.grammar,
            IssueCategory::Typography => self.typography,
            IssueCategory::Style => self.style,
            IssueCategory::Other => self.other,
        }
    }

    pub fn by_key(&self) -> BTreeMap<&'static str, usize> {
        IssueCategory::ALL
            .iter()
            .map(|category| (category.key(), self.count(*category)))
            .collect()
    }
}

/// Score fields a teacher may replace after the automated pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScoreField {
    GrammarScore,
    StructureScore,
    ContentScore,
    VocabularyScore,
    TaskAchievementScore,
    OverallScore,
}

impl ScoreField {
    pub const ALL: [ScoreField; 6] = [
        ScoreField::GrammarScore,
        ScoreField::StructureScore,
        ScoreField::ContentScore,
        ScoreField::VocabularyScore,
        ScoreField::TaskAchievementScore,
        ScoreField::OverallScore,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            ScoreField::GrammarScore => "grammarScore",
            ScoreField::StructureScore => "structureScore",
            ScoreField::ContentScore => "contentScore",
            ScoreField::VocabularyScore => "vocabularyScore",
            ScoreField::TaskAchievementScore => "taskAchievementScore",
            ScoreField::OverallScore => "overallScore",
        }
    }
}

/// Partial set of replacement scores supplied by a teacher.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeacherOverride {
    pub grammar_score: Option<f64>,
    pub structure_score: Option<f64>,
    pub content_score: Option<f64>,
    pub vocabulary_score: Option<f64>,
    pub task_achievement_score: Option<f64>,
    pub overall_score: Option<f64>,
}

impl TeacherOverride {
    pub fn with(mut self, field: ScoreField, value: f64) -> Self {
        *self.slot_mut(field) = Some(value);
        self
    }

    pub fn get(&self, field: ScoreField) -> Option<f64> {
        match field {
            ScoreField::GrammarScore => self.grammar_score,
            ScoreField::StructureScore => self.structure_score,
            ScoreField::ContentScore => self.content_score,
            ScoreField::VocabularyScore => self.vocabulary_score,
            ScoreField::TaskAchievementScore => self.task_achievement_score,
            ScoreField::OverallScore => self.overall_score,
        }
    }

    /// The replacement for `field`, if one was supplied as a finite number.
    pub fn finite(&self, field: ScoreField) -> Option<f64> {
        self.get(field).filter(|value| value.is_finite())
    }

    pub fn has_finite_values(&self) -> bool {
        ScoreField::ALL
            .iter()
            .any(|field| self.finite(*field).is_some())
    }

    /// Reads overrides from loosely shaped JSON. Non-objects are treated as absent and
    /// non-numeric fields are ignored.
    pub fn from_value(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        let mut overrides = Self::default();
        for field in ScoreField::ALL {
            if let Some(number) = object.get(field.key()).and_then(Value::as_f64) {
                *overrides.slot_mut(field) = Some(number);
            }
        }
        Some(overrides)
    }

    fn slot_mut(&mut self, field: ScoreField) -> &mut Option<f64> {
        match field {
            ScoreField::GrammarScore => &mut self.grammar_score,
            ScoreField::StructureScore => &mut self.structure_score,
            ScoreField::ContentScore => &mut self.content_score,
            ScoreField::VocabularyScore => &mut self.vocabulary_score,
            ScoreField::TaskAchievementScore => &mut self.task_achievement_score,
            ScoreField::OverallScore => &mut self.overall_score,
        }
    }
}
