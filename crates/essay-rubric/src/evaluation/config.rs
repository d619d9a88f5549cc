//! Fixed weights and thresholds for the rubric heuristic.
//!
//! The engine takes no runtime configuration. Every number that shapes a score lives
//! here so the algorithm code reads as a sequence of named steps.

/// Penalties are expressed per this many words of text.
pub const PENALTY_BASIS_WORDS: f64 = 100.0;

pub const GRAMMAR_SEVERITY: f64 = 1.35;
pub const SPELLING_SEVERITY: f64 = 1.05;
pub const TYPOGRAPHY_SEVERITY: f64 = 0.90;
pub const STYLE_SEVERITY: f64 = 0.75;
pub const OTHER_SEVERITY: f64 = 0.65;

/// Answers below this many words accrue a shortness penalty per missing word.
pub const MIN_ASSESSABLE_WORDS: usize = 40;
pub const SHORTNESS_PENALTY_PER_WORD: f64 = 0.9;
pub const EMPTY_TEXT_PENALTY: f64 = 100.0;

/// Length at which paragraphing and sentence breaks are expected.
pub const LONG_ANSWER_MIN_WORDS: usize = 80;
pub const MAX_UNBROKEN_PARAGRAPHS: usize = 1;
pub const UNBROKEN_PARAGRAPH_PENALTY: f64 = 8.0;
pub const MAX_RUN_ON_SENTENCES: usize = 2;
pub const RUN_ON_SENTENCE_PENALTY: f64 = 10.0;

pub const GRAMMAR_PENALTY_SCALE: f64 = 1.25;
pub const STRUCTURE_PARAGRAPH_SHARE: f64 = 0.6;
pub const STRUCTURE_SENTENCE_SHARE: f64 = 0.4;
pub const STRUCTURE_PENALTY_SCALE: f64 = 1.1;
pub const CONTENT_ISSUE_SCALE: f64 = 1.1;
pub const CONTENT_PENALTY_SCALE: f64 = 0.9;
pub const VOCABULARY_PENALTY_SCALE: f64 = 0.85;
pub const TASK_PENALTY_SCALE: f64 = 1.0;

pub const GRAMMAR_WEIGHT: f64 = 0.25;
pub const STRUCTURE_WEIGHT: f64 = 0.25;
pub const CONTENT_WEIGHT: f64 = 0.25;
pub const VOCABULARY_WEIGHT: f64 = 0.15;
pub const TASK_ACHIEVEMENT_WEIGHT: f64 = 0.10;

pub const GRADE_A_FLOOR: f64 = 90.0;
pub const GRADE_B_FLOOR: f64 = 80.0;
pub const GRADE_C_FLOOR: f64 = 70.0;
pub const GRADE_D_FLOOR: f64 = 60.0;

pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 100.0;

/// Upper bound on the example issues listed under each feedback category.
pub const MAX_TOP_ISSUES: usize = 6;
