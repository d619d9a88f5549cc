use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Shape of the submitted text, independent of any detected issue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStats {
    pub word_count: usize,
    pub sentence_count: usize,
    pub paragraph_count: usize,
}

impl TextStats {
    pub fn from_text(text: &str) -> Self {
        Self {
            word_count: word_count(text),
            sentence_count: sentence_count(text),
            paragraph_count: paragraph_count(text),
        }
    }
}

/// Unicode white space plus U+FEFF (byte order mark).
fn is_separator(ch: char) -> bool {
    ch.is_whitespace() || ch == '\u{FEFF}'
}

fn trim_separators(text: &str) -> &str {
    text.trim_matches(is_separator)
}

fn whitespace_run() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[\s\x{FEFF}]+").expect("whitespace pattern compiles"))
}

fn paragraph_break() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\n[\s\x{FEFF}]*\n+").expect("paragraph pattern compiles")
    })
}

pub fn word_count(text: &str) -> usize {
    text.split(is_separator)
        .filter(|token| !token.is_empty())
        .count()
}

/// Counts segments separated by whitespace that directly follows `.`, `!` or `?`.
pub fn sentence_count(text: &str) -> usize {
    let trimmed = trim_separators(text);
    let mut count = 0;
    let mut segment_start = 0;

    for gap in whitespace_run().find_iter(trimmed) {
        let closes_sentence = trimmed[..gap.start()]
            .chars()
            .next_back()
            .is_some_and(|ch| matches!(ch, '.' | '!' | '?'));
        if !closes_sentence {
            continue;
        }
        if !trim_separators(&trimmed[segment_start..gap.start()]).is_empty() {
            count += 1;
        }
        segment_start = gap.end();
    }

    if !trim_separators(&trimmed[segment_start..]).is_empty() {
        count += 1;
    }
    count
}

pub fn paragraph_count(text: &str) -> usize {
    paragraph_break()
        .split(trim_separators(text))
        .filter(|segment| !trim_separators(segment).is_empty())
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_blank_text_have_no_shape() {
        assert_eq!(TextStats::from_text(""), TextStats::default());
        assert_eq!(TextStats::from_text("  \n\t \n "), TextStats::default());
    }

    #[test]
    fn words_split_on_any_whitespace_run() {
        assert_eq!(word_count("  one\ttwo \n\n three   four "), 4);
    }

    #[test]
    fn byte_order_marks_separate_like_whitespace() {
        assert_eq!(word_count("word\u{FEFF}word"), 2);
        assert_eq!(word_count("\u{FEFF}"), 0);
        assert_eq!(sentence_count("\u{FEFF}One.\u{FEFF}Two.\u{FEFF}"), 2);
        assert_eq!(paragraph_count("First.\n\u{FEFF}\nSecond."), 2);
        assert_eq!(TextStats::from_text("\u{FEFF} \n"), TextStats::default());
    }

    #[test]
    fn sentences_break_only_after_terminal_punctuation() {
        assert_eq!(sentence_count("First one. Second one! Third one? Fourth"), 4);
        assert_eq!(sentence_count("No terminal punctuation at all"), 1);
        assert_eq!(sentence_count("Decimal 3.14 stays whole."), 1);
        assert_eq!(sentence_count("Trailing stop.   "), 1);
    }

    #[test]
    fn lone_punctuation_counts_as_its_own_segment() {
        assert_eq!(sentence_count("Hi. . ok"), 3);
    }

    #[test]
    fn paragraphs_need_a_blank_line() {
        let text = "Opening line\nstill opening.\n\nMiddle part.\n   \n\n\nClosing.";
        assert_eq!(paragraph_count(text), 3);
        assert_eq!(paragraph_count("single\nparagraph"), 1);
    }
}
