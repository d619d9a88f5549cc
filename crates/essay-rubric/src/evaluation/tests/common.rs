use crate::evaluation::{Issue, TeacherOverride};

/// `count` filler words with no punctuation.
pub(super) fn words(count: usize) -> String {
    (0..count)
        .map(|index| format!("word{index}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// An essay of `paragraphs` paragraphs, each holding `sentences` sentences of
/// `words_per_sentence` words.
pub(super) fn essay(paragraphs: usize, sentences: usize, words_per_sentence: usize) -> String {
    (0..paragraphs)
        .map(|_| {
            (0..sentences)
                .map(|_| format!("{}.", words(words_per_sentence)))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Ninety words over three paragraphs and nine sentences.
pub(super) fn well_formed_essay() -> String {
    essay(3, 3, 10)
}

pub(super) fn mixed_issues() -> Vec<Issue> {
    vec![
        Issue::new("Grammar Error")
            .with_symbol("they was")
            .with_message("Subject and verb disagree.")
            .with_suggestion("they were"),
        Issue::new("spelling_mistake")
            .with_symbol("recieve")
            .with_suggestion("receive"),
        Issue::new("TYPOGRAPHY").with_message("Two consecutive spaces."),
        Issue::new("style-suggestion").with_message("Consider a more precise verb."),
        Issue::new("unknown").with_message("Sentence may be off topic."),
    ]
}

pub(super) fn overall_override(value: f64) -> TeacherOverride {
    TeacherOverride {
        overall_score: Some(value),
        ..TeacherOverride::default()
    }
}
