use crate::infra::{read_optional_json, read_text};
use clap::Args;
use essay_rubric::checker::{issues_from_matches, matches_from_value};
use essay_rubric::error::AppError;
use essay_rubric::evaluation::views::rubric_rows;
use essay_rubric::evaluation::{
    issues_from_value, Issue, ScoreField, StructuredFeedback, TeacherOverride,
};
use essay_rubric::{AcademicEvaluationEngine, EvaluationResult};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// Plain-text file holding the answer to score
    #[arg(long)]
    pub(crate) text: PathBuf,
    /// JSON array of issues (`group`, `symbol`, `message`, `suggestion`)
    #[arg(long)]
    pub(crate) issues: Option<PathBuf>,
    /// JSON array of grammar-checker matches to convert into issues
    #[arg(long)]
    pub(crate) matches: Option<PathBuf>,
    /// JSON object of teacher override scores (e.g. `{"overallScore": 88}`)
    #[arg(long)]
    pub(crate) overrides: Option<PathBuf>,
    /// Print the full evaluation as JSON instead of a report
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Apply a sample teacher override after the automated pass.
    #[arg(long)]
    pub(crate) with_override: bool,
    /// Print the full evaluation as JSON instead of a report
    #[arg(long)]
    pub(crate) json: bool,
}

const SAMPLE_ANSWER: &str = "The water cycle describes how water moves around our planet. \
The sun heats water in oceans and lakes, and it evaporates into the air as vapour.\n\n\
As the vapour rises it cools down and condenses into tiny droplets that form clouds. \
When the droplets join together and become heavy, they fall back to the ground as rain, \
snow or hail. This is called precipitation.\n\n\
Some of the water soaks into the ground and some flows into rivers that carry it back \
to the sea. Then the cycle start again, which means the same water has been used for \
millions of years.";

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let EvaluateArgs {
        text,
        issues,
        matches,
        overrides,
        json,
    } = args;

    let text = read_text(&text)?;
    let mut issues = issues_from_value(&read_optional_json(issues.as_deref())?);
    let checker_matches = matches_from_value(&read_optional_json(matches.as_deref())?);
    issues.extend(issues_from_matches(&text, &checker_matches));
    let overrides = TeacherOverride::from_value(&read_optional_json(overrides.as_deref())?);

    let result = AcademicEvaluationEngine::new().evaluate(&text, &issues, overrides.as_ref());
    emit(&result, json)
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        with_override,
        json,
    } = args;

    let result = evaluate_sample(with_override);

    if !json {
        println!("Essay rubric demo");
        println!("Sample answer:\n{}\n", SAMPLE_ANSWER);
    }
    emit(&result, json)
}

fn evaluate_sample(with_override: bool) -> EvaluationResult {
    let overrides = with_override.then(|| {
        TeacherOverride::default()
            .with(ScoreField::ContentScore, 92.0)
            .with(ScoreField::OverallScore, 91.0)
    });

    AcademicEvaluationEngine::new().evaluate(SAMPLE_ANSWER, &sample_issues(), overrides.as_ref())
}

fn sample_issues() -> Vec<Issue> {
    vec![
        Issue::new("grammar")
            .with_symbol("the cycle start")
            .with_message("The verb does not agree with its subject.")
            .with_suggestion("the cycle starts"),
        Issue::new("TYPOS")
            .with_symbol("vapour")
            .with_message("Possible spelling variant.")
            .with_suggestion("vapor"),
        Issue::new("style").with_message("Consider varying sentence openings."),
    ]
}

fn emit(result: &EvaluationResult, json: bool) -> Result<(), AppError> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        render_evaluation(result);
    }
    Ok(())
}

pub(crate) fn render_evaluation(result: &EvaluationResult) {
    let stats = &result.rubric.text_stats;
    println!(
        "Text shape: {} words, {} sentences, {} paragraphs",
        stats.word_count, stats.sentence_count, stats.paragraph_count
    );

    let issue_stats = &result.rubric.issue_stats;
    if issue_stats.total == 0 {
        println!("Detected issues: none");
    } else {
        let breakdown: Vec<String> = issue_stats
            .by_key()
            .into_iter()
            .filter(|(_, count)| *count > 0)
            .map(|(key, count)| format!("{key} {count}"))
            .collect();
        println!(
            "Detected issues: {} ({})",
            issue_stats.total,
            breakdown.join(", ")
        );
    }

    println!("\nRubric");
    for row in rubric_rows(result) {
        match (row.weight, row.grade_letter, row.qualitative_label) {
            (Some(weight), _, _) => println!(
                "- {}: {:.1} (weight {:.0}%)",
                row.label,
                row.score,
                weight * 100.0
            ),
            (None, Some(grade), Some(label)) => {
                println!("- {}: {:.1} -> {} ({})", row.label, row.score, grade, label)
            }
            _ => println!("- {}: {:.1}", row.label, row.score),
        }
    }

    if result.has_teacher_overrides {
        let baseline = &result.rubric.scores;
        println!(
            "Teacher override applied (automated overall {:.1}, grade {})",
            baseline.overall_score,
            baseline.grade_letter.label()
        );
    }

    render_feedback(&result.structured_feedback);

    let breakdown = &result.rubric.scoring_breakdown;
    println!("\nScoring breakdown (penalty per 100 words)");
    println!(
        "- grammar {:.2} | structure {:.2} | content {:.2} | vocabulary {:.2}",
        breakdown.grammar_penalty,
        breakdown.structure_penalty,
        breakdown.content_penalty,
        breakdown.vocabulary_penalty
    );
    println!(
        "- shortness {:.1} | paragraphing {:.1} | sentence breaks {:.1}",
        breakdown.shortness_penalty, breakdown.paragraph_penalty, breakdown.sentence_penalty
    );
}

fn render_feedback(feedback: &StructuredFeedback) {
    println!("\nFeedback");
    for block in feedback.blocks() {
        println!("- {}", block.summary);
        for item in &block.top_issues {
            let mut line = format!("    [{}]", item.key.key());
            if let Some(symbol) = &item.symbol {
                line.push_str(&format!(" \"{symbol}\""));
            }
            if let Some(message) = &item.message {
                line.push_str(&format!(" {message}"));
            }
            if let Some(suggestion) = &item.suggestion {
                line.push_str(&format!(" -> {suggestion}"));
            }
            println!("{line}");
        }
    }
}
