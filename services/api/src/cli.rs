use crate::demo::{run_demo, run_evaluate, DemoArgs, EvaluateArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use essay_rubric::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Essay Rubric",
    about = "Score written answers against the academic rubric from the command line or over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Evaluate a text file against optional issue and override files
    Evaluate(EvaluateArgs),
    /// Evaluate a bundled sample answer and print the report
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Evaluate(args) => run_evaluate(args),
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn no_subcommand_defaults_to_serve() {
        let cli = Cli::try_parse_from(["essay-rubric"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn evaluate_accepts_input_files() {
        let cli = Cli::try_parse_from([
            "essay-rubric",
            "evaluate",
            "--text",
            "answer.txt",
            "--issues",
            "issues.json",
            "--json",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Evaluate(args)) => {
                assert_eq!(args.text, PathBuf::from("answer.txt"));
                assert_eq!(args.issues, Some(PathBuf::from("issues.json")));
                assert!(args.overrides.is_none());
                assert!(args.json);
            }
            other => panic!("expected evaluate command, got {other:?}"),
        }
    }

    #[test]
    fn evaluate_requires_text() {
        assert!(Cli::try_parse_from(["essay-rubric", "evaluate"]).is_err());
    }
}
