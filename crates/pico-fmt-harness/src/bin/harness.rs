//! CLI entrypoint for the pico-fmt conformance harness.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use pico_fmt_harness::corpus::builtin_corpus;
use pico_fmt_harness::{ConformanceReport, FixtureSet, TestRunner, VerificationSummary};

/// Conformance tooling for the pico-fmt formatting engine.
#[derive(Debug, Parser)]
#[command(name = "pico-fmt-harness")]
#[command(about = "Conformance testing harness for pico-fmt")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Write the built-in reference corpus as a fixture JSON file.
    Capture {
        /// Output path for the fixture JSON.
        #[arg(long)]
        output: PathBuf,
    },
    /// Verify the engine against a fixture file (or the built-in corpus).
    Verify {
        /// Fixture JSON to replay; defaults to the built-in corpus.
        #[arg(long)]
        fixture: Option<PathBuf>,
        /// Optional output path for a markdown report.
        #[arg(long)]
        report: Option<PathBuf>,
        /// Print the report as JSON to stdout instead of a summary line.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, Box<dyn std::error::Error>> {
    match cli.command {
        Command::Capture { output } => {
            let corpus = builtin_corpus();
            corpus.to_file(&output)?;
            println!("captured {} cases to {}", corpus.cases.len(), output.display());
            Ok(ExitCode::SUCCESS)
        }
        Command::Verify {
            fixture,
            report,
            json,
        } => {
            let set = match fixture {
                Some(path) => FixtureSet::from_file(&path)?,
                None => builtin_corpus(),
            };
            let results = TestRunner::new("conformance").run(&set);
            let summary = VerificationSummary::from_results(results);
            let all_passed = summary.all_passed();
            let conformance = ConformanceReport {
                title: "pico-fmt conformance".into(),
                family: set.family.clone(),
                summary,
            };

            if json {
                println!("{}", conformance.to_json());
            } else {
                println!(
                    "{}: {} total, {} passed, {} failed",
                    conformance.family,
                    conformance.summary.total,
                    conformance.summary.passed,
                    conformance.summary.failed
                );
                for r in conformance.summary.results.iter().filter(|r| !r.passed) {
                    println!("FAIL {}", r.case_name);
                    if let Some(diff) = &r.diff {
                        println!("{diff}");
                    }
                }
            }

            if let Some(path) = report {
                std::fs::write(&path, conformance.to_markdown())?;
                println!("report written to {}", path.display());
            }

            Ok(if all_passed {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}
