//! Integration test: the built-in corpus passes end to end.
//!
//! Validates that:
//! 1. Every curated reference case renders exactly as authored.
//! 2. The corpus survives a JSON round-trip and still passes.
//! 3. The report generator renders the run.
//!
//! Run: cargo test -p pico-fmt-harness --test conformance_test

use pico_fmt_harness::corpus::builtin_corpus;
use pico_fmt_harness::{ConformanceReport, FixtureSet, TestRunner, VerificationSummary};

#[test]
fn builtin_corpus_passes() {
    let corpus = builtin_corpus();
    let results = TestRunner::new("conformance").run(&corpus);
    let summary = VerificationSummary::from_results(results);

    for r in summary.results.iter().filter(|r| !r.passed) {
        eprintln!(
            "FAIL {}: expected {:?}, got {:?}",
            r.case_name, r.expected, r.actual
        );
    }
    assert!(summary.all_passed(), "{} corpus cases failed", summary.failed);
    assert_eq!(summary.total, corpus.cases.len());
}

#[test]
fn corpus_round_trips_through_json() {
    let corpus = builtin_corpus();
    let json = corpus.to_json().expect("corpus serializes");
    let reloaded = FixtureSet::from_json(&json).expect("corpus parses back");
    assert_eq!(reloaded.cases.len(), corpus.cases.len());

    let results = TestRunner::new("roundtrip").run(&reloaded);
    assert!(results.iter().all(|r| r.passed));
}

#[test]
fn report_covers_every_case() {
    let corpus = builtin_corpus();
    let case_count = corpus.cases.len();
    let results = TestRunner::new("report").run(&corpus);
    let report = ConformanceReport {
        title: "pico-fmt conformance".into(),
        family: corpus.family,
        summary: VerificationSummary::from_results(results),
    };

    let md = report.to_markdown();
    assert!(md.contains("- Failed: 0"));
    assert_eq!(md.matches("| PASS |").count(), case_count);

    let json = report.to_json();
    assert!(json.contains("\"passed\": true"));
}
