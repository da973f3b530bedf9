//! Test execution engine.

use pico_fmt_core::{vfctprintf, FmtArg};

use crate::diff;
use crate::fixtures::{FixtureCase, FixtureSet};
use crate::verify::VerificationResult;

/// Runs a fixture set against the formatting engine.
pub struct TestRunner {
    /// Name of the test campaign.
    pub campaign: String,
}

impl TestRunner {
    /// Create a new test runner.
    #[must_use]
    pub fn new(campaign: impl Into<String>) -> Self {
        Self {
            campaign: campaign.into(),
        }
    }

    /// Run all fixtures in a set and return per-case results.
    pub fn run(&self, fixture_set: &FixtureSet) -> Vec<VerificationResult> {
        fixture_set
            .cases
            .iter()
            .map(|case| {
                let (actual, count) = execute_case(case);
                let mut passed = actual == case.expected_output;
                let mut notes = Vec::new();
                // the returned count must equal the rendered length even
                // when the case itself fails
                if count != actual.len() {
                    passed = false;
                    notes.push(format!(
                        "count mismatch: returned {count}, rendered {}",
                        actual.len()
                    ));
                }
                let diff_out = if passed {
                    None
                } else if notes.is_empty() {
                    Some(diff::render_diff(&case.expected_output, &actual))
                } else {
                    Some(notes.join("\n"))
                };
                VerificationResult {
                    case_name: case.name.clone(),
                    spec_section: case.spec_section.clone(),
                    passed,
                    expected: case.expected_output.clone(),
                    actual,
                    diff: diff_out,
                }
            })
            .collect()
    }
}

/// Render one case, returning the output and the engine's character count.
fn execute_case(case: &FixtureCase) -> (String, usize) {
    let args: Vec<FmtArg> = case.args.iter().map(|a| a.as_fmt_arg()).collect();
    let mut out = Vec::new();
    let mut collect = |b: u8| out.push(b);
    let count = vfctprintf(Some(&mut collect), case.format.as_bytes(), &args);
    (String::from_utf8_lossy(&out).into_owned(), count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::FixtureArg;

    #[test]
    fn runner_passes_a_correct_case() {
        let fixture = FixtureSet::from_json(
            r#"{
                "version":"v1",
                "family":"printf/int",
                "cases":[
                    {"name":"dec","format":"%d","args":[{"int":41}],"expected_output":"41","spec_section":"ISO C11 7.21.6.1 d"}
                ]
            }"#,
        )
        .expect("valid fixture json");

        let results = TestRunner::new("smoke").run(&fixture);
        assert_eq!(results.len(), 1);
        assert!(results[0].passed);
        assert!(results[0].diff.is_none());
    }

    #[test]
    fn runner_reports_a_mismatch_with_diff() {
        let fixture = FixtureSet {
            version: "v1".into(),
            family: "printf/int".into(),
            cases: vec![FixtureCase {
                name: "wrong".into(),
                format: "%d".into(),
                args: vec![FixtureArg::Int(2)],
                expected_output: "3".into(),
                spec_section: "ISO C11 7.21.6.1 d".into(),
            }],
        };
        let results = TestRunner::new("smoke").run(&fixture);
        assert!(!results[0].passed);
        assert_eq!(results[0].actual, "2");
        assert!(results[0].diff.is_some());
    }
}
