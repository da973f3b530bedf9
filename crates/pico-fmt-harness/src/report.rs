//! Report generation for conformance results.

use serde::{Deserialize, Serialize};

use crate::verify::VerificationSummary;

/// A conformance report for one harness run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConformanceReport {
    /// Report title.
    pub title: String,
    /// Fixture family the run covered.
    pub family: String,
    /// Verification summary.
    pub summary: VerificationSummary,
}

impl ConformanceReport {
    /// Render the report as markdown.
    #[must_use]
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("# {}\n\n", self.title));
        out.push_str(&format!("- Family: {}\n", self.family));
        out.push_str(&format!("- Total: {}\n", self.summary.total));
        out.push_str(&format!("- Passed: {}\n", self.summary.passed));
        out.push_str(&format!("- Failed: {}\n\n", self.summary.failed));

        out.push_str("| Case | Section | Status |\n");
        out.push_str("|------|---------|--------|\n");
        for r in &self.summary.results {
            let status = if r.passed { "PASS" } else { "FAIL" };
            out.push_str(&format!(
                "| {} | {} | {} |\n",
                r.case_name, r.spec_section, status
            ));
        }

        let failures: Vec<_> = self.summary.results.iter().filter(|r| !r.passed).collect();
        if !failures.is_empty() {
            out.push_str("\n## Failures\n");
            for r in failures {
                out.push_str(&format!("\n### {}\n\n", r.case_name));
                if let Some(diff) = &r.diff {
                    out.push_str("```\n");
                    out.push_str(diff);
                    out.push_str("\n```\n");
                }
            }
        }
        out
    }

    /// Render the report as JSON.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verify::VerificationResult;

    #[test]
    fn markdown_report_lists_cases() {
        let report = ConformanceReport {
            title: "pico-fmt conformance".into(),
            family: "printf/format-engine".into(),
            summary: VerificationSummary::from_results(vec![VerificationResult {
                case_name: "decimal_basic".into(),
                spec_section: "ISO C11 7.21.6.1 d".into(),
                passed: true,
                expected: "42".into(),
                actual: "42".into(),
                diff: None,
            }]),
        };
        let md = report.to_markdown();
        assert!(md.contains("# pico-fmt conformance"));
        assert!(md.contains("| decimal_basic | ISO C11 7.21.6.1 d | PASS |"));
        assert!(!md.contains("## Failures"));
    }
}
