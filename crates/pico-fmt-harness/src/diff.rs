//! Diff rendering for fixture comparison.

/// Render a text diff between expected and actual output.
#[must_use]
pub fn render_diff(expected: &str, actual: &str) -> String {
    if expected == actual {
        return String::from("[identical]");
    }

    let mut out = String::new();
    out.push_str("--- expected\n");
    out.push_str("+++ actual\n");
    out.push_str(&format!("-{expected:?}\n"));
    out.push_str(&format!("+{actual:?}\n"));

    // column of the first difference, for narrow padding mistakes
    if let Some(col) = expected
        .bytes()
        .zip(actual.bytes())
        .position(|(e, a)| e != a)
    {
        out.push_str(&format!("@@ first difference at column {col} @@\n"));
    } else {
        out.push_str(&format!(
            "@@ length {} vs {} @@\n",
            expected.len(),
            actual.len()
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_inputs_render_identical() {
        assert_eq!(render_diff("abc", "abc"), "[identical]");
    }

    #[test]
    fn diff_points_at_first_column() {
        let diff = render_diff("  42", " 42");
        assert!(diff.contains("first difference at column 1"));
    }

    #[test]
    fn diff_reports_length_for_prefix_mismatch() {
        let diff = render_diff("42", "42 ");
        assert!(diff.contains("length 2 vs 3"));
    }
}
