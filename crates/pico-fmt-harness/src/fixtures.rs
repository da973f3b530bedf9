//! Fixture loading and management.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use pico_fmt_core::FmtArg;

/// Errors from fixture file handling.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid fixture JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// One typed argument in a fixture case.
///
/// Mirrors the engine's argument enum with owned strings so cases can live
/// in JSON files. NaN/infinity floats cannot round-trip through JSON; those
/// behaviors are covered by the engine's unit tests instead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum FixtureArg {
    Int(i64),
    Uint(u64),
    Float(f64),
    Char(u8),
    Str(String),
    Ptr(usize),
}

impl FixtureArg {
    /// Borrow as the engine's argument type.
    pub fn as_fmt_arg(&self) -> FmtArg<'_> {
        match self {
            FixtureArg::Int(v) => FmtArg::Int(*v),
            FixtureArg::Uint(v) => FmtArg::Uint(*v),
            FixtureArg::Float(v) => FmtArg::Float(*v),
            FixtureArg::Char(c) => FmtArg::Char(*c),
            FixtureArg::Str(s) => FmtArg::Str(s.as_bytes()),
            FixtureArg::Ptr(p) => FmtArg::Ptr(*p),
        }
    }
}

/// A single fixture test case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureCase {
    /// Case identifier.
    pub name: String,
    /// The format string under test.
    pub format: String,
    /// Arguments consumed by the format.
    pub args: Vec<FixtureArg>,
    /// Expected rendered output.
    pub expected_output: String,
    /// C standard section (or engine extension) the case traces to.
    pub spec_section: String,
}

/// A collection of fixture cases.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureSet {
    /// Schema version.
    pub version: String,
    /// Case family name.
    pub family: String,
    /// Individual test cases.
    pub cases: Vec<FixtureCase>,
}

impl FixtureSet {
    /// Load a fixture set from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize the fixture set to pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load a fixture set from a file path.
    pub fn from_file(path: &Path) -> Result<Self, HarnessError> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&content)?)
    }

    /// Write the fixture set to a file path.
    pub fn to_file(&self, path: &Path) -> Result<(), HarnessError> {
        let json = self.to_json()?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_set_json_roundtrip() {
        let set = FixtureSet {
            version: "v1".into(),
            family: "printf/int".into(),
            cases: vec![FixtureCase {
                name: "basic_decimal".into(),
                format: "%d".into(),
                args: vec![FixtureArg::Int(42)],
                expected_output: "42".into(),
                spec_section: "ISO C11 7.21.6.1 d".into(),
            }],
        };
        let json = set.to_json().expect("serializes");
        let loaded = FixtureSet::from_json(&json).expect("parses");
        assert_eq!(loaded.cases.len(), 1);
        assert_eq!(loaded.cases[0].args, vec![FixtureArg::Int(42)]);
    }

    #[test]
    fn fixture_arg_borrows_as_engine_arg() {
        let arg = FixtureArg::Str("hello".into());
        assert_eq!(arg.as_fmt_arg(), FmtArg::Str(b"hello"));
    }
}
