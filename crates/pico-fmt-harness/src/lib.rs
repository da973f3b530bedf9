//! Conformance testing harness for the pico-fmt engine.
//!
//! This crate provides:
//! - Fixture model: format/argument/expected-output cases as JSON
//! - Curated corpus: the authored reference cases (from C printf behavior)
//! - Runner: execute fixture cases against the engine
//! - Verification: per-case results and aggregate summary
//! - Report generation: human-readable markdown + machine-readable JSON

#![forbid(unsafe_code)]

pub mod corpus;
pub mod diff;
pub mod fixtures;
pub mod report;
pub mod runner;
pub mod verify;

pub use fixtures::{FixtureArg, FixtureCase, FixtureSet, HarnessError};
pub use report::ConformanceReport;
pub use runner::TestRunner;
pub use verify::{VerificationResult, VerificationSummary};
