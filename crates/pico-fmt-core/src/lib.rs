//! # pico-fmt-core
//!
//! Freestanding `printf`-style formatting engine.
//!
//! Parses a C-style format string, consumes a typed argument sequence in
//! format order, and streams the rendered characters through a caller-supplied
//! single-byte sink. The engine performs no heap allocation and keeps no
//! process-wide state, so any number of calls may run in parallel on distinct
//! sinks.
//!
//! Architecture:
//! - `sink` — sink adapter wrapping the output closure plus the running count
//! - `arg` — typed argument values and the single-use argument cursor
//! - `state` — per-directive state handed to conversion handlers
//! - `num` — integer conversion (bases 2/8/10/16, all framing)
//! - `float` — fixed and exponential floating-point conversion
//! - `table` — specifier dispatch table and custom-handler registration
//! - `printf` — format-string driver and the built-in handlers
//!
//! Error-shaped conditions (unknown specifier, float buffer exhaustion,
//! `%f` magnitude ceiling) render as inline `%!(...)` diagnostics through the
//! sink; the return value is always the submitted character count.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod arg;
#[cfg(feature = "float")]
pub mod float;
pub mod num;
pub mod printf;
pub mod sink;
pub mod state;
pub mod table;

pub use arg::{FmtArg, FmtArgs};
#[cfg(feature = "float")]
pub use float::{DEFAULT_FLOAT_PRECISION, FTOA_BUFFER_SIZE, MAX_FLOAT};
pub use printf::{vfctprintf, vfctprintf_with};
pub use sink::FmtSink;
pub use state::{FmtFlags, FmtSize, FmtState};
pub use table::{FmtSpecifier, SpecTable};
