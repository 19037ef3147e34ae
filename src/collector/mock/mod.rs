//! Mock command runner for testing.
//!
//! This module provides `MockRunner` and canned tool output for testing
//! the sources and the orchestrator without `journalctl` or `sadf`.

mod runner;
pub mod scenarios;

pub use runner::{MockResponse, MockRunner};
