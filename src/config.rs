//! Runtime configuration.
//!
//! `AppConfig` holds what the command line provides; `QueryConfig` is the
//! mutable query state derived from it and owned by the orchestrator.

use chrono::NaiveDateTime;

use crate::collector::{MetricCatalog, MetricPreset};
use crate::model::{Priority, TimeWindow, nominal_span};

/// Default journal program.
pub const DEFAULT_JOURNAL_PROGRAM: &str = "journalctl";
/// Default sampler program.
pub const DEFAULT_SAMPLER_PROGRAM: &str = "sadf";
/// Default cap on rendered journal lines.
pub const DEFAULT_LOG_LIMIT: usize = 2000;

/// Startup configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Window start. `None` means one nominal span before now.
    pub start: Option<NaiveDateTime>,
    pub priority: Priority,
    pub metric: &'static MetricPreset,
    pub log_limit: usize,
    pub journal_program: String,
    pub sampler_program: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            start: None,
            priority: Priority::ALL,
            metric: MetricCatalog::default_preset(),
            log_limit: DEFAULT_LOG_LIMIT,
            journal_program: DEFAULT_JOURNAL_PROGRAM.to_string(),
            sampler_program: DEFAULT_SAMPLER_PROGRAM.to_string(),
        }
    }
}

impl AppConfig {
    /// Builds the initial query state, clamping the window to `now`.
    pub fn query(&self, now: NaiveDateTime) -> QueryConfig {
        let start = self.start.unwrap_or(now - nominal_span());
        QueryConfig {
            window: TimeWindow::starting_at(start, now),
            priority: self.priority,
            metric: self.metric,
        }
    }
}

/// Query state shared by both panes for one reload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueryConfig {
    pub window: TimeWindow,
    pub priority: Priority,
    pub metric: &'static MetricPreset,
}
