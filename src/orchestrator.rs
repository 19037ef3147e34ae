//! Reload orchestration and adaptive window search.
//!
//! A reload refreshes the journal pane, clamps the window to now, then asks
//! the sampler for data. When the sampler comes back empty, the window walks
//! one nominal span at a time in the last direction the user moved, until a
//! populated window is found or the iteration budget runs out.

use chrono::{Duration, NaiveDateTime};
use tracing::{debug, info, warn};

use crate::collector::{CommandRunner, LogSource, MetricCatalog, MetricSource};
use crate::config::{AppConfig, QueryConfig};
use crate::model::{LogLine, Priority, StatTable};
use crate::util::Clock;

/// Maximum number of window moves per search.
pub const MAX_SEARCH_ITERATIONS: usize = 100;

/// How the last metric search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchOutcome {
    /// The final sampler query reported data (or failed).
    pub found: bool,
    /// Number of window moves performed after the first query.
    pub iterations: usize,
}

/// Owns the query state and both panes' rendered content.
pub struct ReloadOrchestrator<R: CommandRunner, C: Clock> {
    runner: R,
    clock: C,
    query: QueryConfig,
    log_source: LogSource,
    metric_source: MetricSource,
    log_lines: Vec<LogLine>,
    table: StatTable,
    last_search: SearchOutcome,
}

impl<R: CommandRunner, C: Clock> ReloadOrchestrator<R, C> {
    /// Creates an orchestrator. No tool is run until the first reload.
    pub fn new(runner: R, clock: C, config: &AppConfig) -> Self {
        let query = config.query(clock.now());
        Self {
            runner,
            clock,
            query,
            log_source: LogSource::new(&config.journal_program, config.log_limit),
            metric_source: MetricSource::new(&config.sampler_program),
            log_lines: Vec::new(),
            table: StatTable::default(),
            last_search: SearchOutcome::default(),
        }
    }

    /// Full reload: journal first, then the metric search.
    pub fn reload(&mut self) -> SearchOutcome {
        self.refresh_logs();
        self.refresh_metrics()
    }

    /// Sets the journal severity ceiling and refreshes the journal pane.
    pub fn set_priority(&mut self, level: u8) {
        self.query.priority = Priority::new(level);
        self.refresh_logs();
    }

    /// Switches the metric family and reruns the metric search.
    ///
    /// Returns `false` and changes nothing when `key` is not in the catalog.
    pub fn set_metric(&mut self, key: &str) -> bool {
        let Some(preset) = MetricCatalog::lookup(key) else {
            debug!(key, "ignoring unknown metric");
            return false;
        };
        self.query.metric = preset;
        self.refresh_metrics();
        true
    }

    /// Moves the window by `minutes` and reloads.
    ///
    /// Returns `false` when a forward move was refused because the window
    /// already starts at now; nothing is reloaded in that case.
    pub fn shift_time(&mut self, minutes: i64) -> bool {
        let now = self.clock.now();
        if !self.query.window.shift(Duration::minutes(minutes), now) {
            debug!(minutes, "window already at now, shift ignored");
            return false;
        }
        self.reload();
        true
    }

    /// Places a nominal window at `start` and reloads. The remembered shift
    /// direction is kept.
    pub fn jump_to(&mut self, start: NaiveDateTime) {
        let now = self.clock.now();
        self.query.window.move_to(start, now);
        self.reload();
    }

    pub fn rendered_log_lines(&self) -> Vec<&str> {
        self.log_lines.iter().map(|l| l.text.as_str()).collect()
    }

    pub fn log_lines(&self) -> &[LogLine] {
        &self.log_lines
    }

    pub fn rendered_table(&self) -> (&[String], &[Vec<String>]) {
        (&self.table.columns, &self.table.rows)
    }

    pub fn table(&self) -> &StatTable {
        &self.table
    }

    pub fn current_window(&self) -> (NaiveDateTime, NaiveDateTime) {
        (self.query.window.start(), self.query.window.end())
    }

    pub fn query(&self) -> &QueryConfig {
        &self.query
    }

    pub fn last_search(&self) -> SearchOutcome {
        self.last_search
    }

    fn refresh_logs(&mut self) {
        self.log_lines =
            self.log_source
                .fetch(&self.runner, &self.query.window, self.query.priority);
    }

    fn refresh_metrics(&mut self) -> SearchOutcome {
        let now = self.clock.now();
        self.query.window.clamp_to_now(now);

        let mut found = self.query_metrics();
        let mut iterations = 0;
        while !found && iterations < MAX_SEARCH_ITERATIONS {
            iterations += 1;
            self.query.window.step(self.clock.now());
            debug!(
                iteration = iterations,
                start = %self.query.window.start(),
                direction = self.query.window.direction().label(),
                "no samples, moving window"
            );
            found = self.query_metrics();
        }

        if found && iterations > 0 {
            info!(
                iterations,
                start = %self.query.window.start(),
                "found samples after moving window"
            );
        } else if !found {
            warn!(
                iterations,
                metric = self.query.metric.key,
                "no samples found, giving up"
            );
        }

        self.last_search = SearchOutcome { found, iterations };
        self.last_search
    }

    fn query_metrics(&mut self) -> bool {
        let today = self.clock.now().date();
        let fetch = self.metric_source.fetch(
            &self.runner,
            &self.query.window,
            self.query.metric,
            today,
        );
        self.table = fetch.table;
        fetch.had_data
    }
}
