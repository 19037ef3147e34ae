//! Metric source backed by sysstat's `sadf -d`.

use chrono::{Duration, NaiveDate};
use tracing::{debug, warn};

use crate::model::{StatTable, TimeWindow};

use super::catalog::MetricPreset;
use super::traits::CommandRunner;

/// Minutes subtracted from the window start before asking the sampler.
pub const SAMPLER_START_PAD_MINUTES: i64 = 10;
/// Minutes added to the window end before asking the sampler.
pub const SAMPLER_END_PAD_MINUTES: i64 = 1;

const SAMPLER_TIME_FORMAT: &str = "%H:%M:%S";

/// Result of one sampler query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricFetch {
    pub table: StatTable,
    /// `true` when at least one row came back, or when the sampler failed.
    /// A failure must not send the orchestrator searching.
    pub had_data: bool,
}

/// Queries the sampler for one metric family over a window.
#[derive(Debug, Clone)]
pub struct MetricSource {
    program: String,
}

impl MetricSource {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Days between `today` and the window's start date. `0` means today.
    pub fn day_offset(window: &TimeWindow, today: NaiveDate) -> i64 {
        (today - window.start().date()).num_days().max(0)
    }

    /// Builds the `sadf` argument list.
    ///
    /// The window is widened on both sides to tolerate sampling intervals
    /// and boundary rounding in the sampler.
    pub fn command_args(
        &self,
        window: &TimeWindow,
        preset: &MetricPreset,
        today: NaiveDate,
    ) -> Vec<String> {
        let start = window.start() - Duration::minutes(SAMPLER_START_PAD_MINUTES);
        let end = window.end() + Duration::minutes(SAMPLER_END_PAD_MINUTES);

        let mut args = vec![
            "-d".to_string(),
            format!("-{}", Self::day_offset(window, today)),
            "-s".to_string(),
            start.format(SAMPLER_TIME_FORMAT).to_string(),
            "-e".to_string(),
            end.format(SAMPLER_TIME_FORMAT).to_string(),
            "--".to_string(),
        ];
        args.extend(preset.sampler_options.iter().map(|s| s.to_string()));
        args
    }

    /// Fetches the table for `preset` over `window`.
    pub fn fetch(
        &self,
        runner: &dyn CommandRunner,
        window: &TimeWindow,
        preset: &MetricPreset,
        today: NaiveDate,
    ) -> MetricFetch {
        let args = self.command_args(window, preset, today);
        match runner.run(&self.program, &args) {
            Ok(output) => {
                let table = StatTable::parse_delimited(&output);
                debug!(
                    metric = preset.key,
                    rows = table.rows.len(),
                    columns = table.width(),
                    "sampler refreshed"
                );
                MetricFetch {
                    had_data: table.has_rows(),
                    table,
                }
            }
            Err(e) => {
                warn!(metric = preset.key, error = %e, "sampler query failed");
                MetricFetch {
                    table: StatTable::message("Error", e.to_string()),
                    had_data: true,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::MetricCatalog;
    use crate::collector::mock::{MockResponse, MockRunner, scenarios};
    use chrono::NaiveDateTime;

    fn at(day: u32, h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, day)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
    }

    #[test]
    fn test_args_are_padded_and_dated() {
        let window = TimeWindow::starting_at(at(12, 8, 0), at(14, 9, 0));
        let preset = MetricCatalog::lookup("net").unwrap();
        let args = MetricSource::new("sadf").command_args(&window, preset, today());
        assert_eq!(
            args,
            vec![
                "-d", "-2", "-s", "07:50:00", "-e", "08:11:00", "--", "-n", "DEV"
            ]
        );
    }

    #[test]
    fn test_day_offset_today() {
        let window = TimeWindow::starting_at(at(14, 8, 0), at(14, 9, 0));
        assert_eq!(MetricSource::day_offset(&window, today()), 0);
    }

    #[test]
    fn test_rows_mean_data() {
        let runner = MockRunner::new();
        runner.push("sadf", MockResponse::Output(scenarios::sadf_mem(3)));
        let window = TimeWindow::starting_at(at(14, 11, 0), at(14, 12, 0));
        let preset = MetricCatalog::lookup("mem").unwrap();

        let fetch = MetricSource::new("sadf").fetch(&runner, &window, preset, today());
        assert!(fetch.had_data);
        assert_eq!(fetch.table.rows.len(), 3);
        assert_eq!(fetch.table.columns[0], "hostname");
    }

    #[test]
    fn test_header_only_is_no_data() {
        let runner = MockRunner::new();
        runner.push("sadf", MockResponse::Output(scenarios::sadf_header_only()));
        let window = TimeWindow::starting_at(at(14, 11, 0), at(14, 12, 0));
        let preset = MetricCatalog::lookup("mem").unwrap();

        let fetch = MetricSource::new("sadf").fetch(&runner, &window, preset, today());
        assert!(!fetch.had_data);
        assert!(!fetch.table.columns.is_empty());
    }

    #[test]
    fn test_failure_reports_data_with_error_table() {
        let runner = MockRunner::new();
        runner.push("sadf", MockResponse::Exit(1, "Cannot open /var/log/sa/sa12".into()));
        let window = TimeWindow::starting_at(at(12, 11, 0), at(14, 12, 0));
        let preset = MetricCatalog::lookup("cpu").unwrap();

        let fetch = MetricSource::new("sadf").fetch(&runner, &window, preset, today());
        assert!(fetch.had_data);
        assert_eq!(fetch.table.columns, vec!["Error"]);
        assert_eq!(
            fetch.table.rows,
            vec![vec![
                "sadf exited with status 1: Cannot open /var/log/sa/sa12".to_string()
            ]]
        );
    }
}
