//! sarjournal - journal and sysstat side by side in one terminal.
//!
//! Usage:
//!   sarjournal                  # last 10 minutes, CPU table
//!   sarjournal -t -2h -m mem    # two hours ago, memory table
//!   sarjournal -t 07:00 -p 3    # today 07:00, errors and worse only
//!   sarjournal --log-file /tmp/sarjournal.log -vv

use std::fs::OpenOptions;
use std::process;
use std::sync::Mutex;
use std::time::Duration;

use clap::Parser;
use tikv_jemallocator::Jemalloc;
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

use sarjournal::collector::{MetricCatalog, SystemRunner};
use sarjournal::config::{
    AppConfig, DEFAULT_JOURNAL_PROGRAM, DEFAULT_LOG_LIMIT, DEFAULT_SAMPLER_PROGRAM,
};
use sarjournal::model::Priority;
use sarjournal::orchestrator::ReloadOrchestrator;
use sarjournal::tui::App;
use sarjournal::util::{SystemClock, parse_time};

#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

/// How often the event thread wakes up without input.
const TICK_RATE: Duration = Duration::from_millis(250);

/// Correlate journal entries with sysstat samples over a shared time window.
#[derive(Parser)]
#[command(name = "sarjournal", version, about)]
struct Args {
    /// Window start (local time). Supported formats:
    /// - Date and time: 2026-02-07 17:00[:00]
    /// - ISO 8601: 2026-02-07T17:00:00
    /// - Unix timestamp: 1738944000
    /// - Relative: -1h, -30m, -2d
    /// - Time only (today): 07:00
    #[arg(short = 't', long = "time", value_name = "TIME", allow_hyphen_values = true)]
    time: Option<String>,

    /// Initial journal severity ceiling (0 = emerg only, 7 = everything).
    #[arg(short = 'p', long, default_value_t = 7, value_parser = clap::value_parser!(u8).range(0..=7))]
    priority: u8,

    /// Initial metric family (cpu, load, mem, disk, net, edev, etcp).
    #[arg(short = 'm', long, default_value = MetricCatalog::DEFAULT_KEY)]
    metric: String,

    /// Maximum number of journal lines rendered per reload.
    #[arg(long, default_value_t = DEFAULT_LOG_LIMIT)]
    log_limit: usize,

    /// journalctl executable.
    #[arg(long, env = "SARJOURNAL_JOURNALCTL", default_value = DEFAULT_JOURNAL_PROGRAM)]
    journalctl: String,

    /// sadf executable.
    #[arg(long, env = "SARJOURNAL_SADF", default_value = DEFAULT_SAMPLER_PROGRAM)]
    sadf: String,

    /// Write diagnostics to this file. Nothing is logged without it.
    #[arg(long, env = "SARJOURNAL_LOG", value_name = "PATH")]
    log_file: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Log errors only.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() {
    let args = Args::parse();

    if let Some(path) = &args.log_file
        && let Err(e) = init_logging(path, args.verbose, args.quiet)
    {
        eprintln!("Error: cannot open log file {}: {}", path, e);
        process::exit(1);
    }

    let config = match build_config(args) {
        Ok(config) => config,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            process::exit(1);
        }
    };

    info!(
        metric = config.metric.key,
        priority = config.priority.level(),
        start = ?config.start,
        "starting dashboard"
    );

    let orchestrator = ReloadOrchestrator::new(SystemRunner::new(), SystemClock, &config);
    if let Err(e) = App::new(orchestrator).run(TICK_RATE) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn build_config(args: Args) -> Result<AppConfig, String> {
    let start = match args.time.as_deref() {
        Some(input) => Some(parse_time(input).map_err(|e| e.to_string())?),
        None => None,
    };

    let metric = MetricCatalog::lookup(&args.metric).ok_or_else(|| {
        format!(
            "unknown metric '{}' (expected one of: {})",
            args.metric,
            MetricCatalog::keys()
        )
    })?;

    Ok(AppConfig {
        start,
        priority: Priority::new(args.priority),
        metric,
        log_limit: args.log_limit,
        journal_program: args.journalctl,
        sampler_program: args.sadf,
    })
}

/// Installs a file-backed subscriber. The terminal belongs to the TUI.
fn init_logging(path: &str, verbose: u8, quiet: bool) -> std::io::Result<()> {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = format!("sarjournal={}", level).parse() {
        filter = filter.add_directive(directive);
    }

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["sarjournal"]);
        let config = build_config(args).unwrap();
        assert!(config.start.is_none());
        assert_eq!(config.metric.key, "cpu");
        assert!(config.priority.is_unfiltered());
        assert_eq!(config.log_limit, 2000);
    }

    #[test]
    fn test_flags_are_applied() {
        let args = Args::parse_from([
            "sarjournal",
            "-t",
            "2026-02-07 17:00",
            "-p",
            "3",
            "-m",
            "mem",
            "--journalctl",
            "/opt/bin/journalctl",
        ]);
        let config = build_config(args).unwrap();
        assert_eq!(
            config.start.unwrap().format("%Y-%m-%d %H:%M").to_string(),
            "2026-02-07 17:00"
        );
        assert_eq!(config.priority.level(), 3);
        assert_eq!(config.metric.key, "mem");
        assert_eq!(config.journal_program, "/opt/bin/journalctl");
    }

    #[test]
    fn test_relative_time_is_accepted() {
        let args = Args::parse_from(["sarjournal", "-t", "-2h"]);
        assert!(build_config(args).unwrap().start.is_some());
    }

    #[test]
    fn test_invalid_time_is_rejected() {
        let args = Args::parse_from(["sarjournal", "--time", "yesterday"]);
        let err = build_config(args).unwrap_err();
        assert!(err.contains("yesterday"));
    }

    #[test]
    fn test_unknown_metric_is_rejected() {
        let args = Args::parse_from(["sarjournal", "-m", "gpu"]);
        let err = build_config(args).unwrap_err();
        assert!(err.contains("gpu"));
        assert!(err.contains("etcp"));
    }

    #[test]
    fn test_priority_out_of_range_is_a_usage_error() {
        assert!(Args::try_parse_from(["sarjournal", "-p", "9"]).is_err());
    }
}
