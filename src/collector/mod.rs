//! Collectors for journal entries and sysstat samples.
//!
//! Both sources shell out to local tools through the `CommandRunner` trait,
//! so tests can script the tools' output instead of needing them installed.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                   ReloadOrchestrator                     │
//! │  ┌────────────────────┐      ┌────────────────────────┐  │
//! │  │     LogSource      │      │     MetricSource       │  │
//! │  │  - journalctl -o   │      │  - sadf -d -- <opts>   │  │
//! │  │    json            │      │  - MetricCatalog       │  │
//! │  └─────────┬──────────┘      └───────────┬────────────┘  │
//! │            └──────────────┬──────────────┘               │
//! │                    ┌──────▼────────┐                     │
//! │                    │ CommandRunner │ (trait)             │
//! │                    └──────┬────────┘                     │
//! └───────────────────────────┼──────────────────────────────┘
//!                    ┌────────┴────────┐
//!             ┌──────▼──────┐   ┌──────▼──────┐
//!             │ SystemRunner│   │ MockRunner  │
//!             │ (processes) │   │ (Testing)   │
//!             └─────────────┘   └─────────────┘
//! ```

mod catalog;
mod journal;
pub mod mock;
mod sampler;
pub mod traits;

pub use catalog::{METRIC_CATALOG, MetricCatalog, MetricPreset};
pub use journal::{LogSource, render_journal_output};
pub use mock::{MockResponse, MockRunner};
pub use sampler::{MetricFetch, MetricSource, SAMPLER_END_PAD_MINUTES, SAMPLER_START_PAD_MINUTES};
pub use traits::{CollectError, CommandRunner, SystemRunner};
