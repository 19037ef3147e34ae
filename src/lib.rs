//! sarjournal - journal and sysstat correlation dashboard.
//!
//! This library provides the pieces used by the `sarjournal` binary:
//! - `model` - time window, severity filter, log records, stat tables
//! - `collector` - subprocess seam plus the journal and sampler sources
//! - `orchestrator` - reload loop with adaptive window search
//! - `tui` - interactive terminal viewer

pub mod collector;
pub mod config;
pub mod model;
pub mod orchestrator;
pub mod tui;
pub mod util;
