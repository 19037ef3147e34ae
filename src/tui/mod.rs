//! Terminal dashboard.
//!
//! Two stacked panes share one time window: the sampler table on top and
//! the journal below. All data comes from [`ReloadOrchestrator`]; this module
//! only maps keys to orchestrator calls and draws what it holds.
//!
//! [`ReloadOrchestrator`]: crate::orchestrator::ReloadOrchestrator

mod app;
mod event;
mod input;
mod render;
pub(crate) mod state;
pub(crate) mod style;
mod widgets;

pub use app::App;
pub use state::{AppState, Focus, InputMode, PopupState};
