//! Data model shared by the collectors, the orchestrator and the TUI.

mod priority;
mod record;
mod table;
mod window;

pub use priority::{Priority, SEVERITY_NAMES, severity_name};
pub use record::{EMPTY_MESSAGE, LogLine, LogRecord};
pub use table::{MAX_TABLE_ROWS, StatTable};
pub use window::{NOMINAL_SPAN_MINUTES, ShiftDirection, TimeWindow, nominal_span};
