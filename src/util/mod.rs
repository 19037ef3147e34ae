//! Utility modules for sarjournal.

mod clock;
mod time_parser;

pub use clock::{Clock, FixedClock, SystemClock};
pub use time_parser::{TimeParseError, parse_time, parse_time_with_base};
