//! Syslog severity levels and the journal severity ceiling.

/// Severity names indexed by numeric level (0 = most severe).
pub const SEVERITY_NAMES: [&str; 8] = [
    "EMERG", "ALERT", "CRIT", "ERR", "WARNING", "NOTICE", "INFO", "DEBUG",
];

/// Returns the display name for a numeric severity, `UNK` when out of range.
pub fn severity_name(level: i64) -> &'static str {
    usize::try_from(level)
        .ok()
        .and_then(|i| SEVERITY_NAMES.get(i).copied())
        .unwrap_or("UNK")
}

/// Maximum severity shown in the journal pane.
///
/// A record passes when its level is `<=` the ceiling. The least severe
/// ceiling (7, debug) means no filtering at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Priority(u8);

impl Priority {
    pub const ALL: Priority = Priority(7);

    /// Creates a ceiling, clamping `level` into `0..=7`.
    pub fn new(level: u8) -> Self {
        Priority(level.min(Self::ALL.0))
    }

    pub fn level(&self) -> u8 {
        self.0
    }

    /// Returns `true` when no ceiling should be passed to the journal.
    pub fn is_unfiltered(&self) -> bool {
        *self == Self::ALL
    }

    /// Range argument for `journalctl -p`, or `None` when unfiltered.
    pub fn journal_range(&self) -> Option<String> {
        (!self.is_unfiltered()).then(|| format!("0..{}", self.0))
    }

    /// Display name of the ceiling level.
    pub fn name(&self) -> &'static str {
        SEVERITY_NAMES[self.0 as usize]
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self::ALL
    }
}
