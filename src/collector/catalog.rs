//! Static catalog of sampler metric families.

/// One metric family the stats pane can show.
#[derive(Debug, PartialEq, Eq)]
pub struct MetricPreset {
    /// Identifier used on the command line and by `set_metric`.
    pub key: &'static str,
    /// Title shown in the stats pane.
    pub label: &'static str,
    /// Key that selects this metric in the TUI.
    pub hotkey: char,
    /// `sar` report options passed after `--`.
    pub sampler_options: &'static [&'static str],
    /// Columns worth highlighting. Every returned column is still shown.
    pub wanted_columns: &'static [&'static str],
}

impl MetricPreset {
    /// Returns `true` if `column` is one of the highlighted columns.
    pub fn wants(&self, column: &str) -> bool {
        self.wanted_columns.contains(&column)
    }
}

pub static METRIC_CATALOG: &[MetricPreset] = &[
    MetricPreset {
        key: "cpu",
        label: "CPU",
        hotkey: 'c',
        sampler_options: &["-u", "ALL"],
        wanted_columns: &["%user", "%system", "%iowait", "%idle"],
    },
    MetricPreset {
        key: "load",
        label: "Load",
        hotkey: 'l',
        sampler_options: &["-q"],
        wanted_columns: &["runq-sz", "ldavg-1", "ldavg-5"],
    },
    MetricPreset {
        key: "mem",
        label: "Memory",
        hotkey: 'm',
        sampler_options: &["-r"],
        wanted_columns: &["kbmemfree", "kbmemused", "%memused"],
    },
    MetricPreset {
        key: "disk",
        label: "Disk",
        hotkey: 'd',
        sampler_options: &["-b"],
        wanted_columns: &["tps", "rtps", "wtps"],
    },
    MetricPreset {
        key: "net",
        label: "Network",
        hotkey: 'n',
        sampler_options: &["-n", "DEV"],
        wanted_columns: &["IFACE", "rxpck/s", "txpck/s"],
    },
    MetricPreset {
        key: "edev",
        label: "Network errors",
        hotkey: 'E',
        sampler_options: &["-n", "EDEV"],
        wanted_columns: &[
            "rxerr/s", "txerr/s", "coll/s", "rxdrop/s", "txdrop/s", "txcarr/s", "rxcarr/s",
            "rxfram/s",
        ],
    },
    MetricPreset {
        key: "etcp",
        label: "TCP errors",
        hotkey: 'T',
        sampler_options: &["-n", "ETCP"],
        wanted_columns: &["atmptf/s", "estres/s", "retrseg/s", "isegerr/s", "orts/s"],
    },
];

/// Lookup helpers over [`METRIC_CATALOG`].
pub struct MetricCatalog;

impl MetricCatalog {
    /// Metric used when none is configured.
    pub const DEFAULT_KEY: &'static str = "cpu";

    pub fn all() -> &'static [MetricPreset] {
        METRIC_CATALOG
    }

    pub fn lookup(key: &str) -> Option<&'static MetricPreset> {
        METRIC_CATALOG.iter().find(|p| p.key == key)
    }

    pub fn by_hotkey(hotkey: char) -> Option<&'static MetricPreset> {
        METRIC_CATALOG.iter().find(|p| p.hotkey == hotkey)
    }

    pub fn default_preset() -> &'static MetricPreset {
        &METRIC_CATALOG[0]
    }

    /// Comma-separated list of known keys, for error messages.
    pub fn keys() -> String {
        METRIC_CATALOG
            .iter()
            .map(|p| p.key)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let mem = MetricCatalog::lookup("mem").unwrap();
        assert_eq!(mem.sampler_options, &["-r"]);
        assert!(mem.wants("%memused"));
        assert!(!mem.wants("kbcached"));
        assert!(MetricCatalog::lookup("gpu").is_none());
    }

    #[test]
    fn test_keys_and_hotkeys_are_unique() {
        for (i, a) in METRIC_CATALOG.iter().enumerate() {
            for b in &METRIC_CATALOG[i + 1..] {
                assert_ne!(a.key, b.key);
                assert_ne!(a.hotkey, b.hotkey);
            }
        }
    }

    #[test]
    fn test_default_is_cpu() {
        assert_eq!(
            MetricCatalog::default_preset().key,
            MetricCatalog::DEFAULT_KEY
        );
        assert_eq!(MetricCatalog::by_hotkey('T').unwrap().key, "etcp");
    }
}
