//! Canned tool output resembling real `journalctl` and `sadf` runs.

/// `journalctl -o json` export with mixed severities, a multi-line message,
/// an empty message and a non-JSON trailer.
pub fn journal_mixed() -> String {
    [
        r#"{"__REALTIME_TIMESTAMP":"1773496800000000","PRIORITY":"6","SYSLOG_IDENTIFIER":"systemd","MESSAGE":"Started Daily apt upgrade."}"#,
        r#"{"__REALTIME_TIMESTAMP":"1773496830000000","PRIORITY":"3","SYSLOG_IDENTIFIER":"kernel","MESSAGE":"EXT4-fs error (device sda1)\nremounting read-only\nsee dmesg"}"#,
        r#"{"__REALTIME_TIMESTAMP":"1773496860000000","PRIORITY":"4","MESSAGE":null}"#,
        r#"{"__REALTIME_TIMESTAMP":"1773496890000000","PRIORITY":"7","MESSAGE":"debug chatter"}"#,
        "-- Boot 3c1f2a --",
    ]
    .join("\n")
        + "\n"
}

/// `sadf -d -- -r` output with a header and `rows` samples.
pub fn sadf_mem(rows: usize) -> String {
    let mut out = String::from(
        "# hostname;interval;timestamp;kbmemfree;kbavail;kbmemused;%memused;kbbuffers;kbcached\n",
    );
    for i in 0..rows {
        out.push_str(&format!(
            "host;600;2026-03-14 11:{:02}:00 UTC;{};2310020;1590120;40.{:02};10220;900120\n",
            (i * 10) % 60,
            812_344 + i,
            i % 100
        ));
    }
    out
}

/// `sadf -d -- -u ALL` output with a header and `rows` samples.
pub fn sadf_cpu(rows: usize) -> String {
    let mut out = String::from(
        "# hostname;interval;timestamp;CPU;%user;%nice;%system;%iowait;%steal;%idle\n",
    );
    for i in 0..rows {
        out.push_str(&format!(
            "host;600;2026-03-14 11:{:02}:00 UTC;-1;3.{:02};0.00;1.20;0.40;0.00;95.00\n",
            (i * 10) % 60,
            i % 100
        ));
    }
    out
}

/// Header line only: the sampler had no records in the requested range.
pub fn sadf_header_only() -> String {
    sadf_mem(0)
}
