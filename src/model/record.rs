//! Journal records decoded from `journalctl -o json` output.

use chrono::{DateTime, Local, TimeZone};
use serde::Deserialize;
use serde_json::Value;

use super::priority::severity_name;

/// Placeholder rendered for records without message text.
pub const EMPTY_MESSAGE: &str = "(empty message)";

/// Severity assumed when a record carries none or an unparsable one.
const DEFAULT_SEVERITY: i64 = 6;

/// Raw journal export fields we care about.
#[derive(Debug, Deserialize)]
struct JournalEntry {
    #[serde(rename = "MESSAGE", default)]
    message: Option<Value>,
    #[serde(rename = "__REALTIME_TIMESTAMP", default)]
    realtime: Option<Value>,
    #[serde(rename = "PRIORITY", default)]
    priority: Option<Value>,
}

/// One decoded journal record.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub timestamp: Option<DateTime<Local>>,
    pub severity: i64,
    /// Message split into physical lines. Empty when the record had no text.
    pub message: Vec<String>,
}

/// One display line of the journal pane.
#[derive(Debug, Clone, PartialEq)]
pub struct LogLine {
    pub text: String,
    /// Severity of the record the line came from. `None` for pass-through
    /// and error lines.
    pub severity: Option<i64>,
}

impl LogLine {
    /// A line that did not come from a decoded record.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: None,
        }
    }
}

impl LogRecord {
    /// Decodes one line of JSON export. Returns `None` if the line is not a
    /// JSON object.
    pub fn from_json_line(line: &str) -> Option<Self> {
        let entry: JournalEntry = serde_json::from_str(line).ok()?;

        let text = entry.message.as_ref().map(message_text).unwrap_or_default();
        let message = text.lines().map(str::to_string).collect();

        Some(Self {
            timestamp: entry.realtime.as_ref().and_then(realtime_to_local),
            severity: entry
                .priority
                .as_ref()
                .and_then(value_to_i64)
                .unwrap_or(DEFAULT_SEVERITY),
            message,
        })
    }

    /// `[HH:MM:SS] [NAME] ` or `[NAME] ` when the timestamp is unknown.
    pub fn prefix(&self) -> String {
        let name = severity_name(self.severity);
        match self.timestamp {
            Some(ts) => format!("[{}] [{}] ", ts.format("%H:%M:%S"), name),
            None => format!("[{}] ", name),
        }
    }

    /// Renders the record. The first line carries the prefix, continuation
    /// lines are indented by the prefix width.
    pub fn render(&self) -> Vec<LogLine> {
        let prefix = self.prefix();
        let severity = Some(self.severity);

        if self.message.is_empty() {
            return vec![LogLine {
                text: format!("{prefix}{EMPTY_MESSAGE}"),
                severity,
            }];
        }

        let indent = " ".repeat(prefix.chars().count());
        self.message
            .iter()
            .enumerate()
            .map(|(i, chunk)| {
                let lead = if i == 0 { &prefix } else { &indent };
                LogLine {
                    text: format!("{lead}{chunk}"),
                    severity,
                }
            })
            .collect()
    }
}

/// Journald emits non-UTF-8 payloads as arrays of byte values.
fn message_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Array(items) => {
            let bytes: Option<Vec<u8>> = items
                .iter()
                .map(|v| v.as_u64().and_then(|b| u8::try_from(b).ok()))
                .collect();
            match bytes {
                Some(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
                None => value.to_string(),
            }
        }
        other => other.to_string(),
    }
}

fn value_to_i64(value: &Value) -> Option<i64> {
    match value {
        Value::String(s) => s.trim().parse().ok(),
        Value::Number(n) => n.as_i64(),
        _ => None,
    }
}

/// `__REALTIME_TIMESTAMP` is microseconds since the epoch.
fn realtime_to_local(value: &Value) -> Option<DateTime<Local>> {
    let micros = value_to_i64(value)?;
    let secs = micros.div_euclid(1_000_000);
    let nanos = (micros.rem_euclid(1_000_000) * 1_000) as u32;
    Local.timestamp_opt(secs, nanos).single()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TS_MICROS: i64 = 1_773_496_845_123_456;

    fn expected_clock() -> String {
        Local
            .timestamp_opt(TS_MICROS / 1_000_000, 0)
            .single()
            .unwrap()
            .format("%H:%M:%S")
            .to_string()
    }

    #[test]
    fn test_decode_full_record() {
        let line = format!(
            r#"{{"MESSAGE":"disk full","PRIORITY":"3","__REALTIME_TIMESTAMP":"{TS_MICROS}"}}"#
        );
        let rec = LogRecord::from_json_line(&line).unwrap();
        assert_eq!(rec.severity, 3);
        assert_eq!(rec.message, vec!["disk full".to_string()]);
        assert_eq!(rec.prefix(), format!("[{}] [ERR] ", expected_clock()));
    }

    #[test]
    fn test_three_line_message_keeps_alignment() {
        let line = format!(
            r#"{{"MESSAGE":"one\ntwo\nthree","PRIORITY":"4","__REALTIME_TIMESTAMP":"{TS_MICROS}"}}"#
        );
        let rendered = LogRecord::from_json_line(&line).unwrap().render();
        assert_eq!(rendered.len(), 3);

        let prefix = format!("[{}] [WARNING] ", expected_clock());
        assert_eq!(rendered[0].text, format!("{prefix}one"));
        let indent = " ".repeat(prefix.len());
        assert_eq!(rendered[1].text, format!("{indent}two"));
        assert_eq!(rendered[2].text, format!("{indent}three"));
        assert!(rendered.iter().all(|l| l.severity == Some(4)));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let rec = LogRecord::from_json_line(r#"{"_PID":"1"}"#).unwrap();
        assert_eq!(rec.severity, 6);
        assert!(rec.timestamp.is_none());
        let rendered = rec.render();
        assert_eq!(rendered.len(), 1);
        assert_eq!(rendered[0].text, "[INFO] (empty message)");
    }

    #[test]
    fn test_unparsable_priority_defaults_to_info() {
        let rec = LogRecord::from_json_line(r#"{"MESSAGE":"x","PRIORITY":"loud"}"#).unwrap();
        assert_eq!(rec.severity, 6);
        assert_eq!(rec.render()[0].text, "[INFO] x");
    }

    #[test]
    fn test_out_of_range_priority_renders_unk() {
        let rec = LogRecord::from_json_line(r#"{"MESSAGE":"x","PRIORITY":"12"}"#).unwrap();
        assert_eq!(rec.render()[0].text, "[UNK] x");
    }

    #[test]
    fn test_bad_timestamp_is_dropped_from_prefix() {
        let rec = LogRecord::from_json_line(
            r#"{"MESSAGE":"x","PRIORITY":"5","__REALTIME_TIMESTAMP":"soon"}"#,
        )
        .unwrap();
        assert!(rec.timestamp.is_none());
        assert_eq!(rec.prefix(), "[NOTICE] ");
    }

    #[test]
    fn test_binary_message_is_decoded_lossily() {
        let rec = LogRecord::from_json_line(r#"{"MESSAGE":[104,105,10,255],"PRIORITY":"6"}"#)
            .unwrap();
        assert_eq!(rec.message, vec!["hi".to_string(), "\u{fffd}".to_string()]);
    }

    #[test]
    fn test_non_object_line_is_rejected() {
        assert!(LogRecord::from_json_line("-- No entries --").is_none());
        assert!(LogRecord::from_json_line("42").is_none());
        assert!(LogRecord::from_json_line("").is_none());
    }
}
