//! Flexible time parser for the `--time` argument and the jump prompt.
//!
//! All results are local wall-clock times, which is what both `journalctl`
//! and `sadf` take on their command lines.
//!
//! Supports multiple formats:
//! - Date and time: `2026-02-07 17:00`, `2026-02-07 17:00:00`
//! - ISO 8601: `2026-02-07T17:00:00`
//! - Date:time: `2026-02-07:07:00` or `2026-02-07:07:00:00`
//! - Unix timestamp: `1738944000`
//! - Relative: `-1h`, `-30m`, `-2d`, `+15m`
//! - Time only: `07:00`, `07:00:30`

use chrono::{Duration, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

/// Error type for time parsing failures.
#[derive(Debug, Clone)]
pub struct TimeParseError {
    pub input: String,
    pub message: String,
}

impl std::fmt::Display for TimeParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to parse time '{}': {}", self.input, self.message)
    }
}

impl std::error::Error for TimeParseError {}

const UNRECOGNIZED: &str = "Unrecognized format. Use: YYYY-MM-DD HH:MM[:SS], \
                            ISO 8601 (2026-02-07T17:00:00), Unix timestamp (1738944000), \
                            relative (-1h, -30m, +15m) or time only (07:00)";

/// Parses a time string relative to the current local time.
///
/// | Format | Example | Description |
/// |--------|---------|-------------|
/// | Date time | `2026-02-07 17:00` | Seconds optional |
/// | ISO 8601 | `2026-02-07T17:00:00` | Seconds optional |
/// | Date:time | `2026-02-07:07:00` | Colon separator |
/// | Unix timestamp | `1738944000` | Seconds since epoch |
/// | Relative | `-1h`, `-30m`, `-2d` | Relative to now |
/// | Time only | `07:00` | Today |
///
/// # Examples
///
/// ```
/// use sarjournal::util::parse_time;
///
/// let start = parse_time("2026-02-07 17:00").unwrap();
/// assert_eq!(start.format("%H:%M:%S").to_string(), "17:00:00");
/// ```
pub fn parse_time(input: &str) -> Result<NaiveDateTime, TimeParseError> {
    parse_time_with_base(input, Local::now().naive_local())
}

/// Parses a time expression using `base` as the reference point.
///
/// Relative expressions are offsets from `base`; a bare time of day is taken
/// on `base`'s date.
pub fn parse_time_with_base(
    input: &str,
    base: NaiveDateTime,
) -> Result<NaiveDateTime, TimeParseError> {
    let input = input.trim();

    if let Some(ts) = try_parse_unix_timestamp(input) {
        return Ok(ts);
    }

    if let Some(delta) = try_parse_relative_delta(input) {
        return base.checked_add_signed(delta).ok_or(TimeParseError {
            input: input.to_string(),
            message: "Relative time overflow".to_string(),
        });
    }

    if let Some(ts) = try_parse_datetime(input) {
        return Ok(ts);
    }

    if let Some(ts) = try_parse_date_colon_time(input) {
        return Ok(ts);
    }

    if let Some(ts) = try_parse_time_only(input, base.date()) {
        return Ok(ts);
    }

    Err(TimeParseError {
        input: input.to_string(),
        message: UNRECOGNIZED.to_string(),
    })
}

/// Try to parse as Unix timestamp (plain integer), converted to local time.
fn try_parse_unix_timestamp(input: &str) -> Option<NaiveDateTime> {
    if input.is_empty() || !input.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let secs: i64 = input.parse().ok()?;
    Local
        .timestamp_opt(secs, 0)
        .single()
        .map(|dt| dt.naive_local())
}

/// Parses `-1h`, `+30m`, `-90s`, `-2d`, `-1w` into a signed offset.
fn try_parse_relative_delta(input: &str) -> Option<Duration> {
    let (sign, rest) = match input.chars().next()? {
        '-' => (-1, &input[1..]),
        '+' => (1, &input[1..]),
        _ => return None,
    };

    let unit = rest.chars().last()?;
    let number_str = &rest[..rest.len() - unit.len_utf8()];
    if number_str.is_empty() {
        return None;
    }
    let number: i64 = number_str.parse().ok()?;

    let seconds = match unit {
        's' => number,
        'm' => number.checked_mul(60)?,
        'h' => number.checked_mul(3600)?,
        'd' => number.checked_mul(86400)?,
        'w' => number.checked_mul(604800)?,
        _ => return None,
    };

    Duration::try_seconds(sign * seconds)
}

/// Date and time separated by a space or `T`, seconds optional.
fn try_parse_datetime(input: &str) -> Option<NaiveDateTime> {
    const FORMATS: [&str; 4] = [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
    ];
    FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
}

/// Try to parse as date:time format (2026-02-07:07:00 or 2026-02-07:07:00:00).
fn try_parse_date_colon_time(input: &str) -> Option<NaiveDateTime> {
    // Date part is YYYY-MM-DD (10 chars), then a colon.
    if input.len() < 11 || !input.is_char_boundary(10) {
        return None;
    }
    let (date_part, rest) = input.split_at(10);
    let time_part = rest.strip_prefix(':')?;

    let date = NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()?;
    let time = parse_clock(time_part)?;
    Some(NaiveDateTime::new(date, time))
}

/// Try to parse as time only, placed on `date`.
fn try_parse_time_only(input: &str, date: NaiveDate) -> Option<NaiveDateTime> {
    if input.chars().nth(2) != Some(':') {
        return None;
    }
    let time = parse_clock(input)?;
    Some(NaiveDateTime::new(date, time))
}

/// `HH:MM` or `HH:MM:SS`.
fn parse_clock(input: &str) -> Option<NaiveTime> {
    match input.len() {
        5 => NaiveTime::parse_from_str(input, "%H:%M").ok(),
        8 => NaiveTime::parse_from_str(input, "%H:%M:%S").ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 2, 8)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    fn expected(d: u32, h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 2, d)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn test_date_time_with_space() {
        assert_eq!(
            parse_time("2026-02-07 17:00").unwrap(),
            expected(7, 17, 0, 0)
        );
        assert_eq!(
            parse_time("2026-02-07 17:00:42").unwrap(),
            expected(7, 17, 0, 42)
        );
    }

    #[test]
    fn test_iso8601() {
        assert_eq!(
            parse_time("2026-02-07T17:00:00").unwrap(),
            expected(7, 17, 0, 0)
        );
        assert_eq!(parse_time("2026-02-07T17:00").unwrap(), expected(7, 17, 0, 0));
    }

    #[test]
    fn test_date_colon_time() {
        assert_eq!(parse_time("2026-02-07:17:00").unwrap(), expected(7, 17, 0, 0));
        assert_eq!(
            parse_time("2026-02-07:17:00:00").unwrap(),
            expected(7, 17, 0, 0)
        );
    }

    #[test]
    fn test_unix_timestamp_is_local() {
        let want = Local
            .timestamp_opt(1_738_944_000, 0)
            .single()
            .unwrap()
            .naive_local();
        assert_eq!(parse_time("1738944000").unwrap(), want);
    }

    #[test]
    fn test_relative_to_base() {
        assert_eq!(
            parse_time_with_base("-1h", base()).unwrap(),
            expected(8, 9, 0, 0)
        );
        assert_eq!(
            parse_time_with_base("+15m", base()).unwrap(),
            expected(8, 10, 15, 0)
        );
        assert_eq!(
            parse_time_with_base("-2d", base()).unwrap(),
            expected(6, 10, 0, 0)
        );
        assert_eq!(
            parse_time_with_base("-90s", base()).unwrap(),
            expected(8, 9, 58, 30)
        );
    }

    #[test]
    fn test_relative_to_now() {
        let now = Local::now().naive_local();
        let ts = parse_time("-30m").unwrap();
        let diff = (now - Duration::minutes(30) - ts).num_seconds().abs();
        assert!(diff < 2);
    }

    #[test]
    fn test_time_only_on_base_date() {
        assert_eq!(
            parse_time_with_base("16:00", base()).unwrap(),
            expected(8, 16, 0, 0)
        );
        assert_eq!(
            parse_time_with_base("06:30:15", base()).unwrap(),
            expected(8, 6, 30, 15)
        );
    }

    #[test]
    fn test_invalid_formats() {
        assert!(parse_time("").is_err());
        assert!(parse_time("invalid").is_err());
        assert!(parse_time("2026-02-07").is_err());
        assert!(parse_time("-abc").is_err());
        assert!(parse_time("-h").is_err());
        assert!(parse_time("12:34:56:78").is_err());
        assert!(parse_time("25:00").is_err());
    }

    #[test]
    fn test_error_message_names_input() {
        let err = parse_time("yesterday").unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse time 'yesterday'"));
    }
}
