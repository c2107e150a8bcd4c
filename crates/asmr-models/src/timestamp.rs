//! Timestamp parsing and formatting for trigger offsets.
//!
//! Models report trigger times either as text (`MM:SS`, `HH:MM:SS`, or a bare
//! number of seconds) or as a JSON number. Everything here converts between
//! those forms and whole seconds.

use thiserror::Error;

use crate::trigger::TriggerTimestamp;

/// Display value used for anything that is not a non-negative number.
pub const ZERO_TIMESTAMP: &str = "00:00";

/// Timestamp parsing error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TimestampError {
    /// Timestamp string is empty
    #[error("Timestamp cannot be empty")]
    Empty,

    /// Invalid numeric value for a component
    #[error("Invalid {0} value: {1}")]
    InvalidValue(&'static str, String),

    /// Wrong number of `:`-separated components
    #[error("Invalid timestamp format '{0}'. Use MM:SS, HH:MM:SS or a number of seconds")]
    InvalidFormat(String),

    /// Value is NaN or infinite
    #[error("Timestamp is not a finite number")]
    NonFinite,
}

/// Parse a timestamp into whole seconds, surfacing why it could not be read.
///
/// # Examples
/// ```
/// use asmr_models::timestamp::try_parse_timestamp;
/// use asmr_models::TriggerTimestamp;
///
/// assert_eq!(try_parse_timestamp(&TriggerTimestamp::from("05:41")).unwrap(), 341);
/// assert!(try_parse_timestamp(&TriggerTimestamp::from("abc")).is_err());
/// ```
pub fn try_parse_timestamp(input: &TriggerTimestamp) -> Result<i64, TimestampError> {
    match input {
        TriggerTimestamp::Seconds(n) => {
            let value = n.as_f64().ok_or(TimestampError::NonFinite)?;
            try_parse_seconds(value)
        }
        TriggerTimestamp::Text(s) => try_parse_timestamp_str(s),
    }
}

/// Parse a timestamp into whole seconds, degrading to `0` on bad input.
///
/// Empty components count as zero here, so `":30"` is 30 seconds and `"1:"`
/// is one minute. Use [`try_parse_timestamp`] when an unreadable timestamp
/// must be told apart from the start of the video.
pub fn parse_timestamp_to_seconds(input: &TriggerTimestamp) -> i64 {
    let parsed = match input {
        TriggerTimestamp::Text(s) => parse_str(s, true),
        TriggerTimestamp::Seconds(_) => try_parse_timestamp(input),
    };
    parsed.unwrap_or(0)
}

/// Parse a textual timestamp (`MM:SS`, `HH:MM:SS`, or plain seconds).
pub fn try_parse_timestamp_str(ts: &str) -> Result<i64, TimestampError> {
    parse_str(ts, false)
}

fn parse_str(ts: &str, lenient: bool) -> Result<i64, TimestampError> {
    let ts = ts.trim();
    if ts.is_empty() {
        return Err(TimestampError::Empty);
    }

    if !ts.contains(':') {
        let seconds = parse_component("seconds", ts, lenient)?;
        return Ok(round_half_up(seconds));
    }

    let parts: Vec<&str> = ts.split(':').collect();
    let total = match parts.as_slice() {
        [minutes, seconds] => {
            parse_component("minutes", minutes, lenient)? * 60.0
                + parse_component("seconds", seconds, lenient)?
        }
        [hours, minutes, seconds] => {
            parse_component("hours", hours, lenient)? * 3600.0
                + parse_component("minutes", minutes, lenient)? * 60.0
                + parse_component("seconds", seconds, lenient)?
        }
        _ => return Err(TimestampError::InvalidFormat(ts.to_string())),
    };

    Ok(round_half_up(total))
}

/// Round a raw number of seconds to whole seconds.
pub fn try_parse_seconds(value: f64) -> Result<i64, TimestampError> {
    if !value.is_finite() {
        return Err(TimestampError::NonFinite);
    }
    Ok(round_half_up(value))
}

/// Format seconds as `MM:SS`, or `H:MM:SS` once the hour mark is reached.
///
/// NaN, infinite and negative inputs render as `00:00`.
///
/// # Examples
/// ```
/// use asmr_models::timestamp::format_seconds_to_timestamp;
/// assert_eq!(format_seconds_to_timestamp(341.0), "05:41");
/// assert_eq!(format_seconds_to_timestamp(3723.0), "1:02:03");
/// ```
pub fn format_seconds_to_timestamp(total_seconds: f64) -> String {
    if !total_seconds.is_finite() || total_seconds < 0.0 {
        return ZERO_TIMESTAMP.to_string();
    }

    let total = total_seconds.floor() as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}

fn parse_component(name: &'static str, raw: &str, lenient: bool) -> Result<f64, TimestampError> {
    let raw = raw.trim();
    if lenient && raw.is_empty() {
        return Ok(0.0);
    }
    let value: f64 = raw
        .parse()
        .map_err(|_| TimestampError::InvalidValue(name, raw.to_string()))?;
    if !value.is_finite() {
        return Err(TimestampError::InvalidValue(name, raw.to_string()));
    }
    Ok(value)
}

// Halves go toward positive infinity, so -2.5 becomes -2.
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> TriggerTimestamp {
        TriggerTimestamp::from(s)
    }

    #[test]
    fn test_parse_mm_ss() {
        assert_eq!(parse_timestamp_to_seconds(&text("05:41")), 341);
        assert_eq!(parse_timestamp_to_seconds(&text("00:00")), 0);
        assert_eq!(parse_timestamp_to_seconds(&text("90:00")), 5400);
    }

    #[test]
    fn test_parse_hh_mm_ss() {
        assert_eq!(parse_timestamp_to_seconds(&text("01:02:03")), 3723);
        assert_eq!(parse_timestamp_to_seconds(&text("1:00:00")), 3600);
    }

    #[test]
    fn test_parse_numeric_input() {
        assert_eq!(parse_timestamp_to_seconds(&TriggerTimestamp::from(75i64)), 75);
        assert_eq!(parse_timestamp_to_seconds(&TriggerTimestamp::from_f64(74.6).unwrap()), 75);
        assert_eq!(parse_timestamp_to_seconds(&TriggerTimestamp::from_f64(-2.5).unwrap()), -2);
    }

    #[test]
    fn test_parse_plain_number_string() {
        assert_eq!(parse_timestamp_to_seconds(&text("75")), 75);
        assert_eq!(parse_timestamp_to_seconds(&text(" 12.4 ")), 12);
    }

    #[test]
    fn test_parse_invalid_falls_back_to_zero() {
        assert_eq!(parse_timestamp_to_seconds(&text("abc")), 0);
        assert_eq!(parse_timestamp_to_seconds(&text("01:xx")), 0);
        assert_eq!(parse_timestamp_to_seconds(&text("1:2:3:4")), 0);
        assert_eq!(parse_timestamp_to_seconds(&text("")), 0);
        assert_eq!(parse_timestamp_to_seconds(&text("inf")), 0);
    }

    #[test]
    fn test_parse_empty_components_count_as_zero() {
        assert_eq!(parse_timestamp_to_seconds(&text("1:")), 60);
        assert_eq!(parse_timestamp_to_seconds(&text(":30")), 30);
        assert_eq!(parse_timestamp_to_seconds(&text("1::5")), 3605);
        assert_eq!(parse_timestamp_to_seconds(&text(" : ")), 0);
        assert_eq!(parse_timestamp_to_seconds(&text(":xx")), 0);
    }

    #[test]
    fn test_try_parse_rejects_empty_components() {
        assert_eq!(
            try_parse_timestamp_str(":30"),
            Err(TimestampError::InvalidValue("minutes", String::new()))
        );
        assert!(try_parse_timestamp(&text("1:")).is_err());
    }

    #[test]
    fn test_try_parse_reports_errors() {
        assert!(matches!(try_parse_timestamp_str(""), Err(TimestampError::Empty)));
        assert!(matches!(
            try_parse_timestamp_str("abc"),
            Err(TimestampError::InvalidValue("seconds", _))
        ));
        assert!(matches!(
            try_parse_timestamp_str("ab:10"),
            Err(TimestampError::InvalidValue("minutes", _))
        ));
        assert!(matches!(
            try_parse_timestamp_str("1:2:3:4"),
            Err(TimestampError::InvalidFormat(_))
        ));
        assert_eq!(try_parse_seconds(f64::NAN), Err(TimestampError::NonFinite));
    }

    #[test]
    fn test_format_seconds() {
        assert_eq!(format_seconds_to_timestamp(0.0), "00:00");
        assert_eq!(format_seconds_to_timestamp(83.0), "01:23");
        assert_eq!(format_seconds_to_timestamp(3599.0), "59:59");
        assert_eq!(format_seconds_to_timestamp(3600.0), "1:00:00");
        assert_eq!(format_seconds_to_timestamp(359_999.0), "99:59:59");
    }

    #[test]
    fn test_format_rejects_negative_and_nan() {
        assert_eq!(format_seconds_to_timestamp(-5.0), "00:00");
        assert_eq!(format_seconds_to_timestamp(f64::NAN), "00:00");
        assert_eq!(format_seconds_to_timestamp(f64::INFINITY), "00:00");
    }

    #[test]
    fn test_format_then_parse_is_identity() {
        for s in 0..=359_999_i64 {
            let formatted = format_seconds_to_timestamp(s as f64);
            assert_eq!(try_parse_timestamp_str(&formatted), Ok(s), "{}", formatted);
        }
    }
}
