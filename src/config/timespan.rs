//! Text form of durations.
//!
//! Durations travel through property maps in the classic `TimeSpan` layout:
//!
//! - parse: `[-]{ d | [d.]hh:mm[:ss[.fffffff]] | d:hh:mm:ss[.fffffff] }`, surrounding
//!   whitespace allowed
//! - render: `[-][d.]hh:mm:ss[.fffffff]`
//!
//! A bare integer is a number of days. Fractions are expressed in 100ns ticks,
//! so at most seven fractional digits are accepted.

use chrono::Duration;

const TICKS_PER_SECOND: i64 = 10_000_000;
const TICKS_PER_MINUTE: i64 = TICKS_PER_SECOND * 60;
const TICKS_PER_HOUR: i64 = TICKS_PER_MINUTE * 60;
const TICKS_PER_DAY: i64 = TICKS_PER_HOUR * 24;
const NANOS_PER_TICK: i64 = 100;
const MAX_FRACTION_DIGITS: usize = 7;

/// Parse duration text, returning `None` when the text is malformed or out of range.
pub fn parse_timespan(text: &str) -> Option<Duration> {
    let text = text.trim();
    let (negative, body) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };

    let ticks = if body.contains(':') {
        parse_clock(body)?
    } else {
        parse_digits(body)?.checked_mul(TICKS_PER_DAY)?
    };

    let ticks = if negative { -ticks } else { ticks };
    Some(ticks_to_duration(ticks))
}

/// Render a duration in the constant `[-][d.]hh:mm:ss[.fffffff]` layout.
///
/// Precision below one tick (100ns) is truncated.
pub fn format_timespan(duration: &Duration) -> String {
    let mut secs = duration.num_seconds();
    let mut nanos = i64::from(duration.subsec_nanos());
    let negative = secs < 0 || nanos < 0;
    if negative {
        secs = -secs;
        nanos = -nanos;
    }

    let days = secs / 86_400;
    let hours = (secs % 86_400) / 3_600;
    let minutes = (secs % 3_600) / 60;
    let seconds = secs % 60;
    let fraction = nanos / NANOS_PER_TICK;

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    if days != 0 {
        out.push_str(&format!("{}.", days));
    }
    out.push_str(&format!("{:02}:{:02}:{:02}", hours, minutes, seconds));
    if fraction != 0 {
        out.push_str(&format!(".{:07}", fraction));
    }
    out
}

/// `[d.]hh:mm[:ss[.fffffff]]` or `d:hh:mm:ss[.fffffff]`
fn parse_clock(body: &str) -> Option<i64> {
    let parts: Vec<&str> = body.split(':').collect();
    let (days, hours, minutes, seconds) = match parts.as_slice() {
        [head, minutes] => {
            let (days, hours) = split_day_hours(head)?;
            (days, hours, *minutes, None)
        }
        [head, minutes, seconds] => {
            let (days, hours) = split_day_hours(head)?;
            (days, hours, *minutes, Some(*seconds))
        }
        [days, hours, minutes, seconds] => (
            parse_digits(days)?,
            parse_component(hours, 23)?,
            *minutes,
            Some(*seconds),
        ),
        _ => return None,
    };
    let minutes = parse_component(minutes, 59)?;

    let (seconds, fraction) = match seconds {
        Some(seconds) => match seconds.split_once('.') {
            Some((whole, fraction)) => (parse_component(whole, 59)?, parse_fraction(fraction)?),
            None => (parse_component(seconds, 59)?, 0),
        },
        None => (0, 0),
    };

    days.checked_mul(TICKS_PER_DAY)?
        .checked_add(hours * TICKS_PER_HOUR)?
        .checked_add(minutes * TICKS_PER_MINUTE)?
        .checked_add(seconds * TICKS_PER_SECOND)?
        .checked_add(fraction)
}

/// `d.hh` or `hh`
fn split_day_hours(head: &str) -> Option<(i64, i64)> {
    match head.split_once('.') {
        Some((days, hours)) => Some((parse_digits(days)?, parse_component(hours, 23)?)),
        None => Some((0, parse_component(head, 23)?)),
    }
}

/// One or two digits, bounded above by `max`.
fn parse_component(text: &str, max: i64) -> Option<i64> {
    if text.len() > 2 {
        return None;
    }
    let value = parse_digits(text)?;
    (value <= max).then_some(value)
}

/// Fractional seconds, scaled to ticks.
fn parse_fraction(text: &str) -> Option<i64> {
    if text.len() > MAX_FRACTION_DIGITS {
        return None;
    }
    let value = parse_digits(text)?;
    let scale = 10_i64.pow((MAX_FRACTION_DIGITS - text.len()) as u32);
    Some(value * scale)
}

fn parse_digits(text: &str) -> Option<i64> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

fn ticks_to_duration(ticks: i64) -> Duration {
    Duration::seconds(ticks / TICKS_PER_SECOND)
        + Duration::nanoseconds((ticks % TICKS_PER_SECOND) * NANOS_PER_TICK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_days_only() {
        assert_eq!(parse_timespan("1"), Some(Duration::days(1)));
        assert_eq!(parse_timespan("  14 "), Some(Duration::days(14)));
    }

    #[test]
    fn test_parse_hours_minutes() {
        assert_eq!(
            parse_timespan("01:30"),
            Some(Duration::hours(1) + Duration::minutes(30))
        );
        assert_eq!(parse_timespan("1:00"), Some(Duration::hours(1)));
    }

    #[test]
    fn test_parse_full_form() {
        let expected = Duration::days(1)
            + Duration::hours(2)
            + Duration::minutes(3)
            + Duration::seconds(4)
            + Duration::milliseconds(500);
        assert_eq!(parse_timespan("1.02:03:04.5"), Some(expected));
        assert_eq!(parse_timespan("1.02:03:04.5000000"), Some(expected));
    }

    #[test]
    fn test_parse_day_with_hours_minutes() {
        assert_eq!(
            parse_timespan("2.12:00"),
            Some(Duration::days(2) + Duration::hours(12))
        );
    }

    #[test]
    fn test_parse_colon_separated_days() {
        let expected =
            Duration::days(1) + Duration::hours(2) + Duration::minutes(3) + Duration::seconds(4);
        assert_eq!(parse_timespan("1:2:3:4"), Some(expected));
        assert_eq!(parse_timespan("1:02:03:04"), Some(expected));
        assert_eq!(
            parse_timespan("1:02:03:04.25"),
            Some(expected + Duration::milliseconds(250))
        );
        assert_eq!(format_timespan(&expected), "1.02:03:04");
    }

    #[test]
    fn test_parse_negative() {
        assert_eq!(parse_timespan("-00:00:30"), Some(Duration::seconds(-30)));
        assert_eq!(parse_timespan("-1"), Some(Duration::days(-1)));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for text in [
            "", "abc", "1h", "24:00:00", "00:60:00", "00:00:60", "1:2:3:4:5", "00:00:00.12345678",
            "00:00:00.", ".01:00:00", "1.", "--1", "+1", "1 .01:00", "001:00", "1.2:03:04:05",
            "1:24:00:00",
        ] {
            assert_eq!(parse_timespan(text), None, "expected {:?} to be rejected", text);
        }
    }

    #[test]
    fn test_format_canonical() {
        assert_eq!(format_timespan(&Duration::zero()), "00:00:00");
        assert_eq!(format_timespan(&Duration::hours(1)), "01:00:00");
        assert_eq!(format_timespan(&Duration::days(1)), "1.00:00:00");
        assert_eq!(format_timespan(&Duration::hours(24)), "1.00:00:00");
        assert_eq!(
            format_timespan(&(Duration::seconds(5) + Duration::milliseconds(250))),
            "00:00:05.2500000"
        );
        assert_eq!(format_timespan(&Duration::minutes(-90)), "-01:30:00");
    }

    #[test]
    fn test_format_then_parse_is_identity() {
        let samples = [
            Duration::zero(),
            Duration::hours(24),
            Duration::days(365) + Duration::seconds(59),
            Duration::nanoseconds(100),
            Duration::milliseconds(-1_500),
            Duration::days(10_000) + Duration::nanoseconds(9_999_999_900),
        ];
        for sample in samples {
            assert_eq!(parse_timespan(&format_timespan(&sample)), Some(sample));
        }
    }
}
