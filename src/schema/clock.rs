//! SMIL clock values.

use std::fmt::{Display, Formatter};

/// Milliseconds per hour, minute and second.
const HOUR_MS: u128 = 3_600_000;
const MINUTE_MS: u128 = 60_000;
const SECOND_MS: u128 = 1_000;

/// Total milliseconds must stay within `i32::MAX` hours.
const MAX_TOTAL_MS: u128 = i32::MAX as u128 * HOUR_MS;

/// A normalized narration timestamp.
///
/// Parsed from the three SMIL clock grammars: full clock values
/// (`h:mm:ss.fff`), partial clock values (`mm:ss.fff`) and timecount values
/// (`12.5s`, `3min`, `2h`, `450ms`, bare seconds). After parsing,
/// `minutes`/`seconds` are in `[0, 60)` and `milliseconds` in `[0, 1000)`.
///
/// # Examples
/// ```
/// use quire::schema::SmilClock;
///
/// let clock = SmilClock::parse("1:02:03.5005").unwrap();
/// assert_eq!((1, 2, 3, 500), (clock.hours, clock.minutes, clock.seconds, clock.milliseconds));
///
/// // Timecount values convert through total milliseconds.
/// assert_eq!(SmilClock::parse("90min"), SmilClock::parse("1:30:00"));
/// assert_eq!(None, SmilClock::parse("15,5s"));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SmilClock {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub milliseconds: u32,
}

impl SmilClock {
    /// Parses a raw clock string; returns [`None`] on any malformed input.
    ///
    /// Fractional parts are truncated to millisecond precision, never
    /// rounded. Timecount values exceeding `i32::MAX` hours fail rather
    /// than wrap.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        if trimmed.contains(':') {
            Self::parse_clock_value(trimmed)
        } else {
            Self::parse_timecount_value(trimmed)
        }
    }

    /// The timestamp as total milliseconds.
    pub fn total_milliseconds(self) -> u64 {
        u64::from(self.hours) * HOUR_MS as u64
            + u64::from(self.minutes) * MINUTE_MS as u64
            + u64::from(self.seconds) * SECOND_MS as u64
            + u64::from(self.milliseconds)
    }

    /// `h:mm:ss[.fff]` or `mm:ss[.fff]`.
    fn parse_clock_value(value: &str) -> Option<Self> {
        let mut parts = value.split(':');
        let (hours, minutes, seconds) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(h), Some(m), Some(s), None) => (parse_integer(h)?, m, s),
            (Some(m), Some(s), None, None) => (0, m, s),
            // More than three segments, or none.
            _ => return None,
        };

        let minutes = parse_integer(minutes)?;
        let (seconds, milliseconds) = parse_seconds(seconds)?;

        if minutes >= 60 || seconds >= 60 {
            return None;
        }

        Some(Self {
            hours,
            minutes,
            seconds,
            milliseconds,
        })
    }

    /// A decimal magnitude with an optional `h`/`min`/`s`/`ms` suffix;
    /// a bare magnitude counts seconds.
    fn parse_timecount_value(value: &str) -> Option<Self> {
        let magnitude_end = value
            .find(|c: char| !c.is_ascii_digit() && c != '.')
            .unwrap_or(value.len());
        let (magnitude, suffix) = value.split_at(magnitude_end);

        let unit_ms = match suffix {
            "h" => HOUR_MS,
            "min" => MINUTE_MS,
            "s" | "" => SECOND_MS,
            "ms" => 1,
            _ => return None,
        };

        let (integer, fraction) = match magnitude.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (magnitude, None),
        };
        if integer.is_empty() || !is_digits(integer) {
            return None;
        }

        let mut total_ms = integer.parse::<u128>().ok()?.checked_mul(unit_ms)?;

        if let Some(fraction) = fraction {
            if fraction.is_empty() || !is_digits(fraction) {
                return None;
            }
            // Truncated decimal arithmetic: fraction / 10^len * unit.
            let numerator = fraction.parse::<u128>().ok()?.checked_mul(unit_ms)?;
            let denominator = 10u128.checked_pow(fraction.len() as u32)?;
            total_ms = total_ms.checked_add(numerator / denominator)?;
        }

        if total_ms > MAX_TOTAL_MS {
            return None;
        }

        Some(Self {
            hours: (total_ms / HOUR_MS) as u32,
            minutes: (total_ms % HOUR_MS / MINUTE_MS) as u32,
            seconds: (total_ms % MINUTE_MS / SECOND_MS) as u32,
            milliseconds: (total_ms % SECOND_MS) as u32,
        })
    }
}

impl Display for SmilClock {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            fmt,
            "{}:{:02}:{:02}.{:03}",
            self.hours, self.minutes, self.seconds, self.milliseconds
        )
    }
}

fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// A plain non-negative integer segment; signs are rejected.
fn parse_integer(segment: &str) -> Option<u32> {
    if is_digits(segment) {
        segment.parse().ok()
    } else {
        None
    }
}

/// `ss` or `ss.fff...`; the fraction is truncated to three digits.
fn parse_seconds(segment: &str) -> Option<(u32, u32)> {
    let (seconds, fraction) = match segment.split_once('.') {
        Some((seconds, fraction)) => (seconds, fraction),
        None => (segment, ""),
    };

    let seconds = parse_integer(seconds)?;
    if segment.contains('.') && !is_digits(fraction) {
        return None;
    }

    let mut milliseconds = 0;
    for (i, digit) in fraction.bytes().take(3).enumerate() {
        milliseconds += u32::from(digit - b'0') * 10u32.pow(2 - i as u32);
    }
    Some((seconds, milliseconds))
}
