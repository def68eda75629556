//! UTC datetime utilities without timezone dependencies.
//!
//! Provides a lightweight `DateTimeUtc` struct for post publish timestamps,
//! enough to compare them against the scheduled post margin.
//!
//! # Examples
//!
//! ```ignore
//! let dt = DateTimeUtc::parse("2024-06-15").unwrap();
//! let dt = DateTimeUtc::parse("2024-06-15T14:30:45Z").unwrap();
//! let dt = DateTimeUtc::parse("2024-06-15T20:00:45+05:30").unwrap();
//!
//! assert_eq!(dt.to_rfc3339(), "2024-06-15T14:30:45Z");
//! ```

use anyhow::{Result, bail};
use std::time::{SystemTime, UNIX_EPOCH};

/// Milliseconds since the unix epoch.
pub type UnixMillis = i64;

/// UTC datetime without timezone complexity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTimeUtc {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl DateTimeUtc {
    pub const fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    pub const fn from_ymd(year: u16, month: u8, day: u8) -> Self {
        Self::new(year, month, day, 0, 0, 0)
    }

    /// Parse `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM:SSZ` or `YYYY-MM-DDTHH:MM:SS±HH:MM`.
    ///
    /// A fractional second (`.123`) is accepted and dropped. Offsets are
    /// applied, so the result is always UTC.
    pub fn parse(s: &str) -> Option<Self> {
        let bytes = s.trim().as_bytes();

        // Minimum: "YYYY-MM-DD" (10 chars)
        if bytes.len() < 10 {
            return None;
        }

        let year = parse_u16(&bytes[0..4])?;
        if bytes[4] != b'-' {
            return None;
        }
        let month = parse_u8(&bytes[5..7])?;
        if bytes[7] != b'-' {
            return None;
        }
        let day = parse_u8(&bytes[8..10])?;

        if bytes.len() == 10 {
            let dt = Self::from_ymd(year, month, day);
            dt.validate().ok()?;
            return Some(dt);
        }

        // Time part: "THH:MM:SS"
        if bytes.len() < 20 || !matches!(bytes[10], b'T' | b't' | b' ') {
            return None;
        }
        if bytes[13] != b':' || bytes[16] != b':' {
            return None;
        }
        let hour = parse_u8(&bytes[11..13])?;
        let minute = parse_u8(&bytes[14..16])?;
        let second = parse_u8(&bytes[17..19])?;

        let mut rest = &bytes[19..];
        if rest.first() == Some(&b'.') {
            let digits = rest[1..].iter().take_while(|b| b.is_ascii_digit()).count();
            if digits == 0 {
                return None;
            }
            rest = &rest[1 + digits..];
        }

        let offset_minutes = parse_offset(rest)?;

        let dt = Self::new(year, month, day, hour, minute, second);
        dt.validate().ok()?;

        if offset_minutes == 0 {
            return Some(dt);
        }
        let utc = dt.to_unix_millis() - i64::from(offset_minutes) * 60_000;
        Self::from_unix_millis(utc)
    }

    pub fn validate(&self) -> Result<()> {
        let Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        } = *self;

        if !(1..=12).contains(&month) {
            bail!("month is invalid: {month}");
        }

        let max_days = Self::days_in_month(year, month);
        if day == 0 || day > max_days {
            bail!("day is invalid: {day}");
        }
        if hour > 23 {
            bail!("hour is invalid: {hour}");
        }
        if minute > 59 {
            bail!("minute is invalid: {minute}");
        }
        if second > 59 {
            bail!("second is invalid: {second}");
        }

        Ok(())
    }

    #[inline]
    #[allow(clippy::manual_is_multiple_of)] // Manual impl for const fn
    const fn is_leap_year(year: u16) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    #[inline]
    const fn days_in_month(year: u16, month: u8) -> u8 {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if Self::is_leap_year(year) => 29,
            2 => 28,
            _ => 0,
        }
    }

    /// Milliseconds since 1970-01-01T00:00:00Z.
    pub fn to_unix_millis(self) -> UnixMillis {
        let days = days_from_civil(
            i64::from(self.year),
            i64::from(self.month),
            i64::from(self.day),
        );
        let secs = days * 86_400
            + i64::from(self.hour) * 3_600
            + i64::from(self.minute) * 60
            + i64::from(self.second);
        secs * 1_000
    }

    /// Inverse of [`to_unix_millis`](Self::to_unix_millis), truncating sub-second precision.
    ///
    /// Returns `None` outside years 0..=9999.
    pub fn from_unix_millis(millis: UnixMillis) -> Option<Self> {
        let secs = millis.div_euclid(1_000);
        let days = secs.div_euclid(86_400);
        let tod = secs.rem_euclid(86_400);
        let (year, month, day) = civil_from_days(days);

        let year = u16::try_from(year).ok().filter(|y| *y <= 9999)?;
        Some(Self::new(
            year,
            month as u8,
            day as u8,
            (tod / 3_600) as u8,
            (tod / 60 % 60) as u8,
            (tod % 60) as u8,
        ))
    }

    /// Format as RFC 3339 (ISO 8601).
    ///
    /// Returns: `YYYY-MM-DDTHH:MM:SSZ`
    pub fn to_rfc3339(self) -> String {
        format!(
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

/// Current wall-clock time in unix milliseconds.
pub fn now_millis() -> UnixMillis {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| i64::try_from(d.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}

/// Days since 1970-01-01 for a proleptic Gregorian date.
const fn days_from_civil(y: i64, m: i64, d: i64) -> i64 {
    let y = if m <= 2 { y - 1 } else { y };
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let mp = (m + 9) % 12;
    let doy = (153 * mp + 2) / 5 + d - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Inverse of `days_from_civil`: (year, month, day).
const fn civil_from_days(z: i64) -> (i64, i64, i64) {
    let z = z + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = yoe + era * 400;
    (if m <= 2 { y + 1 } else { y }, m, d)
}

/// Parse the zone suffix: `Z`, `+HH:MM`, `-HH:MM`. Returns the offset in minutes.
fn parse_offset(bytes: &[u8]) -> Option<i32> {
    match bytes {
        [b'Z' | b'z'] => Some(0),
        [sign @ (b'+' | b'-'), h1, h2, b':', m1, m2] => {
            let hours = i32::from(parse_u8(&[*h1, *h2])?);
            let minutes = i32::from(parse_u8(&[*m1, *m2])?);
            if hours > 23 || minutes > 59 {
                return None;
            }
            let total = hours * 60 + minutes;
            Some(if *sign == b'-' { -total } else { total })
        }
        _ => None,
    }
}

/// Parse 2-digit ASCII number
#[inline]
fn parse_u8(bytes: &[u8]) -> Option<u8> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = bytes[0].wrapping_sub(b'0');
    let d2 = bytes[1].wrapping_sub(b'0');
    if d1 > 9 || d2 > 9 {
        return None;
    }
    Some(d1 * 10 + d2)
}

/// Parse 4-digit ASCII number
#[inline]
fn parse_u16(bytes: &[u8]) -> Option<u16> {
    if bytes.len() != 4 {
        return None;
    }
    let mut result = 0u16;
    for &b in bytes {
        let d = b.wrapping_sub(b'0');
        if d > 9 {
            return None;
        }
        result = result * 10 + u16::from(d);
    }
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_only() {
        assert_eq!(
            DateTimeUtc::parse("2024-06-15"),
            Some(DateTimeUtc::from_ymd(2024, 6, 15))
        );
    }

    #[test]
    fn test_parse_utc() {
        assert_eq!(
            DateTimeUtc::parse("2024-06-15T14:30:45Z"),
            Some(DateTimeUtc::new(2024, 6, 15, 14, 30, 45))
        );
    }

    #[test]
    fn test_parse_fraction_dropped() {
        assert_eq!(
            DateTimeUtc::parse("2024-06-15T14:30:45.250Z"),
            Some(DateTimeUtc::new(2024, 6, 15, 14, 30, 45))
        );
        assert_eq!(DateTimeUtc::parse("2024-06-15T14:30:45.Z"), None);
    }

    #[test]
    fn test_parse_offset_applied() {
        // Asia/Kolkata is +05:30
        assert_eq!(
            DateTimeUtc::parse("2024-06-15T20:00:45+05:30"),
            Some(DateTimeUtc::new(2024, 6, 15, 14, 30, 45))
        );
        // Negative offset crossing midnight
        assert_eq!(
            DateTimeUtc::parse("2024-12-31T22:00:00-03:00"),
            Some(DateTimeUtc::new(2025, 1, 1, 1, 0, 0))
        );
    }

    #[test]
    fn test_parse_invalid() {
        for s in [
            "",
            "2024-6-15",
            "2024-06-15T14:30",
            "2024-06-15T14:30:45",
            "2024-06-15T14:30:45+0530",
            "2024-13-01",
            "2023-02-29",
            "2024-06-15T24:00:00Z",
            "2024-06-15T12:00:00+24:00",
        ] {
            assert_eq!(DateTimeUtc::parse(s), None, "{s}");
        }
    }

    #[test]
    fn test_unix_millis_epoch() {
        assert_eq!(DateTimeUtc::from_ymd(1970, 1, 1).to_unix_millis(), 0);
        assert_eq!(
            DateTimeUtc::new(1970, 1, 2, 0, 0, 1).to_unix_millis(),
            86_401_000
        );
        // 2000-03-01 exercises the leap-day shift
        assert_eq!(
            DateTimeUtc::from_ymd(2000, 3, 1).to_unix_millis(),
            951_868_800_000
        );
    }

    #[test]
    fn test_unix_millis_inverse() {
        for dt in [
            DateTimeUtc::from_ymd(1970, 1, 1),
            DateTimeUtc::new(2024, 2, 29, 23, 59, 59),
            DateTimeUtc::new(1969, 12, 31, 12, 0, 0),
            DateTimeUtc::new(2100, 3, 1, 0, 0, 0),
        ] {
            assert_eq!(DateTimeUtc::from_unix_millis(dt.to_unix_millis()), Some(dt));
        }
    }

    #[test]
    fn test_validate_leap_year() {
        assert!(DateTimeUtc::new(2024, 2, 29, 12, 0, 0).validate().is_ok());
        assert!(DateTimeUtc::new(2000, 2, 29, 12, 0, 0).validate().is_ok());
        assert!(DateTimeUtc::new(2023, 2, 29, 12, 0, 0).validate().is_err());
        assert!(DateTimeUtc::new(1900, 2, 29, 12, 0, 0).validate().is_err());
    }

    #[test]
    fn test_to_rfc3339() {
        let dt = DateTimeUtc::new(2024, 6, 15, 14, 30, 45);
        assert_eq!(dt.to_rfc3339(), "2024-06-15T14:30:45Z");
    }

    #[test]
    fn test_now_is_after_2020() {
        assert!(now_millis() > DateTimeUtc::from_ymd(2020, 1, 1).to_unix_millis());
    }
}
