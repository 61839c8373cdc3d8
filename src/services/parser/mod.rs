//! Parsers for the date, time-of-day and duration strings found in slot records.
//!
//! The scheduling system exports times through two different paths: a plain
//! 24-hour `HH:MM[:SS]` string, or a full date-time stamp on its default epoch
//! (`12/30/1899 11:50:00 PM`). The encoding is detected by the presence of a
//! `/` separator; for stamps only the time of day and meridiem are used.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::ParseError;

/// Parse a `MM/DD/YYYY` date. A trailing time of day after whitespace is ignored.
pub fn parse_date(s: &str) -> Result<NaiveDate, ParseError> {
    let invalid = || ParseError::InvalidDate(s.to_string());

    let date_part = s.split_whitespace().next().ok_or_else(invalid)?;
    let parts: Vec<&str> = date_part.split('/').collect();
    if parts.len() != 3 || !parts.iter().all(|p| is_numeric(p)) {
        return Err(invalid());
    }

    let month: u32 = parts[0].parse().map_err(|_| invalid())?;
    let day: u32 = parts[1].parse().map_err(|_| invalid())?;
    let year: i32 = parts[2].parse().map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

/// Parse a time of day in either accepted encoding.
pub fn parse_time_of_day(s: &str) -> Result<NaiveTime, ParseError> {
    let invalid = || ParseError::InvalidTime(s.to_string());
    let trimmed = s.trim();

    let (clock, meridiem) = if trimmed.contains('/') {
        let mut tokens = trimmed.split_whitespace().skip(1);
        let clock = tokens.next().ok_or_else(invalid)?;
        let meridiem = match tokens.next() {
            Some(token) => Some(parse_meridiem(token).ok_or_else(invalid)?),
            None => None,
        };
        if tokens.next().is_some() {
            return Err(invalid());
        }
        (clock, meridiem)
    } else {
        (trimmed, None)
    };

    let (hour, minute, second) = split_clock(clock).ok_or_else(invalid)?;

    let hour = match meridiem {
        Some(Meridiem::Am) if hour == 12 => 0,
        Some(Meridiem::Pm) if hour != 12 => hour + 12,
        _ => hour,
    };

    check_range("hour", hour, 23)?;
    check_range("minute", minute, 59)?;
    check_range("second", second, 59)?;

    NaiveTime::from_hms_opt(hour as u32, minute as u32, second as u32).ok_or_else(invalid)
}

/// Combine a date string and a time string into an absolute instant.
pub fn parse_instant(date: &str, time: &str) -> Result<NaiveDateTime, ParseError> {
    let date = parse_date(date)?;
    let time = parse_time_of_day(time)?;
    Ok(date.and_time(time))
}

/// Parse an `H:MM:SS` or `H:MM` duration into milliseconds.
///
/// Components need no zero padding and the hour may exceed 23.
pub fn parse_duration_ms(s: &str) -> Result<u64, ParseError> {
    let invalid = || ParseError::InvalidDuration(s.to_string());

    let parts: Vec<&str> = s.trim().split(':').collect();
    if parts.is_empty() || parts.len() > 3 || !parts.iter().all(|p| is_numeric(p)) {
        return Err(invalid());
    }

    let mut values = [0u64; 3];
    for (slot, part) in values.iter_mut().zip(&parts) {
        *slot = part.parse().map_err(|_| invalid())?;
    }
    let [hours, minutes, seconds] = values;

    hours
        .checked_mul(3600)
        .and_then(|h| h.checked_add(minutes.checked_mul(60)?))
        .and_then(|hm| hm.checked_add(seconds))
        .and_then(|total| total.checked_mul(1000))
        .ok_or_else(invalid)
}

pub fn parse_duration(s: &str) -> Result<Duration, ParseError> {
    let ms = parse_duration_ms(s)?;
    let ms = i64::try_from(ms).map_err(|_| ParseError::InvalidDuration(s.to_string()))?;
    Ok(Duration::milliseconds(ms))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Meridiem {
    Am,
    Pm,
}

fn parse_meridiem(token: &str) -> Option<Meridiem> {
    match token.to_ascii_uppercase().as_str() {
        "AM" => Some(Meridiem::Am),
        "PM" => Some(Meridiem::Pm),
        _ => None,
    }
}

fn split_clock(clock: &str) -> Option<(i64, i64, i64)> {
    let parts: Vec<&str> = clock.split(':').collect();
    if !(2..=3).contains(&parts.len()) || !parts.iter().all(|p| is_numeric(p)) {
        return None;
    }

    let hour = parts[0].parse().ok()?;
    let minute = parts[1].parse().ok()?;
    let second = match parts.get(2) {
        Some(s) => s.parse().ok()?,
        None => 0,
    };
    Some((hour, minute, second))
}

fn check_range(component: &'static str, value: i64, max: i64) -> Result<(), ParseError> {
    if (0..=max).contains(&value) {
        Ok(())
    } else {
        Err(ParseError::OutOfRange { component, value })
    }
}

fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
