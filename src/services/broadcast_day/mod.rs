//! Projection of instants onto the broadcast-day axis.
//!
//! A broadcast day runs from the boundary hour (05:00) to the same hour on the
//! next calendar day. Anything airing before the boundary belongs to the
//! previous evening's programming.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::models::settings::MINUTES_PER_BROADCAST_DAY;

/// Where an instant falls on the broadcast-day axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BroadcastPosition {
    pub date_key: NaiveDate,
    /// Minutes since the boundary of `date_key`, in `[0, 1440)`.
    pub offset_minutes: f64,
}

/// Project an instant onto its broadcast day.
pub fn project(instant: NaiveDateTime, boundary_hour: u32) -> BroadcastPosition {
    let time = instant.time();
    let mut hour = time.hour();
    let mut date_key = instant.date();

    if hour < boundary_hour {
        hour += 24;
        date_key = date_key.pred_opt().unwrap_or(date_key);
    }

    let offset_minutes = (i64::from(hour) - i64::from(boundary_hour)) as f64 * 60.0
        + f64::from(time.minute())
        + f64::from(time.second()) / 60.0
        + f64::from(time.nanosecond()) / 60_000_000_000.0;

    BroadcastPosition {
        date_key,
        offset_minutes,
    }
}

/// The instant at which the broadcast day `date_key` starts.
pub fn boundary_of(date_key: NaiveDate, boundary_hour: u32) -> NaiveDateTime {
    let boundary = NaiveTime::from_hms_opt(boundary_hour.min(23), 0, 0).unwrap_or(NaiveTime::MIN);
    date_key.and_time(boundary)
}

/// Offset of `position` on an axis that starts at the boundary of `axis_start`
/// and spans several broadcast days.
pub fn axis_offset(position: &BroadcastPosition, axis_start: NaiveDate) -> f64 {
    let days = (position.date_key - axis_start).num_days() as f64;
    days * MINUTES_PER_BROADCAST_DAY + position.offset_minutes
}

/// Broadcast day dates covering `[first, last]` inclusive.
pub fn broadcast_days(first: NaiveDate, last: NaiveDate) -> Vec<NaiveDate> {
    let mut days = Vec::new();
    let mut current = first;
    while current <= last {
        days.push(current);
        current += Duration::days(1);
    }
    days
}
