// Date utility functions
// Week ranges and axis labels for the schedule grid

use chrono::{Datelike, Duration, NaiveDate};

/// Start of the week containing `date`.
///
/// # Arguments
/// * `date` - The date to find the week start for
/// * `first_day_of_week` - 0 = Sunday, 1 = Monday, etc.
pub fn week_start(date: NaiveDate, first_day_of_week: u8) -> NaiveDate {
    let weekday = date.weekday().num_days_from_sunday() as i64;
    let offset = (weekday - first_day_of_week as i64).rem_euclid(7);
    date - Duration::days(offset)
}

/// The seven broadcast dates shown by the weekly schedule grid.
pub fn week_dates(anchor: NaiveDate, first_day_of_week: u8) -> Vec<NaiveDate> {
    let start = week_start(anchor, first_day_of_week);
    (0..7).map(|i| start + Duration::days(i)).collect()
}

/// Wall-clock label (`HH:MM`) for an axis offset, wrapping past midnight.
pub fn format_offset(offset_minutes: f64, boundary_hour: u32) -> String {
    let total = (offset_minutes.floor() as i64 + i64::from(boundary_hour) * 60).rem_euclid(1440);
    format!("{:02}:{:02}", total / 60, total % 60)
}

/// Hour labels for one broadcast day, starting at the boundary.
pub fn axis_hour_labels(boundary_hour: u32) -> Vec<String> {
    (0..24)
        .map(|hour| format!("{:02}:00", (boundary_hour + hour) % 24))
        .collect()
}
