//! "Currently airing" detection and the now-indicator position.
//!
//! The current time is always passed in. The host reads its [`Clock`] on each
//! refresh and calls these functions again; nothing here remembers a previous
//! reading.

use chrono::{Local, NaiveDate, NaiveDateTime};

use crate::models::layout::{EventBlock, GridLayout};
use crate::models::normalized_event::NormalizedEvent;
use crate::models::settings::GridSettings;
use crate::services::broadcast_day::project;

/// Source of the current wall-clock time for the host application.
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Whether `now` lies within `[start, end]`; both ends count as airing.
pub fn is_airing(now: NaiveDateTime, start: NaiveDateTime, end: NaiveDateTime) -> bool {
    now >= start && now <= end
}

impl NormalizedEvent {
    pub fn is_airing_at(&self, now: NaiveDateTime) -> bool {
        is_airing(now, self.instant_start, self.instant_end)
    }
}

/// Blocks of `layout` that are on air at `now`. Placeholder gaps never count.
pub fn airing_now(layout: &GridLayout, now: NaiveDateTime) -> Vec<&EventBlock> {
    layout
        .blocks()
        .filter(|block| !block.event.is_placeholder && block.event.is_airing_at(now))
        .collect()
}

/// Axis position of the now-indicator on the broadcast day `date_key`, or
/// `None` when `now` belongs to another broadcast day.
pub fn current_time_position(
    now: NaiveDateTime,
    date_key: NaiveDate,
    settings: &GridSettings,
) -> Option<f64> {
    let position = project(now, settings.boundary_hour);
    (position.date_key == date_key)
        .then(|| position.offset_minutes * settings.scale_units_per_minute)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::raw_event::RawEvent;
    use crate::services::layout::GridEngine;
    use chrono::Duration;

    fn at(d: u32, h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, d)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn test_is_airing_boundaries_inclusive() {
        let start = at(15, 6, 0);
        let end = at(15, 7, 0);

        assert!(is_airing(start, start, end));
        assert!(is_airing(end, start, end));
        assert!(is_airing(at(15, 6, 30), start, end));
        assert!(!is_airing(end + Duration::milliseconds(1), start, end));
        assert!(!is_airing(start - Duration::milliseconds(1), start, end));
    }

    #[test]
    fn test_current_time_position() {
        let settings = GridSettings::default().with_scale(2.0);
        let day = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();

        assert_eq!(current_time_position(at(15, 6, 0), day, &settings), Some(120.0));
        assert_eq!(
            current_time_position(at(16, 4, 0), day, &settings),
            Some(23.0 * 60.0 * 2.0)
        );
        assert_eq!(current_time_position(at(16, 5, 0), day, &settings), None);
    }

    #[test]
    fn test_airing_now_reads_fresh_clock_each_time() {
        let engine = GridEngine::new(GridSettings::default()).unwrap();
        let batch = vec![
            RawEvent {
                id: Some("1".to_string()),
                channel: Some("A".to_string()),
                date: Some("01/15/2025".to_string()),
                start_time: Some("06:00".to_string()),
                duration: Some("1:00:00".to_string()),
                ..RawEvent::default()
            },
            RawEvent {
                id: Some("2".to_string()),
                channel: Some("A".to_string()),
                date: Some("01/15/2025".to_string()),
                start_time: Some("07:30".to_string()),
                duration: Some("0:30:00".to_string()),
                ..RawEvent::default()
            },
        ];
        let result = engine.layout(&batch);

        let mut clock = MockClock::new();
        let mut readings = vec![at(15, 6, 15), at(15, 7, 45)].into_iter();
        clock
            .expect_now()
            .times(2)
            .returning(move || readings.next().unwrap());

        let first = airing_now(&result.layout, clock.now());
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].event.id, "1");

        let second = airing_now(&result.layout, clock.now());
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].event.id, "2");
    }

    #[test]
    fn test_system_clock_is_close_to_local_now() {
        let now = SystemClock.now();
        let diff = Local::now().naive_local() - now;
        assert!(diff < Duration::seconds(5));
    }
}
