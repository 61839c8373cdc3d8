// Test fixtures - reusable test data
// Slot records shaped like the scheduling system's export

#![allow(dead_code)]

use broadcast_grid::RawEvent;
use chrono::{NaiveDate, NaiveDateTime};

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Wednesday, Jan 15, 2025
    pub fn jan_15_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    /// Tuesday, Jan 14, 2025
    pub fn jan_14_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 14).unwrap()
    }

    pub fn jan_15_at(hour: u32, minute: u32) -> NaiveDateTime {
        jan_15_2025().and_hms_opt(hour, minute, 0).unwrap()
    }
}

/// Sample slot records
pub mod events {
    use super::*;

    pub const CHANNEL: &str = "DAZN 1";

    pub fn slot(id: &str, date: &str, start: &str, duration: &str) -> RawEvent {
        RawEvent {
            id: Some(id.to_string()),
            channel: Some(CHANNEL.to_string()),
            date: Some(date.to_string()),
            start_time: Some(start.to_string()),
            billed_start_time: Some(start.to_string()),
            duration: Some(duration.to_string()),
            name: Some(format!("Program {}", id)),
            genre: Some("Sport".to_string()),
            request_type: Some("program".to_string()),
            ..RawEvent::default()
        }
    }

    /// Early-morning, boundary and late-evening slots on one date.
    pub fn dazn_day() -> Vec<RawEvent> {
        vec![
            slot("1", "01/15/2025", "04:30", "1:00:00"),
            slot("2", "01/15/2025", "05:00", "2:00:00"),
            slot("3", "01/15/2025", "23:50", "0:40:00"),
        ]
    }

    /// An explicit gap in the schedule.
    pub fn no_broadcast(id: &str, start: &str, duration: &str) -> RawEvent {
        RawEvent {
            name: None,
            genre: None,
            slot_name: Some("No broadcast".to_string()),
            request_type: Some("gap".to_string()),
            ..slot(id, "01/15/2025", start, duration)
        }
    }

    /// A promo record the grid must ignore.
    pub fn promo(id: &str) -> RawEvent {
        RawEvent {
            request_type: Some("promo".to_string()),
            ..slot(id, "01/15/2025", "12:00", "0:00:30")
        }
    }
}
