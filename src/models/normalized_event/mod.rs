// Normalized event module
// An event placed on the broadcast-day axis

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::Serialize;

/// Event with absolute start/end instants and broadcast-day offsets.
///
/// Built once by the normalizer and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedEvent {
    pub id: String,
    pub channel: String,
    /// Broadcast date the event is grouped under. Events starting before the
    /// day boundary belong to the previous calendar date.
    pub date_key: NaiveDate,
    pub instant_start: NaiveDateTime,
    pub instant_end: NaiveDateTime,
    /// Minutes since the boundary of `date_key`, in `[0, 1440)`.
    pub broadcast_offset_minutes: f64,
    /// Minutes from the same boundary to the end; exceeds 1440 when the
    /// event runs into the next broadcast day.
    pub end_offset_minutes: f64,
    pub duration_minutes: f64,
    pub name: String,
    pub genre: Option<String>,
    pub category: Option<String>,
    pub premiere: Option<String>,
    pub billed_start: Option<NaiveDateTime>,
    /// "No broadcast" gap rendered as a placeholder block.
    pub is_placeholder: bool,
}

impl NormalizedEvent {
    pub fn duration(&self) -> Duration {
        self.instant_end - self.instant_start
    }

    pub fn is_premiere(&self) -> bool {
        self.premiere
            .as_deref()
            .map(|marker| !marker.trim().is_empty())
            .unwrap_or(false)
    }
}
