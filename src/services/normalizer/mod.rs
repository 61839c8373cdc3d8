//! Turns raw slot records into events placed on the broadcast-day axis.

use chrono::Duration;

use crate::error::ParseError;
use crate::models::layout::SkipReason;
use crate::models::normalized_event::NormalizedEvent;
use crate::models::raw_event::RawEvent;
use crate::models::settings::{GridSettings, MINUTES_PER_BROADCAST_DAY};
use crate::services::broadcast_day::{axis_offset, project};
use crate::services::parser::{parse_duration, parse_instant};

/// Normalize one record.
///
/// Returns `Ok(None)` for records that are not program slots (unless they are
/// "no broadcast" gaps, which become placeholder blocks) and `Err` with the
/// reason for records that cannot be placed on the axis.
pub fn normalize(
    raw: &RawEvent,
    settings: &GridSettings,
) -> Result<Option<NormalizedEvent>, SkipReason> {
    let is_placeholder = raw.is_no_broadcast(&settings.no_broadcast_name);

    if !is_placeholder && !is_program(raw, settings) {
        log::trace!(
            "Ignoring record {:?} with request type {:?}",
            raw.id,
            raw.request_type
        );
        return Ok(None);
    }

    let date = RawEvent::field(&raw.date).ok_or(SkipReason::MissingField("date"))?;
    let start_time =
        RawEvent::field(&raw.start_time).ok_or(SkipReason::MissingField("start time"))?;
    let duration_text =
        RawEvent::field(&raw.duration).ok_or(SkipReason::MissingField("duration"))?;

    let instant_start = parse_instant(date, start_time)?;
    let duration = parse_duration(duration_text)?;

    if settings.grouping_mode.is_single_day() && duration > Duration::days(1) {
        return Err(SkipReason::SpansMultipleDays);
    }

    let instant_end = instant_start
        .checked_add_signed(duration)
        .ok_or_else(|| ParseError::InvalidDuration(duration_text.to_string()))?;
    let start = project(instant_start, settings.boundary_hour);
    let end = project(instant_end, settings.boundary_hour);

    // Measured from the start's boundary, so an event crossing into the next
    // broadcast day ends past 1440 instead of wrapping.
    let end_offset_minutes = axis_offset(&end, start.date_key);
    debug_assert!(end_offset_minutes >= start.offset_minutes);

    let billed_start = RawEvent::field(&raw.billed_start_time).and_then(|billed| {
        parse_instant(date, billed)
            .map_err(|err| log::debug!("Ignoring billed start of {:?}: {}", raw.id, err))
            .ok()
    });

    let name = if is_placeholder {
        settings.no_broadcast_name.clone()
    } else {
        raw.display_name()
    };

    Ok(Some(NormalizedEvent {
        id: RawEvent::field(&raw.id).unwrap_or_default().to_string(),
        channel: RawEvent::field(&raw.channel).unwrap_or_default().to_string(),
        date_key: start.date_key,
        instant_start,
        instant_end,
        broadcast_offset_minutes: start.offset_minutes,
        end_offset_minutes,
        duration_minutes: duration.num_milliseconds() as f64 / 60_000.0,
        name,
        genre: raw.genre.clone(),
        category: raw.category.clone(),
        premiere: raw.premiere.clone(),
        billed_start,
        is_placeholder,
    }))
}

/// Records without a request type are treated as program slots.
fn is_program(raw: &RawEvent, settings: &GridSettings) -> bool {
    match RawEvent::field(&raw.request_type) {
        Some(kind) => kind.eq_ignore_ascii_case(settings.program_request_type.trim()),
        None => true,
    }
}

/// Whether an event fits within a single broadcast day axis.
pub fn fits_single_day(event: &NormalizedEvent) -> bool {
    (0.0..MINUTES_PER_BROADCAST_DAY).contains(&event.broadcast_offset_minutes)
}
