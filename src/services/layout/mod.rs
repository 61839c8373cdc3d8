//! Layout coordinate mapping and the batch engine.
//!
//! `position = offset * scale` and `extent = max(duration * scale, minimum)`.
//! Concurrent events in the same column are not laned; they overlap.

use chrono::NaiveDate;

use crate::error::GridError;
use crate::models::layout::{
    EventBlock, GridLayout, LayoutColumn, LayoutResult, SkippedRecord, TimelineDay,
};
use crate::models::normalized_event::NormalizedEvent;
use crate::models::raw_event::RawEvent;
use crate::models::settings::{GridSettings, GroupingMode, MINUTES_PER_BROADCAST_DAY};
use crate::services::broadcast_day::{axis_offset, BroadcastPosition};
use crate::services::filter::EventFilter;
use crate::services::grouping::{group_by_channel_date, group_by_date_then_channel};
use crate::services::normalizer::{fits_single_day, normalize};

/// Map an already sorted column to axis coordinates.
pub fn map_column(events: Vec<NormalizedEvent>, settings: &GridSettings) -> Vec<EventBlock> {
    let scale = settings.scale_units_per_minute;
    events
        .into_iter()
        .map(|event| {
            let position = event.broadcast_offset_minutes * scale;
            let extent = (event.duration_minutes * scale).max(settings.minimum_event_extent);
            EventBlock {
                event,
                position,
                extent,
            }
        })
        .collect()
}

/// Position of an event on a week-wide axis starting at the boundary of `axis_start`.
pub fn multi_day_position(event: &NormalizedEvent, axis_start: NaiveDate, scale: f64) -> f64 {
    let position = BroadcastPosition {
        date_key: event.date_key,
        offset_minutes: event.broadcast_offset_minutes,
    };
    axis_offset(&position, axis_start) * scale
}

/// Length of one broadcast day in axis units.
pub fn axis_length(settings: &GridSettings) -> f64 {
    MINUTES_PER_BROADCAST_DAY * settings.scale_units_per_minute
}

/// Stateless layout engine; build a fresh result for every query.
#[derive(Debug, Clone)]
pub struct GridEngine {
    settings: GridSettings,
}

impl GridEngine {
    /// Create an engine, rejecting invalid settings.
    pub fn new(settings: GridSettings) -> Result<Self, GridError> {
        settings.validate()?;
        Ok(Self { settings })
    }

    pub fn settings(&self) -> &GridSettings {
        &self.settings
    }

    pub fn layout(&self, batch: &[RawEvent]) -> LayoutResult {
        self.layout_filtered(batch, &EventFilter::default())
    }

    pub fn layout_filtered(&self, batch: &[RawEvent], filter: &EventFilter) -> LayoutResult {
        let (events, skipped) = self.normalize_batch(batch);
        let events = filter.apply(&events);

        log::debug!(
            "Laying out {} of {} records ({} skipped)",
            events.len(),
            batch.len(),
            skipped.len()
        );

        LayoutResult {
            layout: self.arrange(events),
            skipped,
        }
    }

    /// Normalize every record, collecting the ones that cannot be placed.
    pub fn normalize_batch(&self, batch: &[RawEvent]) -> (Vec<NormalizedEvent>, Vec<SkippedRecord>) {
        let mut events = Vec::with_capacity(batch.len());
        let mut skipped = Vec::new();

        for (index, raw) in batch.iter().enumerate() {
            match normalize(raw, &self.settings) {
                Ok(Some(event)) => events.push(event),
                Ok(None) => {}
                Err(reason) => {
                    log::warn!("Skipping record {} ({:?}): {}", index, raw.id, reason);
                    skipped.push(SkippedRecord {
                        index,
                        id: raw.id.clone(),
                        reason,
                    });
                }
            }
        }

        (events, skipped)
    }

    fn arrange(&self, events: Vec<NormalizedEvent>) -> GridLayout {
        match self.settings.grouping_mode {
            GroupingMode::ByChannelDate => GridLayout::ByChannelDate(
                group_by_channel_date(events)
                    .into_iter()
                    .map(|((channel, date_key), column)| LayoutColumn {
                        channel,
                        date_key,
                        blocks: map_column(column, &self.settings),
                    })
                    .collect(),
            ),
            GroupingMode::ByDateThenChannel => {
                debug_assert!(events.iter().all(fits_single_day));
                GridLayout::ByDateThenChannel(
                    group_by_date_then_channel(events)
                        .into_iter()
                        .map(|(date_key, channels)| TimelineDay {
                            date_key,
                            channels: channels
                                .into_iter()
                                .map(|(channel, column)| LayoutColumn {
                                    channel,
                                    date_key,
                                    blocks: map_column(column, &self.settings),
                                })
                                .collect(),
                        })
                        .collect(),
                )
            }
        }
    }
}
