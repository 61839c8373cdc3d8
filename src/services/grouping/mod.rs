//! Partitioning and ordering of normalized events.
//!
//! Upstream ordering is not stable, so every group is sorted with a total
//! order: start offset, then event id, then end offset and name. Duplicate ids
//! are kept; they simply render as overlapping blocks.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::normalized_event::NormalizedEvent;

/// Schedule grid groups keyed by (channel, broadcast date).
pub type ChannelDateGroups = BTreeMap<(String, NaiveDate), Vec<NormalizedEvent>>;

/// Timeline groups keyed by broadcast date, then channel.
pub type DateChannelGroups = BTreeMap<NaiveDate, BTreeMap<String, Vec<NormalizedEvent>>>;

pub fn group_by_channel_date(events: Vec<NormalizedEvent>) -> ChannelDateGroups {
    let mut groups = ChannelDateGroups::new();
    for event in events {
        groups
            .entry((event.channel.clone(), event.date_key))
            .or_default()
            .push(event);
    }
    groups.values_mut().for_each(|column| sort_column(column));
    groups
}

pub fn group_by_date_then_channel(events: Vec<NormalizedEvent>) -> DateChannelGroups {
    let mut groups = DateChannelGroups::new();
    for event in events {
        groups
            .entry(event.date_key)
            .or_default()
            .entry(event.channel.clone())
            .or_default()
            .push(event);
    }
    groups
        .values_mut()
        .flat_map(|channels| channels.values_mut())
        .for_each(|column| sort_column(column));
    groups
}

pub fn sort_column(events: &mut [NormalizedEvent]) {
    events.sort_by(compare_events);
}

pub fn compare_events(a: &NormalizedEvent, b: &NormalizedEvent) -> Ordering {
    a.broadcast_offset_minutes
        .total_cmp(&b.broadcast_offset_minutes)
        .then_with(|| compare_ids(&a.id, &b.id))
        .then_with(|| a.end_offset_minutes.total_cmp(&b.end_offset_minutes))
        .then_with(|| a.name.cmp(&b.name))
}

/// Numeric ids sort numerically and before any non-numeric id; the rest sort
/// lexicographically.
pub fn compare_ids(a: &str, b: &str) -> Ordering {
    id_key(a).cmp(&id_key(b))
}

fn id_key(id: &str) -> (bool, u64, &str) {
    match id.parse::<u64>() {
        Ok(n) => (false, n, id),
        Err(_) => (true, 0, id),
    }
}
