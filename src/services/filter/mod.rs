// Filter module
// Narrows the normalized batch the way the dashboard's filter panel does

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::normalized_event::NormalizedEvent;

/// Filter criteria. Empty lists match everything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventFilter {
    pub channels: Vec<String>,
    pub genres: Vec<String>,
    /// First broadcast date to keep (inclusive).
    pub date_from: Option<NaiveDate>,
    /// Last broadcast date to keep (inclusive).
    pub date_to: Option<NaiveDate>,
    pub premieres_only: bool,
    pub include_placeholders: bool,
}

impl Default for EventFilter {
    fn default() -> Self {
        Self {
            channels: Vec::new(),
            genres: Vec::new(),
            date_from: None,
            date_to: None,
            premieres_only: false,
            include_placeholders: true,
        }
    }
}

impl EventFilter {
    pub fn matches(&self, event: &NormalizedEvent) -> bool {
        if event.is_placeholder && !self.include_placeholders {
            return false;
        }

        if !self.channels.is_empty()
            && !self
                .channels
                .iter()
                .any(|channel| channel.eq_ignore_ascii_case(&event.channel))
        {
            return false;
        }

        if self.date_from.is_some_and(|from| event.date_key < from)
            || self.date_to.is_some_and(|to| event.date_key > to)
        {
            return false;
        }

        // Placeholders carry no genre or premiere marker but still mark gaps.
        if event.is_placeholder {
            return true;
        }

        if !self.genres.is_empty() {
            let Some(genre) = event.genre.as_deref() else {
                return false;
            };
            if !self.genres.iter().any(|g| g.eq_ignore_ascii_case(genre.trim())) {
                return false;
            }
        }

        !self.premieres_only || event.is_premiere()
    }

    /// Apply the filter, producing a new batch.
    pub fn apply(&self, events: &[NormalizedEvent]) -> Vec<NormalizedEvent> {
        events.iter().filter(|e| self.matches(e)).cloned().collect()
    }
}
