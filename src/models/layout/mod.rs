// Layout module
// Positioned blocks handed to the rendering layer, plus the skip list

use chrono::NaiveDate;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::error::ParseError;
use crate::models::normalized_event::NormalizedEvent;

/// An event with its coordinates on the axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventBlock {
    pub event: NormalizedEvent,
    pub position: f64,
    pub extent: f64,
}

/// Events sharing a channel and broadcast date, sorted by offset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutColumn {
    pub channel: String,
    pub date_key: NaiveDate,
    pub blocks: Vec<EventBlock>,
}

/// One broadcast date of the timeline with a lane per channel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineDay {
    pub date_key: NaiveDate,
    pub channels: Vec<LayoutColumn>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", content = "groups", rename_all = "kebab-case")]
pub enum GridLayout {
    ByChannelDate(Vec<LayoutColumn>),
    ByDateThenChannel(Vec<TimelineDay>),
}

impl GridLayout {
    /// All columns regardless of grouping mode, in output order.
    pub fn columns(&self) -> Vec<&LayoutColumn> {
        match self {
            GridLayout::ByChannelDate(columns) => columns.iter().collect(),
            GridLayout::ByDateThenChannel(days) => {
                days.iter().flat_map(|day| day.channels.iter()).collect()
            }
        }
    }

    pub fn blocks(&self) -> impl Iterator<Item = &EventBlock> {
        self.columns().into_iter().flat_map(|column| column.blocks.iter())
    }
}

/// Why a raw record did not make it onto the grid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SkipReason {
    #[error("missing {0}")]
    MissingField(&'static str),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("event is longer than one broadcast day")]
    SpansMultipleDays,
}

impl SkipReason {
    /// Stable machine-readable code for diagnostics.
    pub fn code(&self) -> &'static str {
        match self {
            SkipReason::MissingField(_) => "missing_field",
            SkipReason::Parse(_) => "parse_error",
            SkipReason::SpansMultipleDays => "spans_multiple_days",
        }
    }
}

impl Serialize for SkipReason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("SkipReason", 2)?;
        state.serialize_field("code", self.code())?;
        state.serialize_field("detail", &self.to_string())?;
        state.end()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedRecord {
    /// Position of the record in the input batch.
    pub index: usize,
    pub id: Option<String>,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutResult {
    pub layout: GridLayout,
    pub skipped: Vec<SkippedRecord>,
}

impl LayoutResult {
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    pub fn block_count(&self) -> usize {
        self.layout.blocks().count()
    }
}
