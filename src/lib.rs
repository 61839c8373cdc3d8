// Broadcast Grid Library
// Time-grid layout engine for broadcast schedule and timeline views

pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use error::{GridError, GridResult, ParseError};
pub use models::layout::{GridLayout, LayoutResult, SkipReason, SkippedRecord};
pub use models::normalized_event::NormalizedEvent;
pub use models::raw_event::RawEvent;
pub use models::settings::{GridSettings, GroupingMode};
pub use services::airing::{is_airing, Clock, SystemClock};
pub use services::filter::EventFilter;
pub use services::layout::GridEngine;
