// Settings module
// Layout engine configuration, stored as TOML

use serde::{Deserialize, Serialize};

use crate::error::GridError;

/// Default hour at which a broadcast day starts.
pub const DEFAULT_BOUNDARY_HOUR: u32 = 5;

/// Length of one broadcast day on the axis.
pub const MINUTES_PER_BROADCAST_DAY: f64 = 1440.0;

/// How normalized events are partitioned before layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GroupingMode {
    /// Schedule grid: one column per (channel, broadcast date).
    #[default]
    ByChannelDate,
    /// Timeline: one section per broadcast date, one lane per channel inside it.
    ByDateThenChannel,
}

impl GroupingMode {
    /// Whether every event must fit on a single broadcast-day axis.
    pub fn is_single_day(&self) -> bool {
        matches!(self, GroupingMode::ByDateThenChannel)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    pub boundary_hour: u32,
    pub grouping_mode: GroupingMode,
    pub scale_units_per_minute: f64,
    pub minimum_event_extent: f64,
    /// `requestType` tag marking a real program slot.
    pub program_request_type: String,
    /// Slot name the scheduling system uses for an explicitly empty slot.
    pub no_broadcast_name: String,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            boundary_hour: DEFAULT_BOUNDARY_HOUR,
            grouping_mode: GroupingMode::ByChannelDate,
            scale_units_per_minute: 1.0,
            minimum_event_extent: 10.0,
            program_request_type: "program".to_string(),
            no_broadcast_name: "No broadcast".to_string(),
        }
    }
}

impl GridSettings {
    /// Validate the settings
    pub fn validate(&self) -> Result<(), GridError> {
        if self.boundary_hour > 23 {
            return Err(GridError::Configuration(format!(
                "boundary hour must be between 0 and 23, got {}",
                self.boundary_hour
            )));
        }

        if !self.scale_units_per_minute.is_finite() || self.scale_units_per_minute <= 0.0 {
            return Err(GridError::Configuration(format!(
                "scale must be a positive number, got {}",
                self.scale_units_per_minute
            )));
        }

        if !self.minimum_event_extent.is_finite() || self.minimum_event_extent < 0.0 {
            return Err(GridError::Configuration(format!(
                "minimum event extent must not be negative, got {}",
                self.minimum_event_extent
            )));
        }

        if self.program_request_type.trim().is_empty() {
            return Err(GridError::Configuration(
                "program request type cannot be empty".to_string(),
            ));
        }

        if self.no_broadcast_name.trim().is_empty() {
            return Err(GridError::Configuration(
                "no-broadcast slot name cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    pub fn with_grouping_mode(mut self, mode: GroupingMode) -> Self {
        self.grouping_mode = mode;
        self
    }

    pub fn with_scale(mut self, scale_units_per_minute: f64) -> Self {
        self.scale_units_per_minute = scale_units_per_minute;
        self
    }

    pub fn with_minimum_extent(mut self, minimum_event_extent: f64) -> Self {
        self.minimum_event_extent = minimum_event_extent;
        self
    }

    pub fn from_toml(content: &str) -> Result<Self, GridError> {
        let settings: GridSettings = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
