// Raw event module
// One slot record as delivered by the scheduling system's proxy

use serde::{Deserialize, Deserializer, Serialize};

/// Unprocessed slot record. Every field is an opaque string from the upstream
/// serialization; nothing here is validated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawEvent {
    #[serde(deserialize_with = "string_or_number")]
    pub id: Option<String>,
    #[serde(alias = "channelName")]
    pub channel: Option<String>,
    /// Broadcast date, `MM/DD/YYYY`.
    #[serde(alias = "broadcastDate")]
    pub date: Option<String>,
    /// Nominal start, either `HH:MM[:SS]` or a full `MM/DD/YYYY h:mm:ss AM|PM` stamp.
    #[serde(alias = "nominalStartTime")]
    pub start_time: Option<String>,
    pub billed_start_time: Option<String>,
    pub duration: Option<String>,
    #[serde(alias = "programName")]
    pub name: Option<String>,
    pub series_name: Option<String>,
    pub genre: Option<String>,
    pub category: Option<String>,
    /// Premiere marker such as "first airing" or "exclusive".
    pub premiere: Option<String>,
    pub slot_name: Option<String>,
    pub request_type: Option<String>,
}

impl RawEvent {
    /// Whether the slot is an explicit "no broadcast" gap.
    pub fn is_no_broadcast(&self, sentinel: &str) -> bool {
        self.slot_name
            .as_deref()
            .map(|name| name.trim().eq_ignore_ascii_case(sentinel.trim()))
            .unwrap_or(false)
    }

    /// Program name, falling back to the series and then the slot name.
    pub fn display_name(&self) -> String {
        [&self.name, &self.series_name, &self.slot_name]
            .into_iter()
            .flatten()
            .map(|s| s.trim())
            .find(|s| !s.is_empty())
            .unwrap_or_default()
            .to_string()
    }

    /// A trimmed, non-empty field value.
    pub(crate) fn field(value: &Option<String>) -> Option<&str> {
        value.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }
}

/// Upstream ids arrive as JSON numbers or strings depending on the export path.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case_record() {
        let json = r#"{
            "id": 4711,
            "channelName": "DAZN 1",
            "broadcastDate": "01/15/2025",
            "startTime": "12/30/1899 11:50:00 PM",
            "billedStartTime": "23:50:00",
            "duration": "0:40:00",
            "programName": "Late Kick",
            "genre": "Sport",
            "premiere": "first airing",
            "requestType": "program"
        }"#;

        let raw: RawEvent = serde_json::from_str(json).unwrap();
        assert_eq!(raw.id.as_deref(), Some("4711"));
        assert_eq!(raw.channel.as_deref(), Some("DAZN 1"));
        assert_eq!(raw.date.as_deref(), Some("01/15/2025"));
        assert_eq!(raw.start_time.as_deref(), Some("12/30/1899 11:50:00 PM"));
        assert_eq!(raw.billed_start_time.as_deref(), Some("23:50:00"));
        assert_eq!(raw.name.as_deref(), Some("Late Kick"));
        assert!(raw.series_name.is_none());
    }

    #[test]
    fn test_string_id_kept() {
        let raw: RawEvent = serde_json::from_str(r#"{"id": "A-12"}"#).unwrap();
        assert_eq!(raw.id.as_deref(), Some("A-12"));
    }

    #[test]
    fn test_is_no_broadcast_case_insensitive() {
        let raw = RawEvent {
            slot_name: Some(" no broadcast ".to_string()),
            ..RawEvent::default()
        };
        assert!(raw.is_no_broadcast("No broadcast"));
        assert!(!RawEvent::default().is_no_broadcast("No broadcast"));
    }

    #[test]
    fn test_display_name_fallbacks() {
        let mut raw = RawEvent {
            series_name: Some("Series".to_string()),
            slot_name: Some("Slot".to_string()),
            ..RawEvent::default()
        };
        assert_eq!(raw.display_name(), "Series");

        raw.name = Some("  ".to_string());
        assert_eq!(raw.display_name(), "Series");

        raw.name = Some("Program".to_string());
        assert_eq!(raw.display_name(), "Program");

        assert_eq!(RawEvent::default().display_name(), "");
    }
}
