use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Link button shown under the presence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Button {
    pub label: String,
    pub url: String,
}

impl Button {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

/// Fully resolved presence, ready to send to the remote service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresencePayload {
    pub state: String,
    pub details: String,
    pub large_image: String,
    pub large_text: String,
    pub small_image: String,
    pub small_text: String,
    /// Serialized as unix seconds.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "chrono::serde::ts_seconds_option"
    )]
    pub start_timestamp: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub buttons: Vec<Button>,
}

impl PresencePayload {
    /// Whether the small image slot carries anything.
    pub fn has_small_image(&self) -> bool {
        !self.small_image.is_empty() || !self.small_text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_payload_serializes_timestamp_as_seconds() {
        let payload = PresencePayload {
            state: "Editing main.go".to_string(),
            start_timestamp: Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
            ..Default::default()
        };

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["startTimestamp"], 1_704_067_200_i64);
        assert_eq!(json["largeImage"], "");
        assert!(json.get("buttons").is_none());
    }

    #[test]
    fn test_payload_omits_missing_timestamp() {
        let json = serde_json::to_value(PresencePayload::default()).unwrap();
        assert!(json.get("startTimestamp").is_none());
    }

    #[test]
    fn test_has_small_image() {
        let mut payload = PresencePayload::default();
        assert!(!payload.has_small_image());
        payload.small_text = "Coding in go".to_string();
        assert!(payload.has_small_image());
    }
}
