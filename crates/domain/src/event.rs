use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use eventadmin_core::{Credits, EventId, OrganizerId};

/// A budgeted activity owned by one organizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,
    pub organizer_id: OrganizerId,
    pub name: String,
    pub description: String,
    pub organizer_name: String,
    pub organizer_email: String,
    pub budget: Credits,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
}

impl Event {
    /// Attach a freshly assigned identifier to validated fields.
    pub fn from_new(id: EventId, new: NewEvent) -> Self {
        Self {
            id,
            organizer_id: new.organizer_id,
            name: new.name,
            description: new.description,
            organizer_name: new.organizer_name,
            organizer_email: new.organizer_email,
            budget: new.budget,
            start_at: new.start_at,
            end_at: new.end_at,
        }
    }

    pub fn is_owned_by(&self, organizer_id: &OrganizerId) -> bool {
        &self.organizer_id == organizer_id
    }
}

/// Request: createEvent.
///
/// Raw caller input; see [`crate::rules::validate_create_event`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    pub organizer_id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub organizer_name: String,
    #[serde(default)]
    pub organizer_email: String,
    pub budget: i64,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
}

/// Validated event fields, ready to be persisted (no id yet).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub organizer_id: OrganizerId,
    pub name: String,
    pub description: String,
    pub organizer_name: String,
    pub organizer_email: String,
    pub budget: Credits,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_serializes_with_camel_case_fields() {
        let now = Utc::now();
        let event = Event {
            id: EventId::new(),
            organizer_id: OrganizerId::new("organizerId").unwrap(),
            name: "eventName".to_string(),
            description: "description".to_string(),
            organizer_name: "organizerName".to_string(),
            organizer_email: "organizerEmail".to_string(),
            budget: Credits::from_units(100),
            start_at: now,
            end_at: now,
        };

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["organizerId"], "organizerId");
        assert_eq!(json["organizerEmail"], "organizerEmail");
        assert_eq!(json["budget"], 100);
        assert_eq!(json["id"], event.id.to_string());
        assert!(json.get("startAt").is_some());
    }

    #[test]
    fn create_request_defaults_optional_text_fields() {
        let req: CreateEventRequest = serde_json::from_value(serde_json::json!({
            "organizerId": "organizerId",
            "name": "eventName",
            "budget": 100,
            "startAt": "2024-01-01T00:00:00Z",
            "endAt": "2024-01-02T00:00:00Z",
        }))
        .unwrap();
        assert!(req.description.is_empty());
        assert!(req.organizer_email.is_empty());
        assert_eq!(req.budget, 100);
    }
}
