use chrono::{DateTime, Utc};
use serde::Deserialize;

use eventadmin_core::{EventId, OrganizerId};
use eventadmin_domain::{AddItemRequest, AddUserRequest, CreateEventRequest};

// -------------------------
// Request DTOs
// -------------------------
//
// The organizer comes from the request context and the event from the path, so
// bodies carry neither.

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventBody {
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

impl CreateEventBody {
    pub fn into_request(self, organizer_id: &OrganizerId) -> CreateEventRequest {
        CreateEventRequest {
            organizer_id: organizer_id.to_string(),
            name: self.name,
            description: self.description,
            organizer_name: self.organizer_name,
            organizer_email: self.organizer_email,
            budget: self.budget,
            start_at: self.start_at,
            end_at: self.end_at,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddUserBody {
    pub user_name: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub initial_credits: i64,
}

impl AddUserBody {
    pub fn into_request(self, event_id: EventId) -> AddUserRequest {
        AddUserRequest {
            event_id,
            user_name: self.user_name,
            name: self.name,
            email: self.email,
            initial_credits: self.initial_credits,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddItemBody {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub image_src: String,
    pub price: i64,
    pub name: String,
}

impl AddItemBody {
    pub fn into_request(self, event_id: EventId) -> AddItemRequest {
        AddItemRequest {
            event_id,
            url: self.url,
            image_src: self.image_src,
            price: self.price,
            name: self.name,
        }
    }
}
