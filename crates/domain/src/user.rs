use serde::{Deserialize, Serialize};

use eventadmin_core::{Credits, EventId, UserId};

/// A participant registered to an event with credits drawn from its budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub event_id: EventId,
    pub user_name: String,
    pub name: String,
    pub email: String,
    pub initial_credits: Credits,
}

impl User {
    pub fn from_new(id: UserId, new: NewUser) -> Self {
        Self {
            id,
            event_id: new.event_id,
            user_name: new.user_name,
            name: new.name,
            email: new.email,
            initial_credits: new.initial_credits,
        }
    }
}

/// Request: addUser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddUserRequest {
    pub event_id: EventId,
    pub user_name: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub initial_credits: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub event_id: EventId,
    pub user_name: String,
    pub name: String,
    pub email: String,
    pub initial_credits: Credits,
}
