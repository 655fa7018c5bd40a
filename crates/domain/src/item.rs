use serde::{Deserialize, Serialize};

use eventadmin_core::{Credits, EventId, ItemId};

/// A purchasable catalog entry scoped to an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub event_id: EventId,
    pub url: String,
    pub image_src: String,
    pub price: Credits,
    pub name: String,
}

impl Item {
    pub fn from_new(id: ItemId, new: NewItem) -> Self {
        Self {
            id,
            event_id: new.event_id,
            url: new.url,
            image_src: new.image_src,
            price: new.price,
            name: new.name,
        }
    }
}

/// Request: addItem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddItemRequest {
    pub event_id: EventId,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub image_src: String,
    pub price: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub event_id: EventId,
    pub url: String,
    pub image_src: String,
    pub price: Credits,
    pub name: String,
}
