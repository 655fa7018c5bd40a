use axum::{
    routing::{delete, get},
    Router,
};

pub mod events;
pub mod items;
pub mod system;
pub mod users;

/// Router for all organizer-scoped endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/events", get(events::list_events).post(events::create_event))
        .route("/events/:event_id", get(events::get_event))
        .route("/events/:event_id/budget", get(events::budget_summary))
        .route("/events/:event_id/users", get(users::list_users).post(users::add_user))
        .route("/events/:event_id/items", get(items::list_items).post(items::add_item))
        .route("/events/:event_id/items/:item_id", delete(items::remove_item))
}
