//! Budgeted-event domain module.
//!
//! This crate contains the entities and business rules for events, their users
//! and their item catalog, implemented purely as deterministic domain logic (no
//! IO, no HTTP, no storage).

pub mod event;
pub mod item;
pub mod rules;
pub mod user;

pub use event::{CreateEventRequest, Event, NewEvent};
pub use item::{AddItemRequest, Item, NewItem};
pub use rules::{
    BudgetSummary, check_budget, check_item_belongs, check_ownership, summarize_budget,
    validate_add_item, validate_add_user, validate_create_event,
};
pub use user::{AddUserRequest, NewUser, User};
