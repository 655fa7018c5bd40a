use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use eventadmin_core::{EventId, ItemId, OrganizerId, UserId};
use eventadmin_domain::{Event, Item, NewEvent, NewItem, NewUser, User};

/// Data provider operation error.
///
/// These are **infrastructure errors**; "not found" is not one of them; lookups
/// answer `Ok(None)` and deletes answer `Ok(false)` so the caller decides what a
/// missing entity means.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProviderError {
    #[error("storage failure: {0}")]
    Storage(String),
}

pub type ProviderResult<T> = Result<T, ProviderError>;

/// Event repository.
///
/// `create` assigns the identifier. Listings come back in creation order.
#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn create(&self, event: NewEvent) -> ProviderResult<Event>;

    async fn get(&self, id: &EventId) -> ProviderResult<Option<Event>>;

    async fn list_by_organizer(&self, organizer_id: &OrganizerId) -> ProviderResult<Vec<Event>>;
}

/// User repository.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: NewUser) -> ProviderResult<User>;

    async fn get(&self, id: &UserId) -> ProviderResult<Option<User>>;

    async fn list_by_event(&self, event_id: &EventId) -> ProviderResult<Vec<User>>;
}

/// Item repository. The only kind that supports deletion.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    async fn create(&self, item: NewItem) -> ProviderResult<Item>;

    async fn get(&self, id: &ItemId) -> ProviderResult<Option<Item>>;

    async fn list_by_event(&self, event_id: &EventId) -> ProviderResult<Vec<Item>>;

    /// Returns `false` when no item had that id.
    async fn delete(&self, id: &ItemId) -> ProviderResult<bool>;
}

/// The three repositories, bound to one shared backend.
#[derive(Clone)]
pub struct DataProviders {
    pub events: Arc<dyn EventRepository>,
    pub users: Arc<dyn UserRepository>,
    pub items: Arc<dyn ItemRepository>,
}

impl core::fmt::Debug for DataProviders {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DataProviders").finish_non_exhaustive()
    }
}

/// Wires a [`DataProviders`] set over a storage backend.
pub trait ProviderFactory: Send + Sync {
    fn create_providers(&self) -> DataProviders;
}
