//! Admin API: the single entry point for event, user and item operations.
//!
//! Every operation follows the same pipeline:
//!
//! ```text
//! caller
//!   ↓
//! 1. ownership check (parent event must belong to the caller)
//!   ↓
//! 2. (mutations) take the event's write lock, load referenced aggregates
//!   ↓
//! 3. domain validators (eventadmin_domain::rules)
//!   ↓
//! 4. single write through the data provider
//! ```
//!
//! A failed step returns before any write, so an operation either persists
//! exactly once or not at all. Nothing is cached between calls; the data
//! provider is the only source of truth.

use async_trait::async_trait;
use tracing::Instrument;

use eventadmin_core::{DomainError, EventId, ItemId, OrganizerId};
use eventadmin_domain::{
    AddItemRequest, AddUserRequest, BudgetSummary, CreateEventRequest, Event, Item, User, rules,
};
use eventadmin_infra::{DataProviders, ProviderFactory};

pub mod error;
pub mod locks;

pub use error::{AdminError, AdminResult};
pub use locks::EventWriteLocks;

/// Admin operations available to an (already authenticated) organizer.
#[async_trait]
pub trait AdminApi: Send + Sync {
    /// Persist a new event. No ownership check: the request names its organizer.
    async fn create_event(&self, request: CreateEventRequest) -> AdminResult<Event>;

    async fn get_event(&self, organizer_id: &OrganizerId, event_id: &EventId) -> AdminResult<Event>;

    /// Events of `organizer_id` in creation order; empty when there are none.
    async fn list_events(&self, organizer_id: &OrganizerId) -> AdminResult<Vec<Event>>;

    /// Register a user, drawing `initial_credits` from the event budget.
    async fn add_user(&self, organizer_id: &OrganizerId, request: AddUserRequest) -> AdminResult<User>;

    async fn list_users(&self, organizer_id: &OrganizerId, event_id: &EventId) -> AdminResult<Vec<User>>;

    async fn add_item(&self, organizer_id: &OrganizerId, request: AddItemRequest) -> AdminResult<Item>;

    async fn list_items(&self, organizer_id: &OrganizerId, event_id: &EventId) -> AdminResult<Vec<Item>>;

    /// Delete an item of `event_id`. Unknown items are `NotFound`, items of
    /// another event are `ForeignMismatch`.
    async fn remove_item(
        &self,
        organizer_id: &OrganizerId,
        event_id: &EventId,
        item_id: &ItemId,
    ) -> AdminResult<()>;

    async fn budget_summary(
        &self,
        organizer_id: &OrganizerId,
        event_id: &EventId,
    ) -> AdminResult<BudgetSummary>;
}

/// [`AdminApi`] over a set of data providers.
#[derive(Debug)]
pub struct AdminService {
    providers: DataProviders,
    locks: EventWriteLocks,
}

impl AdminService {
    /// Wire the service to freshly created providers.
    pub fn new<F>(factory: &F) -> Self
    where
        F: ProviderFactory + ?Sized,
    {
        Self::from_providers(factory.create_providers())
    }

    pub fn from_providers(providers: DataProviders) -> Self {
        Self {
            providers,
            locks: EventWriteLocks::new(),
        }
    }

    async fn owned_event(&self, organizer_id: &OrganizerId, event_id: &EventId) -> AdminResult<Event> {
        let event = self
            .providers
            .events
            .get(event_id)
            .await?
            .ok_or(DomainError::NotFound)?;
        rules::check_ownership(&event, organizer_id)?;
        Ok(event)
    }

    async fn insert_user(&self, organizer_id: &OrganizerId, request: AddUserRequest) -> AdminResult<User> {
        let event = self.owned_event(organizer_id, &request.event_id).await?;
        let new_user = rules::validate_add_user(request)?;

        let _guard = self.locks.acquire(event.id).await;
        let existing = self.providers.users.list_by_event(&event.id).await?;
        rules::check_budget(&event, &existing, new_user.initial_credits)?;

        let user = self.providers.users.create(new_user).await?;
        tracing::info!(
            user_id = %user.id,
            initial_credits = %user.initial_credits,
            "user added"
        );
        Ok(user)
    }

    async fn insert_item(&self, organizer_id: &OrganizerId, request: AddItemRequest) -> AdminResult<Item> {
        let event = self.owned_event(organizer_id, &request.event_id).await?;
        let new_item = rules::validate_add_item(request)?;

        let _guard = self.locks.acquire(event.id).await;
        let item = self.providers.items.create(new_item).await?;
        tracing::info!(item_id = %item.id, price = %item.price, "item added");
        Ok(item)
    }

    async fn delete_item(
        &self,
        organizer_id: &OrganizerId,
        event_id: &EventId,
        item_id: &ItemId,
    ) -> AdminResult<()> {
        let event = self.owned_event(organizer_id, event_id).await?;

        let _guard = self.locks.acquire(event.id).await;
        let item = self
            .providers
            .items
            .get(item_id)
            .await?
            .ok_or(DomainError::NotFound)?;
        rules::check_item_belongs(&item, &event.id)?;

        if !self.providers.items.delete(item_id).await? {
            return Err(AdminError::NotFound);
        }
        tracing::info!("item removed");
        Ok(())
    }
}

fn log_outcome<T>(operation: &'static str, result: &AdminResult<T>) {
    match result {
        Err(err) if err.is_rule_rejection() => {
            tracing::warn!(operation, error = %err, "operation rejected");
        }
        Err(AdminError::Provider(err)) => {
            tracing::error!(operation, error = %err, "data provider failure");
        }
        Err(err) => {
            tracing::debug!(operation, error = %err, "operation failed");
        }
        Ok(_) => {}
    }
}

#[async_trait]
impl AdminApi for AdminService {
    async fn create_event(&self, request: CreateEventRequest) -> AdminResult<Event> {
        let span = tracing::info_span!("create_event", organizer_id = %request.organizer_id);
        let result = async {
            let new_event = rules::validate_create_event(request)?;
            let event = self.providers.events.create(new_event).await?;
            tracing::info!(event_id = %event.id, budget = %event.budget, "event created");
            Ok::<_, AdminError>(event)
        }
        .instrument(span)
        .await;
        log_outcome("create_event", &result);
        result
    }

    async fn get_event(&self, organizer_id: &OrganizerId, event_id: &EventId) -> AdminResult<Event> {
        let span = tracing::debug_span!("get_event", %organizer_id, %event_id);
        let result = self.owned_event(organizer_id, event_id).instrument(span).await;
        log_outcome("get_event", &result);
        result
    }

    async fn list_events(&self, organizer_id: &OrganizerId) -> AdminResult<Vec<Event>> {
        let result = self
            .providers
            .events
            .list_by_organizer(organizer_id)
            .instrument(tracing::debug_span!("list_events", %organizer_id))
            .await
            .map_err(AdminError::from);
        log_outcome("list_events", &result);
        result
    }

    async fn add_user(&self, organizer_id: &OrganizerId, request: AddUserRequest) -> AdminResult<User> {
        let span = tracing::info_span!("add_user", %organizer_id, event_id = %request.event_id);
        let result = self.insert_user(organizer_id, request).instrument(span).await;
        log_outcome("add_user", &result);
        result
    }

    async fn list_users(&self, organizer_id: &OrganizerId, event_id: &EventId) -> AdminResult<Vec<User>> {
        let span = tracing::debug_span!("list_users", %organizer_id, %event_id);
        let result = async {
            let event = self.owned_event(organizer_id, event_id).await?;
            Ok::<_, AdminError>(self.providers.users.list_by_event(&event.id).await?)
        }
        .instrument(span)
        .await;
        log_outcome("list_users", &result);
        result
    }

    async fn add_item(&self, organizer_id: &OrganizerId, request: AddItemRequest) -> AdminResult<Item> {
        let span = tracing::info_span!("add_item", %organizer_id, event_id = %request.event_id);
        let result = self.insert_item(organizer_id, request).instrument(span).await;
        log_outcome("add_item", &result);
        result
    }

    async fn list_items(&self, organizer_id: &OrganizerId, event_id: &EventId) -> AdminResult<Vec<Item>> {
        let span = tracing::debug_span!("list_items", %organizer_id, %event_id);
        let result = async {
            let event = self.owned_event(organizer_id, event_id).await?;
            Ok::<_, AdminError>(self.providers.items.list_by_event(&event.id).await?)
        }
        .instrument(span)
        .await;
        log_outcome("list_items", &result);
        result
    }

    async fn remove_item(
        &self,
        organizer_id: &OrganizerId,
        event_id: &EventId,
        item_id: &ItemId,
    ) -> AdminResult<()> {
        let span = tracing::info_span!("remove_item", %organizer_id, %event_id, %item_id);
        let result = self
            .delete_item(organizer_id, event_id, item_id)
            .instrument(span)
            .await;
        log_outcome("remove_item", &result);
        result
    }

    async fn budget_summary(
        &self,
        organizer_id: &OrganizerId,
        event_id: &EventId,
    ) -> AdminResult<BudgetSummary> {
        let span = tracing::debug_span!("budget_summary", %organizer_id, %event_id);
        let result = async {
            let event = self.owned_event(organizer_id, event_id).await?;
            let users = self.providers.users.list_by_event(&event.id).await?;
            Ok::<_, AdminError>(rules::summarize_budget(&event, &users))
        }
        .instrument(span)
        .await;
        log_outcome("budget_summary", &result);
        result
    }
}
