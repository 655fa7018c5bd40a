use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use eventadmin_core::{EventId, ItemId, OrganizerId, UserId};
use eventadmin_domain::{Event, Item, NewEvent, NewItem, NewUser, User};

use super::r#trait::{
    DataProviders, EventRepository, ItemRepository, ProviderError, ProviderFactory,
    ProviderResult, UserRepository,
};

/// In-memory backing store shared by the in-memory repositories.
///
/// Intended for tests/dev. Each entity kind sits behind its own lock and keeps
/// insertion order, which is what listings return. Not optimized for performance.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    events: RwLock<Vec<Event>>,
    users: RwLock<Vec<User>>,
    items: RwLock<Vec<Item>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn read<T>(lock: &RwLock<T>) -> ProviderResult<RwLockReadGuard<'_, T>> {
    lock.read()
        .map_err(|_| ProviderError::Storage("lock poisoned".to_string()))
}

fn write<T>(lock: &RwLock<T>) -> ProviderResult<RwLockWriteGuard<'_, T>> {
    lock.write()
        .map_err(|_| ProviderError::Storage("lock poisoned".to_string()))
}

#[derive(Debug, Clone)]
pub struct InMemoryEventRepository {
    store: Arc<InMemoryStore>,
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn create(&self, event: NewEvent) -> ProviderResult<Event> {
        let event = Event::from_new(EventId::new(), event);
        write(&self.store.events)?.push(event.clone());
        Ok(event)
    }

    async fn get(&self, id: &EventId) -> ProviderResult<Option<Event>> {
        let events = read(&self.store.events)?;
        Ok(events.iter().find(|e| &e.id == id).cloned())
    }

    async fn list_by_organizer(&self, organizer_id: &OrganizerId) -> ProviderResult<Vec<Event>> {
        let events = read(&self.store.events)?;
        Ok(events
            .iter()
            .filter(|e| &e.organizer_id == organizer_id)
            .cloned()
            .collect())
    }
}

#[derive(Debug, Clone)]
pub struct InMemoryUserRepository {
    store: Arc<InMemoryStore>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: NewUser) -> ProviderResult<User> {
        let user = User::from_new(UserId::new(), user);
        write(&self.store.users)?.push(user.clone());
        Ok(user)
    }

    async fn get(&self, id: &UserId) -> ProviderResult<Option<User>> {
        let users = read(&self.store.users)?;
        Ok(users.iter().find(|u| &u.id == id).cloned())
    }

    async fn list_by_event(&self, event_id: &EventId) -> ProviderResult<Vec<User>> {
        let users = read(&self.store.users)?;
        Ok(users
            .iter()
            .filter(|u| &u.event_id == event_id)
            .cloned()
            .collect())
    }
}

#[derive(Debug, Clone)]
pub struct InMemoryItemRepository {
    store: Arc<InMemoryStore>,
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn create(&self, item: NewItem) -> ProviderResult<Item> {
        let item = Item::from_new(ItemId::new(), item);
        write(&self.store.items)?.push(item.clone());
        Ok(item)
    }

    async fn get(&self, id: &ItemId) -> ProviderResult<Option<Item>> {
        let items = read(&self.store.items)?;
        Ok(items.iter().find(|i| &i.id == id).cloned())
    }

    async fn list_by_event(&self, event_id: &EventId) -> ProviderResult<Vec<Item>> {
        let items = read(&self.store.items)?;
        Ok(items
            .iter()
            .filter(|i| &i.event_id == event_id)
            .cloned()
            .collect())
    }

    async fn delete(&self, id: &ItemId) -> ProviderResult<bool> {
        let mut items = write(&self.store.items)?;
        let before = items.len();
        items.retain(|i| &i.id != id);
        let removed = items.len() != before;
        if removed {
            tracing::debug!(item_id = %id, "item removed from in-memory store");
        }
        Ok(removed)
    }
}

/// Provider factory over an owned [`InMemoryStore`].
///
/// Every `DataProviders` it hands out shares the same store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProviderFactory {
    store: Arc<InMemoryStore>,
}

impl InMemoryProviderFactory {
    pub fn new(store: InMemoryStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

impl ProviderFactory for InMemoryProviderFactory {
    fn create_providers(&self) -> DataProviders {
        DataProviders {
            events: Arc::new(InMemoryEventRepository {
                store: Arc::clone(&self.store),
            }),
            users: Arc::new(InMemoryUserRepository {
                store: Arc::clone(&self.store),
            }),
            items: Arc::new(InMemoryItemRepository {
                store: Arc::clone(&self.store),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use eventadmin_core::Credits;

    fn organizer(id: &str) -> OrganizerId {
        OrganizerId::new(id).unwrap()
    }

    fn new_event(organizer_id: &str, name: &str) -> NewEvent {
        let now = Utc::now();
        NewEvent {
            organizer_id: organizer(organizer_id),
            name: name.to_string(),
            description: String::new(),
            organizer_name: String::new(),
            organizer_email: String::new(),
            budget: Credits::from_units(100),
            start_at: now,
            end_at: now,
        }
    }

    fn new_item(event_id: EventId, name: &str) -> NewItem {
        NewItem {
            event_id,
            url: "url".to_string(),
            image_src: "imageSrc".to_string(),
            price: Credits::from_units(10),
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn events_are_listed_per_organizer_in_creation_order() {
        let providers = InMemoryProviderFactory::default().create_providers();

        let first = providers.events.create(new_event("org-a", "first")).await.unwrap();
        providers.events.create(new_event("org-b", "other")).await.unwrap();
        let second = providers.events.create(new_event("org-a", "second")).await.unwrap();

        let listed = providers.events.list_by_organizer(&organizer("org-a")).await.unwrap();
        assert_eq!(listed, vec![first.clone(), second]);

        let fetched = providers.events.get(&first.id).await.unwrap();
        assert_eq!(fetched, Some(first));
        assert!(providers.events.get(&EventId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn users_are_scoped_by_event() {
        let providers = InMemoryProviderFactory::default().create_providers();
        let a = EventId::new();
        let b = EventId::new();

        let user = providers
            .users
            .create(NewUser {
                event_id: a,
                user_name: "userName".to_string(),
                name: "name".to_string(),
                email: "email".to_string(),
                initial_credits: Credits::from_units(10),
            })
            .await
            .unwrap();

        assert_eq!(providers.users.list_by_event(&a).await.unwrap(), vec![user.clone()]);
        assert!(providers.users.list_by_event(&b).await.unwrap().is_empty());
        assert_eq!(providers.users.get(&user.id).await.unwrap(), Some(user));
    }

    #[tokio::test]
    async fn delete_reports_whether_an_item_was_removed() {
        let providers = InMemoryProviderFactory::default().create_providers();
        let event_id = EventId::new();
        let apple = providers.items.create(new_item(event_id, "apple")).await.unwrap();
        let pear = providers.items.create(new_item(event_id, "pear")).await.unwrap();

        assert!(providers.items.delete(&apple.id).await.unwrap());
        assert!(!providers.items.delete(&apple.id).await.unwrap());
        assert_eq!(providers.items.list_by_event(&event_id).await.unwrap(), vec![pear]);
    }

    #[tokio::test]
    async fn providers_from_one_factory_share_the_store() {
        let factory = InMemoryProviderFactory::new(InMemoryStore::new());
        let writer = factory.create_providers();
        let reader = factory.create_providers();

        let event = writer.events.create(new_event("org-a", "shared")).await.unwrap();
        assert_eq!(reader.events.get(&event.id).await.unwrap(), Some(event));

        let isolated = InMemoryProviderFactory::default().create_providers();
        assert!(isolated.events.list_by_organizer(&organizer("org-a")).await.unwrap().is_empty());
    }
}
