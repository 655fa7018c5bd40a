//! Infrastructure layer: data providers behind the admin core.

pub mod provider;

pub use provider::{
    DataProviders, EventRepository, InMemoryProviderFactory, InMemoryStore, ItemRepository,
    ProviderError, ProviderFactory, ProviderResult, UserRepository,
};
