//! Data provider contract (per-entity repositories) and implementations.

pub mod in_memory;
pub mod r#trait;

pub use in_memory::{InMemoryProviderFactory, InMemoryStore};
pub use r#trait::{
    DataProviders, EventRepository, ItemRepository, ProviderError, ProviderFactory,
    ProviderResult, UserRepository,
};
