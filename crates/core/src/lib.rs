//! `eventadmin-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod credits;
pub mod error;
pub mod id;

pub use credits::Credits;
pub use error::{DomainError, DomainResult, ErrorKind};
pub use id::{EventId, ItemId, OrganizerId, UserId};
