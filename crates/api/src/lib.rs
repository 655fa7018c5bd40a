//! Admin API for budgeted events, plus its HTTP adapter.

pub mod admin;
pub mod app;
pub mod config;
pub mod context;
pub mod middleware;

pub use admin::{AdminApi, AdminError, AdminResult, AdminService};
