//! HTTP application wiring (Axum router over an [`AdminApi`]).
//!
//! - `routes/`: HTTP routes + handlers (one file per entity kind)
//! - `dto.rs`: request bodies and their mapping to admin requests
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};

use crate::admin::AdminApi;
use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(admin: Arc<dyn AdminApi>) -> Router {
    // Protected routes: require organizer context.
    let protected = routes::router()
        .layer(Extension(admin))
        .layer(axum::middleware::from_fn(middleware::organizer_middleware));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(protected)
}
