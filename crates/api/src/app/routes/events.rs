use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use eventadmin_core::EventId;

use crate::admin::AdminApi;
use crate::app::{dto, errors};
use crate::context::OrganizerContext;

pub async fn create_event(
    Extension(admin): Extension<Arc<dyn AdminApi>>,
    Extension(organizer): Extension<OrganizerContext>,
    body: Result<Json<dto::CreateEventBody>, JsonRejection>,
) -> axum::response::Response {
    let body = match errors::json_body(body) {
        Ok(v) => v,
        Err(res) => return res,
    };
    let request = body.into_request(organizer.organizer_id());
    match admin.create_event(request).await {
        Ok(event) => (StatusCode::CREATED, Json(event)).into_response(),
        Err(e) => errors::admin_error_to_response(e),
    }
}

pub async fn list_events(
    Extension(admin): Extension<Arc<dyn AdminApi>>,
    Extension(organizer): Extension<OrganizerContext>,
) -> axum::response::Response {
    match admin.list_events(organizer.organizer_id()).await {
        Ok(events) => (StatusCode::OK, Json(events)).into_response(),
        Err(e) => errors::admin_error_to_response(e),
    }
}

pub async fn get_event(
    Extension(admin): Extension<Arc<dyn AdminApi>>,
    Extension(organizer): Extension<OrganizerContext>,
    Path(event_id): Path<String>,
) -> axum::response::Response {
    let event_id: EventId = match errors::parse_id(&event_id) {
        Ok(v) => v,
        Err(res) => return res,
    };

    match admin.get_event(organizer.organizer_id(), &event_id).await {
        Ok(event) => (StatusCode::OK, Json(event)).into_response(),
        Err(e) => errors::admin_error_to_response(e),
    }
}

pub async fn budget_summary(
    Extension(admin): Extension<Arc<dyn AdminApi>>,
    Extension(organizer): Extension<OrganizerContext>,
    Path(event_id): Path<String>,
) -> axum::response::Response {
    let event_id: EventId = match errors::parse_id(&event_id) {
        Ok(v) => v,
        Err(res) => return res,
    };

    match admin.budget_summary(organizer.organizer_id(), &event_id).await {
        Ok(summary) => (StatusCode::OK, Json(summary)).into_response(),
        Err(e) => errors::admin_error_to_response(e),
    }
}
