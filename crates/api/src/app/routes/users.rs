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

pub async fn add_user(
    Extension(admin): Extension<Arc<dyn AdminApi>>,
    Extension(organizer): Extension<OrganizerContext>,
    Path(event_id): Path<String>,
    body: Result<Json<dto::AddUserBody>, JsonRejection>,
) -> axum::response::Response {
    let event_id: EventId = match errors::parse_id(&event_id) {
        Ok(v) => v,
        Err(res) => return res,
    };
    let body = match errors::json_body(body) {
        Ok(v) => v,
        Err(res) => return res,
    };

    match admin
        .add_user(organizer.organizer_id(), body.into_request(event_id))
        .await
    {
        Ok(user) => (StatusCode::CREATED, Json(user)).into_response(),
        Err(e) => errors::admin_error_to_response(e),
    }
}

pub async fn list_users(
    Extension(admin): Extension<Arc<dyn AdminApi>>,
    Extension(organizer): Extension<OrganizerContext>,
    Path(event_id): Path<String>,
) -> axum::response::Response {
    let event_id: EventId = match errors::parse_id(&event_id) {
        Ok(v) => v,
        Err(res) => return res,
    };

    match admin.list_users(organizer.organizer_id(), &event_id).await {
        Ok(users) => (StatusCode::OK, Json(users)).into_response(),
        Err(e) => errors::admin_error_to_response(e),
    }
}
