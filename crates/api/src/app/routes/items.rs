use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use eventadmin_core::{EventId, ItemId};

use crate::admin::AdminApi;
use crate::app::{dto, errors};
use crate::context::OrganizerContext;

pub async fn add_item(
    Extension(admin): Extension<Arc<dyn AdminApi>>,
    Extension(organizer): Extension<OrganizerContext>,
    Path(event_id): Path<String>,
    body: Result<Json<dto::AddItemBody>, JsonRejection>,
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
        .add_item(organizer.organizer_id(), body.into_request(event_id))
        .await
    {
        Ok(item) => (StatusCode::CREATED, Json(item)).into_response(),
        Err(e) => errors::admin_error_to_response(e),
    }
}

pub async fn list_items(
    Extension(admin): Extension<Arc<dyn AdminApi>>,
    Extension(organizer): Extension<OrganizerContext>,
    Path(event_id): Path<String>,
) -> axum::response::Response {
    let event_id: EventId = match errors::parse_id(&event_id) {
        Ok(v) => v,
        Err(res) => return res,
    };

    match admin.list_items(organizer.organizer_id(), &event_id).await {
        Ok(items) => (StatusCode::OK, Json(items)).into_response(),
        Err(e) => errors::admin_error_to_response(e),
    }
}

pub async fn remove_item(
    Extension(admin): Extension<Arc<dyn AdminApi>>,
    Extension(organizer): Extension<OrganizerContext>,
    Path((event_id, item_id)): Path<(String, String)>,
) -> axum::response::Response {
    let event_id: EventId = match errors::parse_id(&event_id) {
        Ok(v) => v,
        Err(res) => return res,
    };
    let item_id: ItemId = match errors::parse_id(&item_id) {
        Ok(v) => v,
        Err(res) => return res,
    };

    match admin
        .remove_item(organizer.organizer_id(), &event_id, &item_id)
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::admin_error_to_response(e),
    }
}
