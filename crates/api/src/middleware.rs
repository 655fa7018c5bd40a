use axum::{
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};

use eventadmin_core::OrganizerId;

use crate::context::OrganizerContext;

/// Header carrying the (already authenticated) organizer identity.
pub const ORGANIZER_HEADER: &str = "x-organizer-id";

pub async fn organizer_middleware(
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let organizer_id = extract_organizer(req.headers())?;

    req.extensions_mut()
        .insert(OrganizerContext::new(organizer_id));

    Ok(next.run(req).await)
}

fn extract_organizer(headers: &HeaderMap) -> Result<OrganizerId, StatusCode> {
    let header = headers
        .get(ORGANIZER_HEADER)
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let header = header.to_str().map_err(|_| StatusCode::UNAUTHORIZED)?;

    OrganizerId::new(header.trim()).map_err(|_| StatusCode::UNAUTHORIZED)
}
