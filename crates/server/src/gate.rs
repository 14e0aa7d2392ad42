use std::collections::HashMap;

use axum::extract::{Path, Request, State};
use axum::middleware::Next;
use axum::response::Response;
use tracing::debug;

use crate::errors::JsonApiError;
use crate::state::ServerState;
use service::errors::ServiceError;

/// Middleware: short-circuit with 404 unless `bites:restaurants:<id>` exists.
///
/// Mounted with `route_layer` on every route carrying an `:id` segment, so
/// handlers behind it may assume the restaurant record is present.
pub async fn require_restaurant(
    State(state): State<ServerState>,
    Path(params): Path<HashMap<String, String>>,
    req: Request,
    next: Next,
) -> Result<Response, JsonApiError> {
    let id = params
        .get("id")
        .ok_or_else(|| JsonApiError::validation("missing restaurant id"))?;

    if !state.restaurants.exists(id).await? {
        debug!(restaurant_id = %id, "restaurant gate rejected request");
        return Err(ServiceError::not_found("restaurant", id.as_str()).into());
    }
    Ok(next.run(req).await)
}
