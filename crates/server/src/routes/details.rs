use axum::{extract::{Path, State}, Json};
use common::types::ApiSuccess;
use models::details::RestaurantDetails;

use crate::{errors::JsonApiError, extract::JsonBody, state::ServerState};

#[utoipa::path(
    post, path = "/restaurants/{id}/details", tag = "restaurants",
    params(("id" = String, Path, description = "Restaurant ID")),
    request_body = crate::openapi::RestaurantDetailsDoc,
    responses(
        (status = 200, description = "Saved"),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Restaurant Not Found")
    )
)]
pub async fn put_details(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    JsonBody(details): JsonBody<RestaurantDetails>,
) -> Result<Json<ApiSuccess<RestaurantDetails>>, JsonApiError> {
    Ok(Json(ApiSuccess::new(state.details.put_details(&id, details).await?)))
}

#[utoipa::path(
    get, path = "/restaurants/{id}/details", tag = "restaurants",
    params(("id" = String, Path, description = "Restaurant ID")),
    responses(
        (status = 200, description = "OK"),
        (status = 404, description = "Restaurant or Details Not Found")
    )
)]
pub async fn get_details(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<ApiSuccess<RestaurantDetails>>, JsonApiError> {
    Ok(Json(ApiSuccess::new(state.details.get_details(&id).await?)))
}
