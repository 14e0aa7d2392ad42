use axum::{extract::{Path, State}, http::StatusCode, Json};
use common::types::ApiSuccess;
use models::restaurant::{Restaurant, RestaurantInput, RestaurantView};

use crate::{errors::JsonApiError, extract::JsonBody, state::ServerState};

#[utoipa::path(
    post, path = "/restaurants", tag = "restaurants",
    request_body = crate::openapi::RestaurantInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::RestaurantDoc),
        (status = 400, description = "Validation Error"),
        (status = 500, description = "Store Error")
    )
)]
pub async fn create_restaurant(
    State(state): State<ServerState>,
    JsonBody(input): JsonBody<RestaurantInput>,
) -> Result<(StatusCode, Json<ApiSuccess<Restaurant>>), JsonApiError> {
    let created = state.restaurants.create(input).await?;
    Ok((StatusCode::CREATED, Json(ApiSuccess::new(created))))
}

#[utoipa::path(
    get, path = "/restaurants/{id}", tag = "restaurants",
    params(("id" = String, Path, description = "Restaurant ID")),
    responses(
        (status = 200, description = "OK; increments viewCount", body = crate::openapi::RestaurantViewDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get_restaurant(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<ApiSuccess<RestaurantView>>, JsonApiError> {
    let view = state.restaurants.get_restaurant(&id).await?;
    Ok(Json(ApiSuccess::new(view)))
}
