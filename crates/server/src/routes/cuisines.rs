use axum::{extract::{Path, State}, Json};
use common::types::ApiSuccess;
use models::restaurant::Restaurant;

use crate::{errors::JsonApiError, state::ServerState};

#[utoipa::path(
    get, path = "/cuisines", tag = "cuisines",
    responses((status = 200, description = "All known cuisines", body = [String]))
)]
pub async fn list_cuisines(State(state): State<ServerState>) -> Result<Json<ApiSuccess<Vec<String>>>, JsonApiError> {
    Ok(Json(ApiSuccess::new(state.cuisines.all_cuisines().await?)))
}

#[utoipa::path(
    get, path = "/cuisines/{cuisine}", tag = "cuisines",
    params(("cuisine" = String, Path, description = "Cuisine name")),
    responses(
        (status = 200, description = "Restaurants serving the cuisine", body = [crate::openapi::RestaurantDoc]),
        (status = 400, description = "Invalid cuisine name")
    )
)]
pub async fn list_cuisine_restaurants(
    State(state): State<ServerState>,
    Path(cuisine): Path<String>,
) -> Result<Json<ApiSuccess<Vec<Restaurant>>>, JsonApiError> {
    Ok(Json(ApiSuccess::new(state.restaurants.list_by_cuisine(&cuisine).await?)))
}
