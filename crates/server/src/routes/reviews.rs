use axum::{extract::{Path, State}, http::StatusCode, Json};
use common::types::ApiSuccess;
use models::review::{Review, ReviewInput};
use serde::{Deserialize, Serialize};
use service::pagination::Pagination;

use crate::{errors::JsonApiError, extract::{JsonBody, QueryParams}, state::ServerState};

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ReviewQuery {
    /// 1-based page, default 1
    pub page: Option<u32>,
    /// page size, default 1, at most 100
    pub limit: Option<u32>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedReview {
    pub review_id: String,
}

#[utoipa::path(
    post, path = "/restaurants/{id}/reviews", tag = "reviews",
    params(("id" = String, Path, description = "Restaurant ID")),
    request_body = crate::openapi::ReviewInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::ReviewDoc),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Restaurant Not Found")
    )
)]
pub async fn add_review(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    JsonBody(input): JsonBody<ReviewInput>,
) -> Result<(StatusCode, Json<ApiSuccess<Review>>), JsonApiError> {
    let review = state.reviews.add_review(&id, input).await?;
    Ok((StatusCode::CREATED, Json(ApiSuccess::new(review))))
}

#[utoipa::path(
    get, path = "/restaurants/{id}/reviews", tag = "reviews",
    params(("id" = String, Path, description = "Restaurant ID"), ReviewQuery),
    responses(
        (status = 200, description = "Reviews, newest first", body = [crate::openapi::ReviewDoc]),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Restaurant Not Found")
    )
)]
pub async fn list_reviews(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    QueryParams(q): QueryParams<ReviewQuery>,
) -> Result<Json<ApiSuccess<Vec<Review>>>, JsonApiError> {
    let page = Pagination::from_query(q.page, q.limit)?;
    let reviews = state.reviews.list_reviews(&id, page).await?;
    Ok(Json(ApiSuccess::new(reviews)))
}

#[utoipa::path(
    delete, path = "/restaurants/{id}/reviews/{review_id}", tag = "reviews",
    params(
        ("id" = String, Path, description = "Restaurant ID"),
        ("review_id" = String, Path, description = "Review ID")
    ),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Restaurant or Review Not Found")
    )
)]
pub async fn delete_review(
    State(state): State<ServerState>,
    Path((id, review_id)): Path<(String, String)>,
) -> Result<Json<ApiSuccess<DeletedReview>>, JsonApiError> {
    let review_id = state.reviews.delete_review(&id, &review_id).await?;
    Ok(Json(ApiSuccess::new(DeletedReview { review_id })))
}
