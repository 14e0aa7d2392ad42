use axum::{
    http::StatusCode,
    middleware,
    routing::{delete, get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;

use crate::{gate, openapi::ApiDoc, state::ServerState};

pub mod cuisines;
pub mod details;
pub mod restaurants;
pub mod reviews;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn metrics() -> (StatusCode, String) {
    let (code, body) = service::metrics::encode_metrics();
    (StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR), body)
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router.
///
/// Every route with a restaurant `:id` sits behind the existence gate.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    // Public routes (health, metrics, docs)
    let public = Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .route("/api-docs/openapi.json", get(openapi_json));

    // Routes that do not reference an existing restaurant
    let open = Router::new()
        .route("/restaurants", post(restaurants::create_restaurant))
        .route("/cuisines", get(cuisines::list_cuisines))
        .route("/cuisines/:cuisine", get(cuisines::list_cuisine_restaurants));

    // Routes gated on the restaurant existing
    let gated = Router::new()
        .route("/restaurants/:id", get(restaurants::get_restaurant))
        .route(
            "/restaurants/:id/reviews",
            get(reviews::list_reviews).post(reviews::add_review),
        )
        .route("/restaurants/:id/reviews/:review_id", delete(reviews::delete_review))
        .route(
            "/restaurants/:id/details",
            get(details::get_details).post(details::put_details),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            gate::require_restaurant,
        ));

    public
        .merge(open)
        .merge(gated)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use service::storage::MemoryStore;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app() -> Router {
        build_router(ServerState::new(Arc::new(MemoryStore::new())), CorsLayer::very_permissive())
    }

    #[tokio::test]
    async fn health_is_ok() {
        let res = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn gate_rejects_unknown_restaurant_on_every_gated_route() {
        for (method, uri) in [
            ("GET", "/restaurants/nope"),
            ("GET", "/restaurants/nope/reviews"),
            ("DELETE", "/restaurants/nope/reviews/v1"),
            ("GET", "/restaurants/nope/details"),
        ] {
            let res = app()
                .oneshot(Request::builder().method(method).uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(res.status(), StatusCode::NOT_FOUND, "{method} {uri}");
        }
    }

    #[tokio::test]
    async fn openapi_document_is_served() {
        let res = app()
            .oneshot(Request::builder().uri("/api-docs/openapi.json").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }
}
