use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct RestaurantInputDoc {
    pub name: String,
    pub location: String,
    pub cuisines: Vec<String>,
}

#[derive(ToSchema)]
pub struct RestaurantDoc {
    pub id: String,
    pub name: String,
    pub location: String,
}

#[derive(ToSchema)]
#[allow(non_snake_case)]
pub struct RestaurantViewDoc {
    pub id: String,
    pub name: String,
    pub location: String,
    pub viewCount: u64,
    pub cuisines: Vec<String>,
}

#[derive(ToSchema)]
pub struct ReviewInputDoc {
    /// 1 to 5
    pub rating: u8,
    pub comment: String,
}

#[derive(ToSchema)]
#[allow(non_snake_case)]
pub struct ReviewDoc {
    pub id: String,
    pub restaurantId: String,
    pub rating: u8,
    pub comment: String,
    /// milliseconds since the Unix epoch
    pub timestamp: i64,
}

#[derive(ToSchema)]
pub struct ContactDoc { pub phone: String, pub email: String }

#[derive(ToSchema)]
pub struct LinkDoc { pub name: String, pub url: String, pub contact: ContactDoc }

#[derive(ToSchema)]
pub struct RestaurantDetailsDoc { pub links: Vec<LinkDoc> }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::restaurants::create_restaurant,
        crate::routes::restaurants::get_restaurant,
        crate::routes::reviews::add_review,
        crate::routes::reviews::list_reviews,
        crate::routes::reviews::delete_review,
        crate::routes::cuisines::list_cuisines,
        crate::routes::cuisines::list_cuisine_restaurants,
        crate::routes::details::put_details,
        crate::routes::details::get_details,
    ),
    components(
        schemas(
            HealthResponse,
            RestaurantInputDoc,
            RestaurantDoc,
            RestaurantViewDoc,
            ReviewInputDoc,
            ReviewDoc,
            ContactDoc,
            LinkDoc,
            RestaurantDetailsDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "restaurants"),
        (name = "reviews"),
        (name = "cuisines")
    )
)]
pub struct ApiDoc;
