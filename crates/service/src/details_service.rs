use models::details::RestaurantDetails;
use models::keys;
use tracing::info;

use crate::errors::ServiceError;
use crate::storage::SharedStore;

/// Restaurant contact details, stored whole as a JSON string.
#[derive(Clone)]
pub struct DetailsService {
    store: SharedStore,
}

impl DetailsService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Validate and replace the details document for a restaurant.
    pub async fn put_details(
        &self,
        restaurant_id: &str,
        details: RestaurantDetails,
    ) -> Result<RestaurantDetails, ServiceError> {
        details.validate()?;
        let key = keys::restaurant_details_key_by_id(restaurant_id)?;
        let json = serde_json::to_string(&details).map_err(|e| ServiceError::Corrupt(e.to_string()))?;
        self.store.set(&key, &json).await?;
        info!(event = "details_saved", %restaurant_id, links = details.links.len(), "restaurant details saved");
        Ok(details)
    }

    pub async fn get_details(&self, restaurant_id: &str) -> Result<RestaurantDetails, ServiceError> {
        let key = keys::restaurant_details_key_by_id(restaurant_id)?;
        let raw = self
            .store
            .get(&key)
            .await?
            .ok_or_else(|| ServiceError::not_found("details", restaurant_id))?;
        serde_json::from_str(&raw).map_err(|e| ServiceError::Corrupt(format!("{key}: {e}")))
    }
}
