use futures::future::join_all;
use models::keys;
use models::restaurant::{Restaurant, RestaurantInput, RestaurantView, VIEW_COUNT_FIELD};
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

use crate::cuisine_index::CuisineIndex;
use crate::errors::ServiceError;
use crate::metrics;
use crate::storage::SharedStore;

/// Typed access to restaurant records at `bites:restaurants:<id>`.
#[derive(Clone)]
pub struct RestaurantService {
    store: SharedStore,
    index: CuisineIndex,
}

impl RestaurantService {
    pub fn new(store: SharedStore, index: CuisineIndex) -> Self {
        Self { store, index }
    }

    /// Write a new restaurant record under a fresh id.
    ///
    /// Ids are random v4 UUIDs; no collision check is made against the store.
    pub async fn create_restaurant(&self, name: &str, location: &str) -> Result<Restaurant, ServiceError> {
        let restaurant = Restaurant {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            location: location.to_string(),
        };
        let key = keys::restaurant_key_by_id(&restaurant.id)?;
        self.store.hset(&key, &restaurant.to_fields()).await?;
        Ok(restaurant)
    }

    /// Validate, write the record, then fan its cuisines out into the index.
    ///
    /// The index is only written once the record exists, so a failed record
    /// write leaves nothing behind. A failed index write is not undone and
    /// surfaces as [`ServiceError::PartialIndexFailure`].
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create(&self, input: RestaurantInput) -> Result<Restaurant, ServiceError> {
        input.validate()?;
        let restaurant = self
            .create_restaurant(&input.name, &input.location)
            .await
            .inspect_err(|e| error!(error = %e, "restaurant record write failed"))?;

        self.index.index_cuisines(&restaurant.id, &input.cuisines).await?;

        metrics::RESTAURANTS_CREATED_TOTAL.inc();
        info!(event = "restaurant_created", restaurant_id = %restaurant.id, cuisines = input.cuisines.len(), "restaurant created");
        Ok(restaurant)
    }

    /// Increment the view counter and read the record and its cuisines.
    ///
    /// The three commands go out together; `viewCount` is the value the
    /// increment returned, so sequential reads observe 1, 2, 3, ...
    /// Existence is checked by the caller beforehand.
    #[instrument(skip(self))]
    pub async fn get_restaurant(&self, id: &str) -> Result<RestaurantView, ServiceError> {
        let key = keys::restaurant_key_by_id(id)?;
        let (views, record, cuisines) = tokio::join!(
            self.store.hincrby(&key, VIEW_COUNT_FIELD, 1),
            self.store.hgetall(&key),
            self.index.cuisines_for(id),
        );
        let views = views?;
        let restaurant = Restaurant::from_fields(&key, &record?)?;

        Ok(RestaurantView {
            restaurant,
            view_count: u64::try_from(views).unwrap_or_default(),
            cuisines: cuisines?,
        })
    }

    pub async fn exists(&self, id: &str) -> Result<bool, ServiceError> {
        let key = keys::restaurant_key_by_id(id)?;
        Ok(self.store.exists(&key).await?)
    }

    /// Restaurants serving `cuisine`, without touching their view counters.
    /// Index entries whose record is gone are skipped.
    pub async fn list_by_cuisine(&self, cuisine: &str) -> Result<Vec<Restaurant>, ServiceError> {
        let ids = self.index.restaurants_for(cuisine).await?;
        let record_keys = ids
            .iter()
            .map(|id| keys::restaurant_key_by_id(id))
            .collect::<Result<Vec<_>, _>>()?;

        let records = join_all(record_keys.iter().map(|key| self.store.hgetall(key))).await;

        let mut restaurants = Vec::with_capacity(records.len());
        for (key, record) in record_keys.iter().zip(records) {
            let record = record?;
            if record.is_empty() {
                warn!(%key, %cuisine, "cuisine index points at a missing restaurant");
                continue;
            }
            restaurants.push(Restaurant::from_fields(key, &record)?);
        }
        Ok(restaurants)
    }
}
