//! Cuisine index: three sets kept in step with restaurant writes.
//!
//! For a restaurant R serving cuisine C:
//! - C ∈ `bites:cuisines`
//! - R ∈ `bites:cuisines:<C>`
//! - C ∈ `bites:restaurants:<R>:cuisines`
//!
//! All three memberships are written by [`CuisineIndex::index_cuisines`] and
//! nowhere else.

use futures::future::join_all;
use models::{keys, restaurant::validate_cuisine_name};
use tracing::{instrument, warn};

use crate::errors::ServiceError;
use crate::metrics;
use crate::storage::SharedStore;

#[derive(Clone)]
pub struct CuisineIndex {
    store: SharedStore,
}

impl CuisineIndex {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Fan out `cuisines` into the three index sets for `restaurant_id`.
    ///
    /// Every write is issued concurrently and awaited together. Nothing is
    /// retried or undone; if any write failed the call returns
    /// [`ServiceError::PartialIndexFailure`] once all of them have settled.
    /// Re-running for the same pairs is a no-op thanks to set semantics.
    #[instrument(skip(self, cuisines), fields(cuisines = cuisines.len()))]
    pub async fn index_cuisines(&self, restaurant_id: &str, cuisines: &[String]) -> Result<(), ServiceError> {
        let all_key = keys::cuisines_key();
        let restaurant_cuisines = keys::restaurant_cuisines_key_by_id(restaurant_id)?;

        // (key, member) pairs, built up front so key errors stop us before any write
        let mut writes: Vec<(String, String)> = Vec::with_capacity(cuisines.len() * 3);
        for cuisine in cuisines {
            validate_cuisine_name(cuisine)?;
            writes.push((all_key.clone(), cuisine.clone()));
            writes.push((keys::cuisine_key(cuisine)?, restaurant_id.to_string()));
            writes.push((restaurant_cuisines.clone(), cuisine.clone()));
        }

        let results = join_all(writes.iter().map(|(key, member)| self.store.sadd(key, member))).await;

        let mut failed = 0usize;
        for ((key, member), result) in writes.iter().zip(&results) {
            if let Err(e) = result {
                failed += 1;
                warn!(%restaurant_id, %key, %member, error = %e, "cuisine index write failed");
            }
        }
        if failed > 0 {
            metrics::record_partial_write("cuisine_index");
            return Err(ServiceError::PartialIndexFailure {
                restaurant_id: restaurant_id.to_string(),
                failed,
                attempted: writes.len(),
            });
        }
        Ok(())
    }

    /// Cuisines served by a restaurant, sorted for stable output.
    pub async fn cuisines_for(&self, restaurant_id: &str) -> Result<Vec<String>, ServiceError> {
        let key = keys::restaurant_cuisines_key_by_id(restaurant_id)?;
        let mut cuisines = self.store.smembers(&key).await?;
        cuisines.sort();
        Ok(cuisines)
    }

    /// Every cuisine any restaurant has been indexed under.
    pub async fn all_cuisines(&self) -> Result<Vec<String>, ServiceError> {
        let mut cuisines = self.store.smembers(&keys::cuisines_key()).await?;
        cuisines.sort();
        Ok(cuisines)
    }

    /// Ids of the restaurants serving `cuisine`.
    pub async fn restaurants_for(&self, cuisine: &str) -> Result<Vec<String>, ServiceError> {
        validate_cuisine_name(cuisine)?;
        let key = keys::cuisine_key(cuisine)?;
        let mut ids = self.store.smembers(&key).await?;
        ids.sort();
        Ok(ids)
    }
}
