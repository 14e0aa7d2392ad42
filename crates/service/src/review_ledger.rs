//! Review ledger.
//!
//! Per restaurant, `bites:reviews:<restaurant_id>` is a list of review ids
//! with the newest at index 0. Each review's detail record lives in the
//! hash `bites:reviews:details:<review_id>`. The two are written and removed
//! together but not atomically.

use chrono::Utc;
use futures::future::join_all;
use models::keys;
use models::review::{Review, ReviewInput, RESTAURANT_ID_FIELD};
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::metrics;
use crate::pagination::Pagination;
use crate::storage::SharedStore;

#[derive(Clone)]
pub struct ReviewLedger {
    store: SharedStore,
}

impl ReviewLedger {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Push a new review id to the front of the restaurant's list and write
    /// its detail record. Both writes are issued together and both must
    /// succeed; a failure on one side is not undone on the other.
    #[instrument(skip(self, input))]
    pub async fn add_review(&self, restaurant_id: &str, input: ReviewInput) -> Result<Review, ServiceError> {
        input.validate()?;
        let review = Review::new(
            Uuid::new_v4().to_string(),
            restaurant_id.to_string(),
            input,
            Utc::now().timestamp_millis(),
        );
        let list_key = keys::review_key_by_id(restaurant_id)?;
        let detail_key = keys::review_details_key_by_id(&review.id)?;
        let fields = review.to_fields();

        let (pushed, written) = tokio::join!(
            self.store.lpush(&list_key, &review.id),
            self.store.hset(&detail_key, &fields),
        );

        match (pushed, written) {
            (Ok(_), Ok(())) => {}
            (Err(e), Ok(())) | (Ok(_), Err(e)) => {
                metrics::record_partial_write("review");
                error!(review_id = %review.id, error = %e, "review only partially written");
                return Err(e.into());
            }
            (Err(e), Err(_)) => return Err(e.into()),
        }

        metrics::REVIEWS_CREATED_TOTAL.inc();
        info!(event = "review_created", review_id = %review.id, %restaurant_id, "review created");
        Ok(review)
    }

    /// One page of reviews, newest first. Pages past the end are empty.
    ///
    /// Ids whose detail record is missing (a delete raced the write) are
    /// skipped, so a page can come back shorter than `limit`.
    #[instrument(skip(self))]
    pub async fn list_reviews(&self, restaurant_id: &str, page: Pagination) -> Result<Vec<Review>, ServiceError> {
        let list_key = keys::review_key_by_id(restaurant_id)?;
        let (start, end) = page.range();
        let ids = self.store.lrange(&list_key, start, end).await?;

        let detail_keys = ids
            .iter()
            .map(|id| keys::review_details_key_by_id(id))
            .collect::<Result<Vec<_>, _>>()?;
        let records = join_all(detail_keys.iter().map(|key| self.store.hgetall(key))).await;

        let mut reviews = Vec::with_capacity(records.len());
        for (key, record) in detail_keys.iter().zip(records) {
            let record = record?;
            if record.is_empty() {
                warn!(%key, %restaurant_id, "review id listed without a detail record");
                continue;
            }
            reviews.push(Review::from_fields(key, &record)?);
        }
        Ok(reviews)
    }

    /// Remove every occurrence of `review_id` from the restaurant's list and
    /// delete its detail record. Both removals are always attempted.
    ///
    /// A detail record owned by another restaurant is left alone and counts
    /// as nothing deleted. Not found only when neither removal matched
    /// anything. When exactly one side matched the delete still succeeds and
    /// the mismatch is logged.
    #[instrument(skip(self))]
    pub async fn delete_review(&self, restaurant_id: &str, review_id: &str) -> Result<String, ServiceError> {
        let list_key = keys::review_key_by_id(restaurant_id)?;
        let detail_key = keys::review_details_key_by_id(review_id)?;

        let owner = self.store.hget(&detail_key, RESTAURANT_ID_FIELD).await?;
        let owned = match owner.as_deref() {
            Some(owner) if owner != restaurant_id => {
                warn!(%review_id, %restaurant_id, %owner, "review belongs to another restaurant");
                false
            }
            _ => true,
        };

        let (removed, deleted) = tokio::join!(
            self.store.lrem(&list_key, 0, review_id),
            async {
                if owned {
                    self.store.del(&detail_key).await
                } else {
                    Ok(0)
                }
            },
        );
        let (removed, deleted) = match (removed, deleted) {
            (Ok(removed), Ok(deleted)) => (removed, deleted),
            (Err(e), _) | (_, Err(e)) => {
                error!(%review_id, error = %e, "review delete failed");
                return Err(e.into());
            }
        };

        if removed == 0 && deleted == 0 {
            return Err(ServiceError::not_found("review", review_id));
        }
        if removed == 0 || deleted == 0 {
            metrics::record_partial_write("review_delete");
            warn!(%review_id, %restaurant_id, removed, deleted, "review delete matched only one side");
        }

        metrics::REVIEWS_DELETED_TOTAL.inc();
        info!(event = "review_deleted", %review_id, %restaurant_id, removed, "review deleted");
        Ok(review_id.to_string())
    }
}
