use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::fields::{non_empty, HashFields};

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;
/// Detail-record field naming the restaurant a review belongs to.
pub const RESTAURANT_ID_FIELD: &str = "restaurantId";

/// Body of `POST /restaurants/:id/reviews`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewInput {
    pub rating: u8,
    pub comment: String,
}

impl ReviewInput {
    pub fn validate(&self) -> Result<(), ModelError> {
        if !(MIN_RATING..=MAX_RATING).contains(&self.rating) {
            return Err(ModelError::validation(format!(
                "rating must be between {MIN_RATING} and {MAX_RATING}"
            )));
        }
        non_empty("comment", &self.comment)
    }
}

/// Review detail record stored at `bites:reviews:details:<id>`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub restaurant_id: String,
    pub rating: u8,
    pub comment: String,
    /// Creation time in milliseconds since the Unix epoch.
    pub timestamp: i64,
}

impl Review {
    pub fn new(id: String, restaurant_id: String, input: ReviewInput, timestamp: i64) -> Self {
        Self { id, restaurant_id, rating: input.rating, comment: input.comment, timestamp }
    }

    pub fn to_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("id", self.id.clone()),
            (RESTAURANT_ID_FIELD, self.restaurant_id.clone()),
            ("rating", self.rating.to_string()),
            ("comment", self.comment.clone()),
            ("timestamp", self.timestamp.to_string()),
        ]
    }

    pub fn from_fields(key: &str, map: &HashMap<String, String>) -> Result<Self, ModelError> {
        let f = HashFields::new(key, map);
        Ok(Self {
            id: f.required("id")?,
            restaurant_id: f.required(RESTAURANT_ID_FIELD)?,
            rating: f.parsed("rating")?,
            comment: f.required("comment")?,
            timestamp: f.parsed("timestamp")?,
        })
    }
}
