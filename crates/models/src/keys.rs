//! Store key namespace.
//!
//! Every key is `bites` followed by one or more segments joined by `:`.
//! Segments may not be empty and may not contain `:`, which keeps the
//! mapping from segment sequences to keys injective.
//!
//! | Purpose                         | Key                                |
//! |---------------------------------|------------------------------------|
//! | Restaurant record               | `bites:restaurants:<id>`           |
//! | Global cuisine set              | `bites:cuisines`                   |
//! | Restaurants serving a cuisine   | `bites:cuisines:<cuisine>`         |
//! | Cuisines served by a restaurant | `bites:restaurants:<id>:cuisines`  |
//! | Review ids of a restaurant      | `bites:reviews:<restaurant_id>`    |
//! | Review detail record            | `bites:reviews:details:<review_id>`|
//! | Restaurant details document     | `bites:restaurant_details:<id>`    |

use crate::errors::ModelError;

pub const NAMESPACE: &str = "bites";
pub const DELIMITER: char = ':';

/// Join `segments` under the namespace.
pub fn key_name(segments: &[&str]) -> Result<String, ModelError> {
    let mut key = String::from(NAMESPACE);
    for segment in segments {
        check_segment(segment)?;
        key.push(DELIMITER);
        key.push_str(segment);
    }
    Ok(key)
}

/// Reject segments that would break key injectivity.
pub fn check_segment(segment: &str) -> Result<(), ModelError> {
    if segment.is_empty() {
        return Err(ModelError::InvalidKeySegment("segment must not be empty".into()));
    }
    if segment.contains(DELIMITER) {
        return Err(ModelError::InvalidKeySegment(format!(
            "segment `{segment}` must not contain `{DELIMITER}`"
        )));
    }
    Ok(())
}

pub fn restaurant_key_by_id(id: &str) -> Result<String, ModelError> {
    key_name(&["restaurants", id])
}

pub fn restaurant_cuisines_key_by_id(id: &str) -> Result<String, ModelError> {
    key_name(&["restaurants", id, "cuisines"])
}

pub fn restaurant_details_key_by_id(id: &str) -> Result<String, ModelError> {
    key_name(&["restaurant_details", id])
}

pub fn cuisines_key() -> String {
    format!("{NAMESPACE}{DELIMITER}cuisines")
}

pub fn cuisine_key(name: &str) -> Result<String, ModelError> {
    key_name(&["cuisines", name])
}

pub fn review_key_by_id(restaurant_id: &str) -> Result<String, ModelError> {
    key_name(&["reviews", restaurant_id])
}

pub fn review_details_key_by_id(review_id: &str) -> Result<String, ModelError> {
    key_name(&["reviews", "details", review_id])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_shapes() {
        assert_eq!(restaurant_key_by_id("r1").unwrap(), "bites:restaurants:r1");
        assert_eq!(restaurant_cuisines_key_by_id("r1").unwrap(), "bites:restaurants:r1:cuisines");
        assert_eq!(restaurant_details_key_by_id("r1").unwrap(), "bites:restaurant_details:r1");
        assert_eq!(cuisines_key(), "bites:cuisines");
        assert_eq!(cuisine_key("italian").unwrap(), "bites:cuisines:italian");
        assert_eq!(review_key_by_id("r1").unwrap(), "bites:reviews:r1");
        assert_eq!(review_details_key_by_id("v9").unwrap(), "bites:reviews:details:v9");
    }

    #[test]
    fn cuisines_key_matches_builder() {
        assert_eq!(cuisines_key(), key_name(&["cuisines"]).unwrap());
    }

    #[test]
    fn empty_segment_rejected() {
        assert!(matches!(restaurant_key_by_id(""), Err(ModelError::InvalidKeySegment(_))));
        assert!(matches!(cuisine_key(""), Err(ModelError::InvalidKeySegment(_))));
    }

    #[test]
    fn delimiter_in_segment_rejected() {
        // "a:b" would otherwise alias the two-segment key ["a", "b"]
        assert!(key_name(&["a:b"]).is_err());
        assert_eq!(key_name(&["a", "b"]).unwrap(), "bites:a:b");
        assert!(cuisine_key("thai:street").is_err());
    }

    #[test]
    fn distinct_kinds_never_collide() {
        // a restaurant whose id is literally "details" still maps elsewhere
        let list = review_key_by_id("details").unwrap();
        let detail = review_details_key_by_id("details").unwrap();
        assert_ne!(list, detail);
        assert_ne!(
            restaurant_key_by_id("cuisines").unwrap(),
            restaurant_cuisines_key_by_id("cuisines").unwrap()
        );
    }
}
