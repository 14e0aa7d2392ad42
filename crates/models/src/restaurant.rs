use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::fields::{non_empty, HashFields};
use crate::keys;

/// Hash field holding the store-side view counter.
pub const VIEW_COUNT_FIELD: &str = "viewCount";

/// Restaurant as written to `bites:restaurants:<id>`.
///
/// Cuisines are not part of the record; they only live in the cuisine index.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub location: String,
}

impl Restaurant {
    /// Flat hash fields. `viewCount` is never written here.
    pub fn to_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("id", self.id.clone()),
            ("name", self.name.clone()),
            ("location", self.location.clone()),
        ]
    }

    pub fn from_fields(key: &str, map: &HashMap<String, String>) -> Result<Self, ModelError> {
        let f = HashFields::new(key, map);
        Ok(Self { id: f.required("id")?, name: f.required("name")?, location: f.required("location")? })
    }
}

/// Read model returned by `GET /restaurants/:id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantView {
    #[serde(flatten)]
    pub restaurant: Restaurant,
    pub view_count: u64,
    pub cuisines: Vec<String>,
}

/// Body of `POST /restaurants`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantInput {
    pub name: String,
    pub location: String,
    pub cuisines: Vec<String>,
}

impl RestaurantInput {
    pub fn validate(&self) -> Result<(), ModelError> {
        non_empty("name", &self.name)?;
        non_empty("location", &self.location)?;
        if self.cuisines.is_empty() {
            return Err(ModelError::validation("cuisines must contain at least one entry"));
        }
        for cuisine in &self.cuisines {
            validate_cuisine_name(cuisine)?;
        }
        Ok(())
    }
}

/// Cuisine names become key segments, so the key rules apply to them too.
pub fn validate_cuisine_name(name: &str) -> Result<(), ModelError> {
    non_empty("cuisine", name)?;
    keys::check_segment(name).map_err(|e| ModelError::validation(format!("cuisine: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> RestaurantInput {
        RestaurantInput {
            name: "Pasta Place".into(),
            location: "Downtown".into(),
            cuisines: vec!["italian".into()],
        }
    }

    #[test]
    fn valid_input_passes() {
        assert!(input().validate().is_ok());
    }

    #[test]
    fn empty_fields_rejected() {
        let mut i = input();
        i.name = "".into();
        assert!(matches!(i.validate(), Err(ModelError::Validation(_))));

        let mut i = input();
        i.location = "   ".into();
        assert!(i.validate().is_err());

        let mut i = input();
        i.cuisines.clear();
        assert!(i.validate().is_err());

        let mut i = input();
        i.cuisines.push(String::new());
        assert!(i.validate().is_err());
    }

    #[test]
    fn cuisine_with_delimiter_rejected() {
        let mut i = input();
        i.cuisines = vec!["asian:fusion".into()];
        assert!(matches!(i.validate(), Err(ModelError::Validation(_))));
    }

    #[test]
    fn record_fields_round_trip_without_view_count() {
        let r = Restaurant { id: "r1".into(), name: "A".into(), location: "B".into() };
        let fields = r.to_fields();
        assert!(fields.iter().all(|(k, _)| *k != VIEW_COUNT_FIELD));

        let mut map: HashMap<String, String> =
            fields.into_iter().map(|(k, v)| (k.to_string(), v)).collect();
        map.insert(VIEW_COUNT_FIELD.into(), "3".into());
        assert_eq!(Restaurant::from_fields("bites:restaurants:r1", &map).unwrap(), r);
    }

    #[test]
    fn missing_field_is_malformed() {
        let map = HashMap::from([("id".to_string(), "r1".to_string())]);
        let err = Restaurant::from_fields("bites:restaurants:r1", &map).unwrap_err();
        assert!(matches!(err, ModelError::MalformedRecord { .. }));
    }

    #[test]
    fn view_serializes_camel_case_and_flat() {
        let view = RestaurantView {
            restaurant: Restaurant { id: "r1".into(), name: "A".into(), location: "B".into() },
            view_count: 1,
            cuisines: vec!["italian".into()],
        };
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["id"], "r1");
        assert_eq!(json["viewCount"], 1);
        assert_eq!(json["cuisines"][0], "italian");
    }
}
