use std::collections::HashMap;
use std::str::FromStr;

use crate::errors::ModelError;

/// Borrowed view over a flat hash record read from the store.
pub(crate) struct HashFields<'a> {
    key: &'a str,
    map: &'a HashMap<String, String>,
}

impl<'a> HashFields<'a> {
    pub(crate) fn new(key: &'a str, map: &'a HashMap<String, String>) -> Self {
        Self { key, map }
    }

    pub(crate) fn required(&self, field: &str) -> Result<String, ModelError> {
        self.map.get(field).cloned().ok_or_else(|| ModelError::MalformedRecord {
            key: self.key.to_string(),
            reason: format!("missing field `{field}`"),
        })
    }

    pub(crate) fn parsed<T: FromStr>(&self, field: &str) -> Result<T, ModelError> {
        let raw = self.required(field)?;
        raw.parse::<T>().map_err(|_| ModelError::MalformedRecord {
            key: self.key.to_string(),
            reason: format!("field `{field}` has unparsable value `{raw}`"),
        })
    }
}

pub(crate) fn non_empty(field: &str, value: &str) -> Result<(), ModelError> {
    if value.trim().is_empty() {
        return Err(ModelError::validation(format!("{field} must not be empty")));
    }
    Ok(())
}
