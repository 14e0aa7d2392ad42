//! Restaurant details document: contact links stored as one JSON value.

use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::fields::non_empty;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    pub phone: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Link {
    pub name: String,
    pub url: String,
    pub contact: Contact,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RestaurantDetails {
    pub links: Vec<Link>,
}

impl RestaurantDetails {
    pub fn validate(&self) -> Result<(), ModelError> {
        for link in &self.links {
            non_empty("links.name", &link.name)?;
            non_empty("links.url", &link.url)?;
            non_empty("links.contact.phone", &link.contact.phone)?;
            validate_email(&link.contact.email)?;
        }
        Ok(())
    }
}

pub fn validate_email(email: &str) -> Result<(), ModelError> {
    let invalid = || ModelError::validation(format!("`{email}` is not a valid email"));
    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') || email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) if !host.is_empty() && tld.len() >= 2 => Ok(()),
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(email: &str) -> Link {
        Link {
            name: "site".into(),
            url: "https://pasta.example".into(),
            contact: Contact { phone: "555-0100".into(), email: email.into() },
        }
    }

    #[test]
    fn emails() {
        assert!(validate_email("chef@pasta.example").is_ok());
        for bad in ["", "chef", "@pasta.example", "chef@", "chef@pasta", "a@b@c.io", "a b@c.io", "chef@.io"] {
            assert!(validate_email(bad).is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn details_validate_each_link() {
        let ok = RestaurantDetails { links: vec![link("a@b.io")] };
        assert!(ok.validate().is_ok());

        let bad = RestaurantDetails { links: vec![link("a@b.io"), link("nope")] };
        assert!(bad.validate().is_err());

        let mut missing_url = link("a@b.io");
        missing_url.url.clear();
        assert!(RestaurantDetails { links: vec![missing_url] }.validate().is_err());
    }

    #[test]
    fn empty_link_list_is_allowed() {
        assert!(RestaurantDetails { links: vec![] }.validate().is_ok());
    }
}
