//! Service layer: the key-value indexing scheme behind restaurants,
//! cuisines and reviews.
//! - `storage` abstracts the primitive store commands (Redis or in-memory).
//! - `restaurant_service`, `cuisine_index`, `review_ledger` and
//!   `details_service` compose those commands into typed operations.

pub mod errors;
pub mod storage;
pub mod pagination;
pub mod metrics;
pub mod cuisine_index;
pub mod restaurant_service;
pub mod review_ledger;
pub mod details_service;
#[cfg(test)]
pub mod test_support;
